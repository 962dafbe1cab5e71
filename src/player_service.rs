use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::log;

use crate::{error::ScrapeError, html, models::{MatchKey, StringOrNum}, models_api::lineup::{ApiMatchPlayer, AWAY_SENTINEL, HOME_SENTINEL}, rest_client, CONFIG};

lazy_static! {
    static ref TEAM_COLUMNS: Selector = html::selector("div.sdc-site-team-lineup__col");
    static ref PLAYERS: Selector = html::selector("dl.sdc-site-team-lineup__players");
    static ref NUMBER: Selector = html::selector("dt.sdc-site-team-lineup__player-number");
    static ref SURNAME: Selector = html::selector("span.sdc-site-team-lineup__player-surname");
}

/// Pairs jersey numbers with surnames by position in the first players list of a column.
fn column_players(column: &ElementRef, side: &str) -> Vec<ApiMatchPlayer> {
    let Some(players) = html::first(column, &PLAYERS) else {
        log::warn!("[LINEUP] No players list for {side}");
        return vec![];
    };
    let numbers = html::all_text(&players, &NUMBER);
    let names = html::all_text(&players, &SURNAME);
    if numbers.len() != names.len() {
        log::warn!("[LINEUP] {side} has {} numbers but {} surnames, keeping {}", numbers.len(), names.len(), numbers.len().min(names.len()));
    }
    numbers.into_iter()
        .zip(names)
        .map(|(number, name)| ApiMatchPlayer { number: StringOrNum::String(number), name })
        .collect()
}

/// Home sentinel, home players, away sentinel, away players.
/// The first team column is home, the second away; any other column count is rejected.
pub fn extract(page: &str) -> Result<Vec<ApiMatchPlayer>, ScrapeError> {
    let document = Html::parse_document(page);
    let columns: Vec<ElementRef> = document.select(&TEAM_COLUMNS).collect();
    let [home, away] = columns.as_slice() else {
        return Err(ScrapeError::UnexpectedLayout(format!("expected 2 team columns, found {}", columns.len())));
    };

    let mut players = vec![ApiMatchPlayer::sentinel(HOME_SENTINEL)];
    players.extend(column_players(home, "home"));
    players.push(ApiMatchPlayer::sentinel(AWAY_SENTINEL));
    players.extend(column_players(away, "away"));
    Ok(players)
}

pub struct PlayerService;
impl PlayerService {
    pub async fn update(key: &MatchKey) -> Result<Vec<ApiMatchPlayer>, ScrapeError> {
        let url = rest_client::get_match_lineups_url(CONFIG.get_base_url(), key);
        let page = rest_client::get_html(&url).await?;
        let players = extract(&page)?;
        log::info!("[LINEUP] {key} {} players", players.iter().filter(|e| !e.is_sentinel()).count());
        Ok(players)
    }
}
