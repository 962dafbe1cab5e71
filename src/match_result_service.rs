use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::log;

use crate::{error::ScrapeError, html, models::MatchKey, models_api::match_result::ApiMatchResult, rest_client, CONFIG};

lazy_static! {
    static ref HOME_TEAM: Selector = html::selector("span.sdc-site-match-header__team-name--home");
    static ref AWAY_TEAM: Selector = html::selector("span.sdc-site-match-header__team-name--away");
    static ref HOME_SCORE: Selector = html::selector(r#"span[data-update="score-home"]"#);
    static ref AWAY_SCORE: Selector = html::selector(r#"span[data-update="score-away"]"#);
    static ref STATUS: Selector = html::selector("div.sdc-site-match-header__status");
    static ref FULL_TIME: Selector = html::selector("span.sdc-site-match-header__match-status--ft");
    static ref MATCH_TIME: Selector = html::selector("time.sdc-site-match-header__detail-time");
    static ref VENUE: Selector = html::selector("span.sdc-site-match-header__detail-venue");
    static ref HOME_SCORERS: Selector = html::selector(r#"ul[data-update="synopsis-home"]"#);
    static ref AWAY_SCORERS: Selector = html::selector(r#"ul[data-update="synopsis-away"]"#);
    static ref SCORER: Selector = html::selector("li");
}

/// Status shown while a match has a status box but no full time marker yet.
pub const LIVE_STATUS: &str = "LIVE";

fn required(root: &ElementRef, selector: &Selector, name: &'static str) -> Result<String, ScrapeError> {
    html::first_text(root, selector).ok_or(ScrapeError::MissingElement(name))
}

fn scorers(root: &ElementRef, selector: &Selector) -> Vec<String> {
    html::first(root, selector)
        .map(|list| html::all_text(&list, &SCORER))
        .unwrap_or_default()
}

/// Team names and scores are required, everything else is kept only when present.
pub fn extract(page: &str) -> Result<ApiMatchResult, ScrapeError> {
    let document = Html::parse_document(page);
    let root = document.root_element();

    let status = html::first(&root, &STATUS).map(|status_box| {
        html::first_text(&status_box, &FULL_TIME).unwrap_or_else(|| LIVE_STATUS.to_string())
    });

    Ok(ApiMatchResult {
        home_team: required(&root, &HOME_TEAM, "home team name")?,
        away_team: required(&root, &AWAY_TEAM, "away team name")?,
        home_score: required(&root, &HOME_SCORE, "home score")?,
        away_score: required(&root, &AWAY_SCORE, "away score")?,
        status,
        match_time: html::first_text(&root, &MATCH_TIME),
        venue: html::first_text(&root, &VENUE),
        home_goals: scorers(&root, &HOME_SCORERS),
        away_goals: scorers(&root, &AWAY_SCORERS),
    })
}

pub struct MatchResultService;
impl MatchResultService {
    pub async fn update(key: &MatchKey) -> Result<ApiMatchResult, ScrapeError> {
        let url = rest_client::get_match_result_url(CONFIG.get_base_url(), key);
        let page = rest_client::get_html(&url).await?;
        let result = extract(&page)?;
        log::info!("[RESULT] {key} {} {}-{} {}", result.home_team, result.home_score, result.away_score, result.away_team);
        Ok(result)
    }
}
