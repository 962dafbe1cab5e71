use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::log;

use crate::{error::ScrapeError, html, models::MatchKey, models_api::stats::ApiMatchStat, rest_client, CONFIG};

lazy_static! {
    static ref STAT_NODES: Selector = html::selector("h5, div.sdc-site-match-stats__stats-home, div.sdc-site-match-stats__stats-away");
    static ref VALUE: Selector = html::selector("span.sdc-site-match-stats__val");
}

const HOME_CLASS: &str = "sdc-site-match-stats__stats-home";
const AWAY_CLASS: &str = "sdc-site-match-stats__stats-away";

/// Stat categories in output order, keyed by the heading the page uses.
pub const STAT_CATALOG: [(&str, &str); 16] = [
    ("possession", "Possession %"),
    ("total_shots", "Total Shots"),
    ("on_target", "On Target"),
    ("off_target", "Off Target"),
    ("blocked", "Blocked"),
    ("passing", "Passing %"),
    ("clear_cut_chances", "Clear-Cut Chances"),
    ("corners", "Corners"),
    ("offsides", "Offsides"),
    ("tackles", "Tackles %"),
    ("aerial_duels", "Aerial Duels %"),
    ("saves", "Saves"),
    ("fouls_committed", "Fouls Committed"),
    ("fouls_won", "Fouls Won"),
    ("yellow_cards", "Yellow Cards"),
    ("red_cards", "Red Cards"),
];

enum StatNode {
    Heading(String),
    Home(String),
    Away(String),
}

/// Flattens the page into headings and value boxes in document order,
/// so "the first home box after a heading" is a forward scan.
fn stat_nodes(document: &Html) -> Vec<StatNode> {
    document.select(&STAT_NODES)
        .map(|e| {
            let value = || html::first_text(&e, &VALUE).unwrap_or_default();
            if e.value().classes().any(|c| c == HOME_CLASS) {
                StatNode::Home(value())
            } else if e.value().classes().any(|c| c == AWAY_CLASS) {
                StatNode::Away(value())
            } else {
                StatNode::Heading(html::text(&e))
            }
        })
        .collect()
}

fn stat_for(nodes: &[StatNode], title: &str) -> Option<ApiMatchStat> {
    let start = nodes.iter().position(|e| matches!(e, StatNode::Heading(h) if h == title))?;
    let following = &nodes[start + 1..];
    let home_value = following.iter().find_map(|e| match e { StatNode::Home(v) => Some(v.clone()), _ => None })?;
    let away_value = following.iter().find_map(|e| match e { StatNode::Away(v) => Some(v.clone()), _ => None })?;
    Some(ApiMatchStat { title: title.to_string(), home_value, away_value })
}

/// One record per catalog entry whose heading is on the page, in catalog order.
pub fn extract(page: &str) -> Vec<ApiMatchStat> {
    let document = Html::parse_document(page);
    let nodes = stat_nodes(&document);
    STAT_CATALOG.iter()
        .filter_map(|(key, title)| {
            let stat = stat_for(&nodes, title);
            if stat.is_none() {
                log::debug!("[STATS] No {key} on page");
            }
            stat
        })
        .collect()
}

pub struct StatsService;
impl StatsService {
    pub async fn update(key: &MatchKey) -> Result<Vec<ApiMatchStat>, ScrapeError> {
        let url = rest_client::get_match_stats_url(CONFIG.get_base_url(), key);
        let page = rest_client::get_html(&url).await?;
        let stats = extract(&page);
        log::info!("[STATS] {key} {} stats", stats.len());
        Ok(stats)
    }
}
