use std::time::Instant;

use lazy_static::lazy_static;
use tracing::log;

use crate::error::ScrapeError;
use crate::models::{LeagueId, MatchKey};
use crate::CONFIG;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(CONFIG.user_agent.as_str())
        .build()
        .unwrap_or_default();
}

pub fn get_fixtures_url(base_url: &str, league: &LeagueId) -> String {
    format!("{base_url}/{league}-fixtures")
}

pub fn get_results_url(base_url: &str, league: &LeagueId) -> String {
    format!("{base_url}/{league}-results")
}

pub fn get_table_url(base_url: &str, league: &LeagueId) -> String {
    format!("{base_url}/{league}-table")
}

pub fn get_match_stats_url(base_url: &str, key: &MatchKey) -> String {
    format!("{base_url}/football/{}/stats/{}", key.0, key.1)
}

pub fn get_match_result_url(base_url: &str, key: &MatchKey) -> String {
    format!("{base_url}/football/{}/{}", key.0, key.1)
}

pub fn get_match_lineups_url(base_url: &str, key: &MatchKey) -> String {
    format!("{base_url}/football/{}/teams/{}", key.0, key.1)
}

/// Fetches a page and returns its body. Non 2xx responses are errors.
pub async fn get_html(url: &str) -> Result<String, ScrapeError> {
    let before = Instant::now();
    let rsp = CLIENT.get(url).send().await?;
    let status = rsp.status();
    if !status.is_success() {
        log::warn!("[REST] Call {url} returned {status} {:.2?}", before.elapsed());
        return Err(ScrapeError::Upstream { url: url.to_string(), status });
    }
    let body = rsp.text().await?;
    log::info!("[REST] Call {url} {:.2?}", before.elapsed());
    Ok(body)
}
