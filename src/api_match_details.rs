use std::time::Instant;

use tracing::log;

use crate::{LogResult, error::ScrapeError, match_result_service::MatchResultService, models::MatchKey, player_service::PlayerService, stats_service::StatsService};
use crate::models_api::{match_details::ApiMatchDetails, stats::ApiMatchStat, match_result::ApiMatchResult, lineup::ApiMatchPlayer};

pub const NOT_FOUND_MESSAGE: &str = "Match details not found";

pub struct ApiMatchDetailsService;
impl ApiMatchDetailsService {
    /// Scrapes stats, result and lineups for one match.
    /// Returns `None` unless all three produced data.
    pub async fn read(key: &MatchKey) -> Option<ApiMatchDetails> {
        let before = Instant::now();
        let (stats, result, players) = futures::join!(
            StatsService::update(key),
            MatchResultService::update(key),
            PlayerService::update(key),
        );

        let res = ApiMatchDetailsService::combine(key, stats, result, players);
        log::debug!("[DETAILS] read {key} {:.2?}", before.elapsed());
        res
    }

    fn combine(
        key: &MatchKey,
        stats: Result<Vec<ApiMatchStat>, ScrapeError>,
        result: Result<ApiMatchResult, ScrapeError>,
        players: Result<Vec<ApiMatchPlayer>, ScrapeError>,
    ) -> Option<ApiMatchDetails> {
        let stats = match stats {
            Ok(stats) if !stats.is_empty() => Some(stats),
            Ok(_) => {
                log::info!("[DETAILS] {key} no stats on page");
                None
            }
            Err(e) => {
                log::warn!("[DETAILS] {key} stats failed: {e}");
                None
            }
        };
        let result = result.ok_log(&format!("[DETAILS] {key} result failed"));
        let players = players.ok_log(&format!("[DETAILS] {key} lineups failed"));

        Some(ApiMatchDetails { stats: stats?, result: result?, players: players? })
    }
}
