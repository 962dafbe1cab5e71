use serde::{Serialize, Deserialize};

use super::{stats::ApiMatchStat, match_result::ApiMatchResult, lineup::ApiMatchPlayer};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiMatchDetails {
    pub stats: Vec<ApiMatchStat>,
    pub result: ApiMatchResult,
    pub players: Vec<ApiMatchPlayer>,
}
