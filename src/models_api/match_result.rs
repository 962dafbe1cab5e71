use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiMatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_score: String,
    pub away_score: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    pub home_goals: Vec<String>,
    pub away_goals: Vec<String>,
}
