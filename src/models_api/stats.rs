use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiMatchStat {
    pub title: String,
    #[serde(rename = "home")]
    pub home_value: String,
    #[serde(rename = "away")]
    pub away_value: String,
}
