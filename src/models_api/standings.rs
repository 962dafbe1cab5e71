use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApiTableRow {
    pub team: String,
    pub rank: String,

    #[serde(rename = "Pl")]
    pub played: String,
    #[serde(rename = "W")]
    pub wins: String,
    #[serde(rename = "D")]
    pub draws: String,
    #[serde(rename = "L")]
    pub losses: String,
    #[serde(rename = "GD")]
    pub goal_difference: String,
    #[serde(rename = "Pts")]
    pub points: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiTable {
    pub table: Vec<ApiTableRow>,
}
