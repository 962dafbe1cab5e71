use serde::{Serialize, Deserialize};

/// A fixture or a result, both listings share the same markup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiFixture {
    pub header1: Option<String>,
    pub header2: Option<String>,
    pub team1: String,
    pub team2: String,
    pub time: String,
    pub score1: String,
    pub score2: String,
    pub info: String,
    pub status: String,
    pub title: String,
    pub item_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiFixtures {
    pub fixtures: Vec<ApiFixture>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResults {
    pub results: Vec<ApiFixture>,
}
