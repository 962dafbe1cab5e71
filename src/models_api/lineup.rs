use serde::{Serialize, Deserialize};

use crate::models::StringOrNum;

pub const HOME_SENTINEL: i16 = -1;
pub const AWAY_SENTINEL: i16 = -2;

/// One lineup entry. Sentinel entries carry a negative number and an empty name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiMatchPlayer {
    pub number: StringOrNum,
    pub name: String,
}

impl ApiMatchPlayer {
    pub fn sentinel(number: i16) -> Self {
        ApiMatchPlayer { number: StringOrNum::Number(number), name: String::new() }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self.number, StringOrNum::Number(n) if n < 0)
    }
}
