use serde::{Serialize, Deserialize};
use serde_json::value::RawValue;

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiHomeListings {
    pub leagues: Box<RawValue>,
    pub cups: Box<RawValue>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiLeagues {
    pub leagues: Box<RawValue>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiCups {
    pub cups: Box<RawValue>,
}
