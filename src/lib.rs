use std::fmt::Display;

use crate::config_handler::Config;
use lazy_static::lazy_static;
use tracing::log;

pub mod config_handler;
pub mod error;
pub mod models;
pub mod models_api;
pub mod html;
pub mod rest_client;
pub mod db;
pub mod fixture_service;
pub mod standing_service;
pub mod stats_service;
pub mod match_result_service;
pub mod player_service;
pub mod api_match_details;
pub mod listing_service;
pub mod api;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("{}: {}", msg, e);
                None
            }
        }
    }
}
