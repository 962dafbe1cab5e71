use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_base_url")]
    pub base_url: String,

    #[serde(default="default_data_path")]
    pub data_path: String,

    #[serde(default="default_user_agent")]
    pub user_agent: String,
}

fn default_port() -> u16 {
    8000
}

fn default_base_url() -> String {
    "https://www.skysports.com".to_string()
}

fn default_data_path() -> String {
    "./data".to_string()
}

fn default_user_agent() -> String {
    concat!("football-server-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            base_url: default_base_url(),
            data_path: default_data_path(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn get_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn apply_env(mut self) -> Config {
        if let Some(port) = std::env::var("PORT").ok().and_then(|e| e.parse().ok()) {
            self.port = port;
            log::info!("[CONFIG] PORT {}", self.port);
        }
        if let Ok(data_path) = std::env::var("DATA_PATH") {
            self.data_path = data_path;
            log::info!("[CONFIG] DATA_PATH {}", self.data_path);
        }
        if let Ok(base_url) = std::env::var("BASE_URL") {
            self.base_url = base_url;
            log::info!("[CONFIG] BASE_URL {}", self.base_url);
        }
        self
    }
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let result = match fs::read_to_string(&path) {
        Ok(data) => serde_json::from_str::<Config>(&data)
            .unwrap_or_else(|e| panic!("Could not parse JSON at {path}: {e}")),
        Err(e) => {
            log::warn!("[CONFIG] No config at {path} ({e}), using defaults");
            Config::default()
        }
    };
    let result = result.apply_env();
    log::info!("[CONFIG] {:?}", result);
    result
}
