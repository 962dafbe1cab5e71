use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use football_server_rs::config_handler::Config;
use reqwest::Response;
use serde::de::DeserializeOwned;

pub struct FootballServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for FootballServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl FootballServer {
    pub fn new(port: u16) -> FootballServer {
        FootballServer { port, child_process: None }
    }

    pub async fn start(&mut self, path: &str, external_url: &str) {
        let config = Config {
            port: self.port,
            base_url: external_url.to_string(),
            data_path: format!("{path}/data"),
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("football-server-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("PORT")
            .env_remove("DATA_PATH")
            .env_remove("BASE_URL")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
        self.wait_until_up().await;
    }

    async fn wait_until_up(&self) {
        let mut nr_loops = 0;
        while reqwest::get(self.url("/")).await.is_err() {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("server did not start");
            }
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url(path)).await?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Box<dyn std::error::Error>> {
        Ok(self.get(path).await?.json().await?)
    }
}
