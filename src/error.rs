use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;
use tracing::log;

use crate::models_api::envelope::ApiResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const BAD_GATEWAY_MESSAGE: &str = "Upstream request failed";

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Upstream { url: String, status: StatusCode },

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("unexpected layout: {0}")]
    UnexpectedLayout(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error("could not read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("invalid json in {path}: {source}")]
    Json { path: String, source: serde_json::Error },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Scrape(ScrapeError::Http(_) | ScrapeError::Upstream { .. }) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Server side details stay in the log.
    fn public_message(&self, status: StatusCode) -> String {
        if status == StatusCode::BAD_GATEWAY {
            BAD_GATEWAY_MESSAGE.to_string()
        } else if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("[API] {status} {self}");
        } else {
            log::info!("[API] {status} {self}");
        }
        let message = self.public_message(status);
        (status, Json(ApiResponse::<()>::failure(&message))).into_response()
    }
}
