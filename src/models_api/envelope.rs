use serde::{Serialize, Deserialize};

pub const SUCCESS: i8 = 1;
pub const FAILURE: i8 = 0;

/// Wrapper returned by every endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status_code: i8,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(payload: T) -> Self {
        ApiResponse { status_code: SUCCESS, message: "Success".to_string(), payload: Some(payload) }
    }

    pub fn failure(message: &str) -> Self {
        ApiResponse { status_code: FAILURE, message: message.to_string(), payload: None }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS
    }
}
