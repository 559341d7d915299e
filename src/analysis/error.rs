use reqwest::StatusCode;
use thiserror::Error;

use crate::constants::MSG_ANALYSIS_FAILED;

/// Failure of a call to the analysis service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to analysis service failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status. `message` is the `error` field of the body, if any.
    #[error("analysis service returned {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("unexpected response from analysis service: {0}")]
    Malformed(String),
}

impl ServiceError {
    /// Message for the error slot: the service's own text when it sent one,
    /// otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => MSG_ANALYSIS_FAILED.to_string(),
        }
    }
}
