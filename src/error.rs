// Error types for hubview.
// Covers GitHub API failures and terminal I/O errors.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubviewError {
    /// Non-2xx response from the GitHub API.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HubviewError>;
