// src/github/error.rs
// =============================================================================
// Everything that can go wrong while talking to GitHub.
//
// These errors never leave the github module as-is: profile.rs and repos.rs
// decide whether each one aborts the run (GenerateError) or is absorbed.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("user missing from GraphQL response")]
    MissingUser,

    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("invalid User-Agent '{0}'")]
    InvalidUserAgent(String),
}
