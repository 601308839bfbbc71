// src/error.rs
// =============================================================================
// Errors that can end a README generation run.
//
// The pipeline only ever surfaces one of three classified failures:
// - ProfileNotFound: the user lookup did not resolve
// - RepositoryFetchFailed: both repository tiers failed
// - RenderError: a malformed profile reached the renderer
//
// Lower-level HTTP problems live in github::FetchError and are converted
// into one of these at the boundary where they happen.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - Enums with named fields: each variant carries its own context
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("GitHub user '{username}' not found: {reason}")]
    ProfileNotFound { username: String, reason: String },

    #[error("Could not fetch repositories for '{username}': {reason}")]
    RepositoryFetchFailed { username: String, reason: String },

    #[error("Could not render README: {0}")]
    RenderError(String),
}

/// Result type for the generation pipeline
pub type Result<T> = std::result::Result<T, GenerateError>;

impl GenerateError {
    /// Short notice suitable for showing to the person who typed the username
    pub fn user_notice(&self) -> &'static str {
        match self {
            GenerateError::ProfileNotFound { .. } => {
                "Failed to fetch GitHub data. Please check the username and try again."
            }
            GenerateError::RepositoryFetchFailed { .. } => {
                "Failed to fetch repositories for this user. Please try again."
            }
            GenerateError::RenderError(_) => "Failed to generate README",
        }
    }
}
