// src/github/profile.rs
// =============================================================================
// Resolves a username to a Profile.
//
// This is the first step of every run. Any failure here (404, network
// error, unexpected JSON) means we have nobody to write a README for, so
// it is reported as ProfileNotFound and the run stops. No retries.
// =============================================================================

use tracing::{debug, info};

use super::client::GitHubApi;
use super::types::Profile;
use crate::error::{GenerateError, Result};

pub async fn fetch_profile<A>(api: &A, username: &str) -> Result<Profile>
where
    A: GitHubApi + ?Sized,
{
    debug!(username, "looking up profile");

    match api.fetch_user(username).await {
        Ok(profile) => {
            info!(login = %profile.login, "profile found");
            Ok(profile)
        }
        Err(e) => Err(GenerateError::ProfileNotFound {
            username: username.to_string(),
            reason: e.to_string(),
        }),
    }
}
