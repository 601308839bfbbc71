// src/github/types.rs
// =============================================================================
// The data we collect about a GitHub user before rendering.
//
// - Profile: who the user is (from the REST user lookup)
// - RepositorySummary: one showcased repository (from either API)
// - RepositoryList: the ranked, at-most-six repositories we render
//
// These are our own types, not GitHub's JSON shapes. The JSON shapes live
// in rest.rs and graphql.rs and are converted into these.
// =============================================================================

use serde::Serialize;

/// The most repositories a README ever shows
pub const MAX_REPOSITORIES: usize = 6;

/// Shown when a repository has no description
pub const NO_DESCRIPTION: &str = "No description available";

// A GitHub user's public profile.
//
// Every optional field is None when GitHub did not send a value (or sent
// an empty string), so the renderer can decide on its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub public_repo_count: u64,
    pub website_url: Option<String>,
    pub location: Option<String>,
    pub social_handle: Option<String>,
}

impl Profile {
    /// The name to greet the user with, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    /// Link to the user's GitHub page
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: String,
    pub url: String,
    pub star_count: u64,
    pub fork_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
}

// An ordered list of at most MAX_REPOSITORIES repositories.
//
// The only way to build one is from_ranked(), which cuts the input down to
// size, so the length limit holds for every list in the program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepositoryList(Vec<RepositorySummary>);

impl RepositoryList {
    /// Keeps the first MAX_REPOSITORIES items, in the order given
    pub fn from_ranked(repos: impl IntoIterator<Item = RepositorySummary>) -> Self {
        Self(repos.into_iter().take(MAX_REPOSITORIES).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RepositorySummary> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RepositoryList {
    type Item = &'a RepositorySummary;
    type IntoIter = std::slice::Iter<'a, RepositorySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Turns "" and whitespace-only strings into None and trims the rest.
//
// GitHub sends `"blog": ""` for users without a website, and we never want
// an empty string to reach the renderer as if it were a real value.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
