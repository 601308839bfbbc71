// src/github/rest.rs
// =============================================================================
// JSON shapes returned by the GitHub REST API, and how we turn them into
// our own Profile / RepositorySummary types.
//
// Endpoints:
//   GET /users/{username}                  -> RestUser
//   GET /users/{username}/repos?per_page=.. -> [RestRepo]
//
// Rust concepts:
// - #[serde(default)]: use 0 / None when a field is missing
// - From trait: the idiomatic way to convert one type into another
// - Option combinators: ? inside a function returning Option
// =============================================================================

use serde::Deserialize;
use url::Url;

use super::types::{non_blank, Profile, RepositorySummary, NO_DESCRIPTION};

// The subset of GET /users/{username} we care about
#[derive(Debug, Deserialize)]
pub struct RestUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
}

impl From<RestUser> for Profile {
    fn from(user: RestUser) -> Self {
        Profile {
            login: user.login,
            name: non_blank(user.name),
            bio: non_blank(user.bio),
            avatar_url: user.avatar_url.unwrap_or_default(),
            follower_count: user.followers,
            following_count: user.following,
            public_repo_count: user.public_repos,
            website_url: normalize_website(user.blog),
            location: non_blank(user.location),
            social_handle: non_blank(user.twitter_username)
                .map(|handle| handle.trim_start_matches('@').to_string())
                .filter(|handle| !handle.is_empty()),
        }
    }
}

// One item of GET /users/{username}/repos.
//
// Every field is optional here so that one odd item can't fail the whole
// listing; into_summary() decides whether the item is usable.
#[derive(Debug, Deserialize)]
pub struct RestRepo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub language: Option<String>,
}

impl RestRepo {
    /// Returns None unless name, url, star count and fork count are all present
    pub fn into_summary(self) -> Option<RepositorySummary> {
        Some(RepositorySummary {
            name: non_blank(self.name)?,
            url: non_blank(self.html_url)?,
            star_count: self.stargazers_count?,
            fork_count: self.forks_count?,
            description: non_blank(self.description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            primary_language: non_blank(self.language),
        })
    }
}

// Converts a raw listing body into summaries, in the order GitHub sent them.
//
// Items that are not objects, have negative counts, or miss a required
// field are dropped rather than failing the whole listing.
pub fn summaries_from_listing(items: Vec<serde_json::Value>) -> Vec<RepositorySummary> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RestRepo>(item).ok())
        .filter_map(RestRepo::into_summary)
        .collect()
}

// Makes the profile's "blog" field usable as a link.
//
// Users often type "example.com" or "//example.com" without a scheme; we
// assume https. Links with any other scheme (mailto:, javascript:, ftp://)
// are dropped because the README only links to web pages.
fn normalize_website(blog: Option<String>) -> Option<String> {
    let blog = non_blank(blog)?;
    let bare = blog.trim_start_matches('/');
    if bare.is_empty() {
        return None;
    }

    match Url::parse(bare) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(bare.to_string()),
        Ok(url) if !is_host_and_port(&url) => None,
        _ => Some(format!("https://{}", bare)),
    }
}

// "localhost:8080" parses as scheme "localhost" with path "8080"
fn is_host_and_port(url: &Url) -> bool {
    url.cannot_be_a_base()
        && url
            .path()
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_digit())
}
