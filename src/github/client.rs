// src/github/client.rs
// =============================================================================
// Talks to GitHub over HTTP.
//
// - GitHubApi: the three calls the pipeline needs, as a trait so tests can
//   swap in a stub instead of hitting the network
// - GitHubConfig: where the APIs live and which User-Agent to send
// - GitHubClient: the real implementation, built on one shared reqwest Client
//
// No timeouts or retries are configured here; a failed call is reported
// once and the caller decides what it means.
//
// Rust concepts:
// - async-trait: async fn in traits (with Send futures for tokio)
// - Generics with DeserializeOwned: one helper for every JSON response
// - url::Url: builds paths and query strings with proper escaping
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::FetchError;
use super::graphql::{PinnedRequest, PinnedResponse};
use super::rest::{summaries_from_listing, RestUser};
use super::types::{Profile, RepositorySummary};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// How many repositories the fallback listing asks for in one page
pub const LISTING_PAGE_SIZE: u32 = 100;

// The GitHub operations the README pipeline depends on
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// REST user lookup
    async fn fetch_user(&self, username: &str) -> Result<Profile, FetchError>;

    /// GraphQL pinned repositories, in the order the user pinned them
    async fn fetch_pinned(&self, username: &str) -> Result<Vec<RepositorySummary>, FetchError>;

    /// REST repository listing, in the order GitHub returned it
    async fn fetch_starred(&self, username: &str) -> Result<Vec<RepositorySummary>, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub api_url: String,
    pub graphql_url: String,
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            user_agent: format!("profile-readme/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: Url,
    graphql_url: Url,
}

impl GitHubClient {
    // Builds a client from the config.
    //
    // Fails if either URL can't be parsed or can't have path segments
    // appended (e.g. "mailto:..."), or if the User-Agent isn't a valid header.
    pub fn new(config: &GitHubConfig) -> Result<Self, FetchError> {
        let api_url = parse_base_url(&config.api_url)?;
        let graphql_url = parse_base_url(&config.graphql_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| FetchError::InvalidUserAgent(config.user_agent.clone()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_url,
            graphql_url,
        })
    }

    // Builds {api_url}/users/{username}[/{tail}]
    //
    // The username is pushed as a path segment, so characters like '/' or
    // '?' are escaped instead of changing the request.
    fn user_url(&self, username: &str, tail: Option<&str>) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        url
    }

    fn listing_url(&self, username: &str) -> Url {
        let mut url = self.user_url(username, Some("repos"));
        url.query_pairs_mut()
            .append_pair("per_page", &LISTING_PAGE_SIZE.to_string())
            .append_pair("sort", "stars")
            .append_pair("direction", "desc");
        url
    }

    // Sends a GET and parses the JSON body.
    //
    // Any non-2xx status becomes FetchError::Status so callers can tell a
    // 404 apart from a broken connection.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<Profile, FetchError> {
        let user: RestUser = self.get_json(self.user_url(username, None)).await?;
        Ok(Profile::from(user))
    }

    async fn fetch_pinned(&self, username: &str) -> Result<Vec<RepositorySummary>, FetchError> {
        debug!(url = %self.graphql_url, login = username, "POST pinned items query");
        let response = self
            .http
            .post(self.graphql_url.clone())
            .json(&PinnedRequest::new(username))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.graphql_url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        let parsed: PinnedResponse = serde_json::from_str(&body)?;
        parsed.into_repositories()
    }

    async fn fetch_starred(&self, username: &str) -> Result<Vec<RepositorySummary>, FetchError> {
        let items: Vec<serde_json::Value> = self.get_json(self.listing_url(username)).await?;
        Ok(summaries_from_listing(items))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|_| FetchError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
