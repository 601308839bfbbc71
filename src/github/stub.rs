// src/github/stub.rs
// =============================================================================
// An in-memory GitHubApi for tests.
//
// Each call is counted so tests can check which tiers ran, and each of the
// three endpoints can be told to fail.
//
// serve_canned() is the other half: a tiny HTTP server on 127.0.0.1 that
// answers with fixed responses, for tests that drive the real GitHubClient.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::client::GitHubApi;
use super::error::FetchError;
use super::types::{Profile, RepositorySummary, NO_DESCRIPTION};

#[derive(Debug, Default)]
pub struct StubApi {
    profile: Option<Profile>,
    // None means "this endpoint fails"
    pinned: Option<Vec<RepositorySummary>>,
    starred: Option<Vec<RepositorySummary>>,
    user_calls: AtomicUsize,
    pinned_calls: AtomicUsize,
    starred_calls: AtomicUsize,
}

impl StubApi {
    /// A stub whose user lookup returns `profile` (or 404 when None) and
    /// whose repository endpoints both succeed with no repositories.
    pub fn new(profile: Option<Profile>) -> Self {
        Self {
            profile,
            pinned: Some(Vec::new()),
            starred: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn with_pinned(mut self, repos: Vec<RepositorySummary>) -> Self {
        self.pinned = Some(repos);
        self
    }

    pub fn failing_pinned(mut self) -> Self {
        self.pinned = None;
        self
    }

    pub fn with_starred(mut self, repos: Vec<RepositorySummary>) -> Self {
        self.starred = Some(repos);
        self
    }

    pub fn failing_starred(mut self) -> Self {
        self.starred = None;
        self
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    pub fn pinned_calls(&self) -> usize {
        self.pinned_calls.load(Ordering::SeqCst)
    }

    pub fn starred_calls(&self) -> usize {
        self.starred_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubApi for StubApi {
    async fn fetch_user(&self, username: &str) -> Result<Profile, FetchError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        self.profile.clone().ok_or_else(|| FetchError::Status {
            url: format!("https://api.github.com/users/{}", username),
            status: StatusCode::NOT_FOUND,
        })
    }

    async fn fetch_pinned(&self, _username: &str) -> Result<Vec<RepositorySummary>, FetchError> {
        self.pinned_calls.fetch_add(1, Ordering::SeqCst);
        self.pinned
            .clone()
            .ok_or_else(|| FetchError::GraphQl("stubbed pinned failure".to_string()))
    }

    async fn fetch_starred(&self, username: &str) -> Result<Vec<RepositorySummary>, FetchError> {
        self.starred_calls.fetch_add(1, Ordering::SeqCst);
        self.starred.clone().ok_or_else(|| FetchError::Status {
            url: format!("https://api.github.com/users/{}/repos", username),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

pub fn sample_profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        name: None,
        bio: None,
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        follower_count: 5,
        following_count: 2,
        public_repo_count: 3,
        website_url: None,
        location: None,
        social_handle: None,
    }
}

pub fn repo(name: &str, stars: u64, language: Option<&str>) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: NO_DESCRIPTION.to_string(),
        url: format!("https://github.com/octocat/{}", name),
        star_count: stars,
        fork_count: 0,
        primary_language: language.map(str::to_string),
    }
}

// Serves one canned (status, JSON body) response per connection, in order.
//
// Returns the base URL ("http://127.0.0.1:<port>") and a handle that
// resolves to the raw text of every request received, headers included.
// Responses carry "Connection: close" so each request gets its own
// connection and the order stays predictable.
pub async fn serve_canned(
    responses: Vec<(u16, &'static str)>,
) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut stream).await);

            let reason = StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or("Unknown");
            let reply = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        }
        requests
    });

    (base_url, handle)
}

// Reads the request head plus a Content-Length body
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let body_len = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + body_len {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
