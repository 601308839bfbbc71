// src/pipeline.rs
// =============================================================================
// The whole "username in, README out" flow.
//
// Steps, one after the other (never in parallel):
// 1. Look up the profile       -> any failure stops here (ProfileNotFound)
// 2. Pick the repositories     -> only fails if both tiers fail
// 3. Render the Markdown       -> pure, no I/O
//
// Either a complete RenderedDocument comes back or a single GenerateError.
// Nothing is ever half-rendered.
// =============================================================================

use serde::Serialize;
use tracing::info;

use crate::error::{GenerateError, Result};
use crate::github::{self, GitHubApi, Profile, RepositoryList};
use crate::readme::{self, RenderedDocument};

/// What the `preview` command shows: the data a README would be built from
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePreview {
    pub profile: Profile,
    pub repositories: RepositoryList,
}

// Runs steps 1-3 for `username`.
//
// The username is trimmed before use; the download file name is derived
// from the trimmed input, not from the login GitHub returns.
pub async fn generate<A>(api: &A, username: &str) -> Result<RenderedDocument>
where
    A: GitHubApi + ?Sized,
{
    let ProfilePreview {
        profile,
        repositories,
    } = preview(api, username).await?;

    let markdown = readme::render(&profile, &repositories)?;
    info!(
        login = %profile.login,
        repositories = repositories.len(),
        bytes = markdown.len(),
        "README rendered"
    );

    Ok(RenderedDocument::new(username.trim(), markdown))
}

// Runs steps 1 and 2 only.
pub async fn preview<A>(api: &A, username: &str) -> Result<ProfilePreview>
where
    A: GitHubApi + ?Sized,
{
    let username = username.trim();
    if username.is_empty() {
        return Err(GenerateError::ProfileNotFound {
            username: String::new(),
            reason: "no username given".to_string(),
        });
    }

    let profile = github::fetch_profile(api, username).await?;
    let repositories = github::fetch_repositories(api, username).await?;

    Ok(ProfilePreview {
        profile,
        repositories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::stub::{repo, sample_profile, serve_canned, StubApi};
    use crate::github::{GitHubClient, GitHubConfig};

    #[tokio::test]
    async fn test_generate_happy_path() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .with_pinned(vec![repo("demo", 10, Some("Rust"))])
            .failing_starred();

        let doc = generate(&api, "octocat").await.unwrap();

        assert_eq!(doc.filename(), "octocat-README.md");
        assert!(doc.markdown().contains("### [demo](https://github.com/octocat/demo)"));
        assert_eq!(api.user_calls(), 1);
        assert_eq!(api.pinned_calls(), 1);
        assert_eq!(api.starred_calls(), 0);
    }

    #[tokio::test]
    async fn test_filename_from_trimmed_username() {
        // GitHub answers with a differently-cased login
        let api = StubApi::new(Some(sample_profile("octocat")));

        let doc = generate(&api, " Octocat ").await.unwrap();
        assert_eq!(doc.filename(), "Octocat-README.md");
    }

    #[tokio::test]
    async fn test_profile_failure_stops_everything() {
        let api = StubApi::new(None);

        let err = generate(&api, "ghost").await.unwrap_err();

        assert!(matches!(err, GenerateError::ProfileNotFound { .. }));
        assert_eq!(api.pinned_calls(), 0);
        assert_eq!(api.starred_calls(), 0);
    }

    #[tokio::test]
    async fn test_repository_failure_means_no_document() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .failing_pinned()
            .failing_starred();

        let err = generate(&api, "octocat").await.unwrap_err();
        assert!(matches!(err, GenerateError::RepositoryFetchFailed { .. }));
        assert_eq!(api.user_calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_username_makes_no_calls() {
        let api = StubApi::new(Some(sample_profile("octocat")));

        let err = generate(&api, "   ").await.unwrap_err();
        assert!(matches!(err, GenerateError::ProfileNotFound { .. }));
        assert_eq!(api.user_calls(), 0);
    }

    #[tokio::test]
    async fn test_preview_serializes() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .with_starred(vec![repo("demo", 1, None)]);

        let preview = preview(&api, "octocat").await.unwrap();
        let json = serde_json::to_value(&preview).unwrap();

        assert_eq!(json["profile"]["login"], "octocat");
        assert_eq!(json["repositories"][0]["name"], "demo");
        assert!(json["repositories"][0].get("primary_language").is_none());
    }

    #[tokio::test]
    async fn test_generate_over_http_falls_back_after_unauthorized_graphql() {
        let user = r#"{"login":"octocat","name":"The Octocat","followers":3,"following":1,"public_repos":2}"#;
        let unauthorized = r#"{"message":"Requires authentication"}"#;
        let listing = r#"[
            {"name":"small","html_url":"https://github.com/octocat/small","stargazers_count":1,"forks_count":0,"language":null,"description":null},
            {"name":"big","html_url":"https://github.com/octocat/big","stargazers_count":50,"forks_count":4,"language":"Go","description":"Popular"}
        ]"#;
        let (base_url, server) =
            serve_canned(vec![(200, user), (401, unauthorized), (200, listing)]).await;
        let client = GitHubClient::new(&GitHubConfig {
            api_url: base_url.clone(),
            graphql_url: format!("{}/graphql", base_url),
            ..GitHubConfig::default()
        })
        .unwrap();

        let doc = generate(&client, " octocat ").await.unwrap();

        assert_eq!(doc.filename(), "octocat-README.md");
        let big = doc.markdown().find("### [big]").unwrap();
        let small = doc.markdown().find("### [small]").unwrap();
        assert!(big < small);

        let requests = server.await.unwrap();
        assert_eq!(requests.len(), 3);
        assert!(requests[1].starts_with("POST /graphql"));
        assert!(requests[2].starts_with("GET /users/octocat/repos?"));
    }
}
