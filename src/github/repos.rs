// src/github/repos.rs
// =============================================================================
// Picks the repositories to feature in the README.
//
// Two tiers, tried in order:
// 1. Pinned: the repositories the user chose to showcase (GraphQL).
//    If this fails for ANY reason, we log it and treat it as "nothing
//    pinned". It never stops the run.
// 2. Top starred: only when tier 1 gave us nothing. We list up to 100
//    repositories (REST), rank them by stars and keep the first six.
//    If this fails there is nothing left to try, so the error is returned.
//
// An empty result is fine: some users have no public repositories.
//
// Rust concepts:
// - Result::unwrap_or_else: turn an error into a fallback value
// - sort_by: a stable sort, so equal elements keep their original order
// - ?Sized: lets us accept both &GitHubClient and &dyn GitHubApi
// =============================================================================

use tracing::{info, warn};

use super::client::GitHubApi;
use super::types::{RepositoryList, RepositorySummary};
use crate::error::{GenerateError, Result};

pub async fn fetch_repositories<A>(api: &A, username: &str) -> Result<RepositoryList>
where
    A: GitHubApi + ?Sized,
{
    let pinned = pinned_tier(api, username).await;
    if !pinned.is_empty() {
        info!(count = pinned.len(), "using pinned repositories");
        return Ok(RepositoryList::from_ranked(pinned));
    }

    info!("no pinned repositories, falling back to top starred");
    let mut starred = api
        .fetch_starred(username)
        .await
        .map_err(|e| GenerateError::RepositoryFetchFailed {
            username: username.to_string(),
            reason: e.to_string(),
        })?;

    rank_by_stars(&mut starred);
    Ok(RepositoryList::from_ranked(starred))
}

// Tier 1. Errors are absorbed here and never reach the caller.
async fn pinned_tier<A>(api: &A, username: &str) -> Vec<RepositorySummary>
where
    A: GitHubApi + ?Sized,
{
    api.fetch_pinned(username).await.unwrap_or_else(|e| {
        warn!(username, error = %e, "pinned repositories unavailable");
        Vec::new()
    })
}

// Most stars first. Ties keep the order GitHub returned them in.
fn rank_by_stars(repos: &mut [RepositorySummary]) {
    repos.sort_by(|a, b| b.star_count.cmp(&a.star_count));
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why swallow the pinned-tier error?
//    - Pinned repositories are nicer, but not required
//    - The GraphQL API can refuse us (no token, rate limit) even when the
//      user exists, and the REST listing still works in that case
//
// 2. Why is sort_by "stable"?
//    - Stable means two items that compare equal stay in the same order
//    - Here: two repos with 10 stars stay in the order GitHub listed them
//    - sort_unstable_by would be slightly faster but could shuffle ties
//
// 3. What is `A: GitHubApi + ?Sized`?
//    - A generic type that implements our GitHubApi trait
//    - ?Sized also allows trait objects like `dyn GitHubApi`
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::stub::{repo, sample_profile, StubApi};
    use crate::github::types::MAX_REPOSITORIES;

    fn names(list: &RepositoryList) -> Vec<&str> {
        list.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_pinned_skips_fallback() {
        // the fallback tier would fail if it were called
        let api = StubApi::new(Some(sample_profile("octocat")))
            .with_pinned(vec![repo("pinned-b", 1, None), repo("pinned-a", 50, None)])
            .failing_starred();

        let list = fetch_repositories(&api, "octocat").await.unwrap();

        // the user's pinned order, not star order
        assert_eq!(names(&list), vec!["pinned-b", "pinned-a"]);
        assert_eq!(api.pinned_calls(), 1);
        assert_eq!(api.starred_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_pinned_uses_fallback_once() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .with_pinned(Vec::new())
            .with_starred(vec![repo("low", 1, None), repo("high", 9, Some("Rust"))]);

        let list = fetch_repositories(&api, "octocat").await.unwrap();

        assert_eq!(names(&list), vec!["high", "low"]);
        assert_eq!(api.starred_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_pinned_is_absorbed() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .failing_pinned()
            .with_starred(vec![repo("only", 3, None)]);

        let list = fetch_repositories(&api, "octocat").await.unwrap();

        assert_eq!(names(&list), vec!["only"]);
        assert_eq!(api.pinned_calls(), 1);
        assert_eq!(api.starred_calls(), 1);
    }

    #[tokio::test]
    async fn test_both_tiers_failing() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .failing_pinned()
            .failing_starred();

        let err = fetch_repositories(&api, "octocat").await.unwrap_err();
        assert!(matches!(err, GenerateError::RepositoryFetchFailed { .. }));
        assert_eq!(api.starred_calls(), 1);
    }

    #[tokio::test]
    async fn test_no_repositories_is_success() {
        let api = StubApi::new(Some(sample_profile("octocat")))
            .with_pinned(Vec::new())
            .with_starred(Vec::new());

        let list = fetch_repositories(&api, "octocat").await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_capped_and_ties_keep_upstream_order() {
        let starred: Vec<_> = (0..100)
            .map(|i| repo(&format!("r{:03}", i), if i % 10 == 0 { 5 } else { 1 }, None))
            .collect();
        let api = StubApi::new(Some(sample_profile("octocat")))
            .failing_pinned()
            .with_starred(starred);

        let list = fetch_repositories(&api, "octocat").await.unwrap();

        assert_eq!(list.len(), MAX_REPOSITORIES);
        assert_eq!(
            names(&list),
            vec!["r000", "r010", "r020", "r030", "r040", "r050"]
        );
    }

    #[tokio::test]
    async fn test_pinned_capped() {
        let pinned: Vec<_> = (0..9).map(|i| repo(&format!("p{}", i), 0, None)).collect();
        let api = StubApi::new(Some(sample_profile("octocat"))).with_pinned(pinned);

        let list = fetch_repositories(&api, "octocat").await.unwrap();
        assert_eq!(list.len(), MAX_REPOSITORIES);
        assert_eq!(list.iter().next().map(|r| r.name.as_str()), Some("p0"));
    }
}
