// src/github/graphql.rs
// =============================================================================
// The pinned-repositories query for the GitHub GraphQL API.
//
// GraphQL works differently from REST:
// - There is a single endpoint; we POST a query document plus variables
// - Errors usually come back with HTTP 200 and an "errors" array
// - The data we want is nested several levels deep:
//     data.user.pinnedItems.edges[].node
//
// Pinned items can also be gists. The `... on Repository` fragment makes
// those come back as empty nodes, which we drop.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::error::FetchError;
use super::types::{non_blank, RepositorySummary, MAX_REPOSITORIES, NO_DESCRIPTION};

pub const PINNED_QUERY: &str = r#"
query PinnedRepositories($login: String!, $first: Int!) {
  user(login: $login) {
    pinnedItems(first: $first, types: REPOSITORY) {
      edges {
        node {
          ... on Repository {
            name
            description
            url
            stargazerCount
            forkCount
            primaryLanguage {
              name
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct PinnedRequest<'a> {
    pub query: &'static str,
    pub variables: PinnedVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct PinnedVariables<'a> {
    pub login: &'a str,
    pub first: usize,
}

impl<'a> PinnedRequest<'a> {
    pub fn new(login: &'a str) -> Self {
        Self {
            query: PINNED_QUERY,
            variables: PinnedVariables {
                login,
                first: MAX_REPOSITORIES,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PinnedResponse {
    pub data: Option<PinnedData>,
    #[serde(default)]
    pub errors: Vec<GraphQlMessage>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PinnedData {
    pub user: Option<PinnedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedUser {
    pub pinned_items: PinnedItems,
}

#[derive(Debug, Deserialize)]
pub struct PinnedItems {
    #[serde(default)]
    pub edges: Vec<PinnedEdge>,
}

#[derive(Debug, Deserialize)]
pub struct PinnedEdge {
    pub node: Option<PinnedNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedNode {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub stargazer_count: Option<u64>,
    pub fork_count: Option<u64>,
    pub primary_language: Option<LanguageNode>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageNode {
    pub name: Option<String>,
}

impl PinnedNode {
    fn into_summary(self) -> Option<RepositorySummary> {
        Some(RepositorySummary {
            name: non_blank(self.name)?,
            url: non_blank(self.url)?,
            star_count: self.stargazer_count?,
            fork_count: self.fork_count?,
            description: non_blank(self.description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            primary_language: non_blank(self.primary_language.and_then(|lang| lang.name)),
        })
    }
}

impl PinnedResponse {
    // Unwraps the nested response into summaries, keeping the pinned order.
    //
    // Any entry in "errors" fails the whole response, even if some data
    // came back alongside it.
    pub fn into_repositories(self) -> Result<Vec<RepositorySummary>, FetchError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(FetchError::GraphQl(messages.join("; ")));
        }

        let data = self
            .data
            .ok_or_else(|| FetchError::GraphQl("response carried no data".to_string()))?;
        let user = data.user.ok_or(FetchError::MissingUser)?;

        Ok(user
            .pinned_items
            .edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .filter_map(PinnedNode::into_summary)
            .collect())
    }
}
