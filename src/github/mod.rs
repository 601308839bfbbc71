// src/github/mod.rs
// =============================================================================
// This module gathers everything we know about a GitHub user.
//
// Currently implements:
// - Profile lookup via the REST API (profile.rs)
// - Featured repositories: pinned via GraphQL, else top starred via REST
//   (repos.rs)
// - The HTTP client and the GitHubApi trait it implements (client.rs)
// - JSON shapes for both APIs (rest.rs, graphql.rs)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod client;
mod error;
mod graphql;
mod profile;
mod repos;
mod rest;
mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{GitHubApi, GitHubClient, GitHubConfig, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL};
pub use profile::fetch_profile;
pub use repos::fetch_repositories;
pub use types::{Profile, RepositoryList, RepositorySummary};
