// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI is described by structs and enums, and
// clap generates the parsing, --help and --version for us.
//
// Configuration comes from flags, and every GitHub setting can also be
// given as an environment variable (clap's `env` feature).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::github::{GitHubConfig, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL};

#[derive(Parser, Debug)]
#[command(
    name = "profile-readme",
    version,
    about = "Generate a GitHub profile README from a username",
    long_about = "profile-readme looks up a GitHub user, picks their pinned (or most starred) \
                  repositories and writes a ready-to-use profile README.md."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub github: GitHubArgs,

    /// More log output (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a README and save it as <USERNAME>-README.md
    ///
    /// Example: profile-readme generate octocat
    Generate {
        /// GitHub username (surrounding whitespace is ignored)
        #[arg(value_parser = parse_username)]
        username: String,

        /// Where to write the README instead of ./<USERNAME>-README.md
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the README to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Show the profile and repositories a README would be built from
    ///
    /// Example: profile-readme preview octocat --json
    Preview {
        /// GitHub username (surrounding whitespace is ignored)
        #[arg(value_parser = parse_username)]
        username: String,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the languages that have a dedicated badge
    Badges,
}

// Where the GitHub APIs live. Mostly useful for GitHub Enterprise or a
// local proxy; the defaults point at github.com.
#[derive(Args, Debug, Clone)]
pub struct GitHubArgs {
    /// REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// GraphQL endpoint used for pinned repositories
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL, global = true)]
    pub graphql_url: String,

    /// User-Agent header sent with every request
    #[arg(long, env = "PROFILE_README_USER_AGENT", global = true)]
    pub user_agent: Option<String>,
}

impl GitHubArgs {
    pub fn to_config(&self) -> GitHubConfig {
        let defaults = GitHubConfig::default();
        GitHubConfig {
            api_url: self.api_url.clone(),
            graphql_url: self.graphql_url.clone(),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

// Trims the username and rejects blank input before any request is made
fn parse_username(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Please enter a GitHub username".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `global = true` do?
//    - The flag can be written before OR after the subcommand
//    - `profile-readme -v generate octocat` and
//      `profile-readme generate octocat -v` both work
//
// 2. What is `value_parser = parse_username`?
//    - clap calls our function on the raw text before storing it
//    - Returning Err makes clap print the message and exit
//
// 3. Why ArgAction::Count for --verbose?
//    - Each -v adds one, so -vv gives 2
// -----------------------------------------------------------------------------
