// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = GitHub lookup failed, 2 = error)
//
// Saving the file and printing progress live here; everything that makes
// decisions lives in pipeline.rs, github/ and readme/.
// =============================================================================

mod cli;
mod error;
mod github;
mod logging;
mod pipeline;
mod readme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands, GitHubArgs};
use error::GenerateError;
use github::{GitHubClient, RepositoryList};
use pipeline::ProfilePreview;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success
//   Ok(1) = the pipeline reported a classified failure
//   Err   = anything else (bad config, file write, ...)
async fn run() -> Result<i32> {
    let Cli {
        command,
        github: github_args,
        verbose,
        log_json,
    } = Cli::parse();

    logging::init_tracing(verbose, log_json);

    match command {
        Commands::Generate {
            username,
            output,
            stdout,
        } => handle_generate(&github_args, &username, output, stdout).await,
        Commands::Preview { username, json } => handle_preview(&github_args, &username, json).await,
        Commands::Badges => {
            print_badges();
            Ok(0)
        }
    }
}

fn build_client(args: &GitHubArgs) -> Result<GitHubClient> {
    GitHubClient::new(&args.to_config()).context("Failed to set up GitHub client")
}

// Logs a pipeline failure and tells the user what went wrong.
//
// Every GenerateError is classified, so this always yields exit code 1.
fn report_failure(e: &GenerateError, what: &str) -> i32 {
    tracing::error!(error = %e, "{}", what);
    eprintln!("❌ {}", e.user_notice());
    eprintln!("   {}", e);
    1
}

// Handles the 'generate' subcommand
//
// Progress goes to stdout unless the README itself is going there.
async fn handle_generate(
    args: &GitHubArgs,
    username: &str,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<i32> {
    let client = build_client(args)?;

    if !stdout {
        println!("🔍 Generating README for: {}", username);
    }

    let document = match pipeline::generate(&client, username).await {
        Ok(document) => document,
        Err(e) => return Ok(report_failure(&e, "generation failed")),
    };

    if stdout {
        print!("{}", document.markdown());
        return Ok(0);
    }

    let path = output.unwrap_or_else(|| PathBuf::from(document.filename()));
    tokio::fs::write(&path, document.markdown())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✅ README saved to {}", path.display());
    Ok(0)
}

// Handles the 'preview' subcommand
async fn handle_preview(args: &GitHubArgs, username: &str, json: bool) -> Result<i32> {
    let client = build_client(args)?;

    let preview = match pipeline::preview(&client, username).await {
        Ok(preview) => preview,
        Err(e) => return Ok(report_failure(&e, "preview failed")),
    };

    if json {
        let json_output =
            serde_json::to_string_pretty(&preview).context("Failed to serialize preview")?;
        println!("{}", json_output);
    } else {
        print_preview(&preview);
    }
    Ok(0)
}

// Prints the profile card followed by a table of repositories
fn print_preview(preview: &ProfilePreview) {
    let profile = &preview.profile;

    println!("{} (@{})", profile.display_name(), profile.login);
    if let Some(bio) = &profile.bio {
        println!("{}", bio);
    }
    println!(
        "👥 {} followers • 👤 {} following • 📚 {} repositories",
        profile.follower_count, profile.following_count, profile.public_repo_count
    );
    if let Some(location) = &profile.location {
        println!("📍 {}", location);
    }
    if let Some(website) = &profile.website_url {
        println!("🔗 {}", website);
    }
    println!();

    print_repositories(&preview.repositories);
}

fn print_repositories(repos: &RepositoryList) {
    if repos.is_empty() {
        println!("⚠️  No public repositories found");
        return;
    }

    println!("{:<30} {:>7} {:>7} {:<15}", "REPOSITORY", "STARS", "FORKS", "LANGUAGE");
    println!("{}", "=".repeat(62));

    for line in repository_lines(repos) {
        println!("{}", line);
    }
}

// Two lines per repository: the columns, then the description indented
fn repository_lines(repos: &RepositoryList) -> Vec<String> {
    let mut lines = Vec::new();
    for repo in repos {
        let language = repo.primary_language.as_deref().unwrap_or("-");
        lines.push(format!(
            "{:<30} {:>7} {:>7} {:<15}",
            truncate(&repo.name, NAME_WIDTH),
            repo.star_count,
            repo.fork_count,
            language
        ));
        lines.push(format!("  {}", truncate(&repo.description, NAME_WIDTH)));
    }
    lines
}

// Longest text shown before "..." so the columns stay aligned
const NAME_WIDTH: usize = 27;

// Cuts on characters, not bytes, so multi-byte names don't panic
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

// Handles the 'badges' subcommand
fn print_badges() {
    for badge in readme::LANGUAGE_BADGES {
        println!("{:<20} {}", badge.language, badge.markdown());
    }
}
