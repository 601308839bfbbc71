// src/readme/render.rs
// =============================================================================
// Turns a Profile and its featured repositories into README Markdown.
//
// This is a pure function: no network, no files, no clock. The same input
// always gives the same bytes back, which makes it easy to test.
//
// Sections, always in this order:
//   1. Header        - avatar + "Hi there! I'm <name>"
//   2. About Me      - bio (or a stock sentence) and a few fun lines
//   3. Tech Stack    - one badge per distinct repository language
//   4. GitHub Stats  - github-readme-stats images built from the login
//   5. Featured      - one ### sub-section per repository
//   6. Profile Stats - followers, following, repos, total stars
//   7. Connect       - GitHub link, plus website / Twitter when known
//
// Rust concepts:
// - Iterators: filter_map, map, fold, collect
// - HashSet: remembering which languages we've already seen
// - join: gluing sections together with blank lines in between
// =============================================================================

use std::collections::HashSet;

use super::badges::{badge_text, language_badge};
use crate::error::{GenerateError, Result};
use crate::github::{Profile, RepositoryList, RepositorySummary};

/// Used in About Me when the profile has no bio
pub const FALLBACK_BIO: &str =
    "I'm a passionate developer who loves building things and sharing them on GitHub.";

/// Shown in Tech Stack when no repository reports a language
pub const NO_LANGUAGES: &str = "Various technologies";

pub const FEATURED_HEADING: &str = "## 🚀 Featured Projects";

const STATS_BASE: &str = "https://github-readme-stats.vercel.app/api";

// Renders the README.
//
// Returns RenderError only for a profile with a blank login, which the
// GitHub API never produces.
pub fn render(profile: &Profile, repos: &RepositoryList) -> Result<String> {
    if profile.login.trim().is_empty() {
        return Err(GenerateError::RenderError(
            "profile has an empty login".to_string(),
        ));
    }

    let languages = distinct_languages(repos);

    let sections = [
        header(profile),
        about(profile),
        tech_stack(&languages),
        stats_widgets(&profile.login),
        featured_projects(repos),
        profile_stats(profile, total_stars(repos)),
        connect(profile),
        footer(),
    ];

    Ok(sections.join("\n"))
}

// Languages in the order they first appear, skipping repos without one.
// No case folding: "Rust" and "rust" are two languages.
pub fn distinct_languages(repos: &RepositoryList) -> Vec<&str> {
    let mut seen = HashSet::new();
    repos
        .iter()
        .filter_map(|repo| repo.primary_language.as_deref())
        .filter(|language| seen.insert(*language))
        .collect()
}

// Saturates instead of overflowing on absurd upstream counts
pub fn total_stars(repos: &RepositoryList) -> u64 {
    repos
        .iter()
        .fold(0u64, |sum, repo| sum.saturating_add(repo.star_count))
}

fn header(profile: &Profile) -> String {
    let greeting = format!("# Hi there! 👋 I'm {}\n", profile.display_name());
    if profile.avatar_url.is_empty() {
        greeting
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\" width=\"120\" align=\"right\" />\n\n{}",
            profile.avatar_url, profile.login, greeting
        )
    }
}

fn about(profile: &Profile) -> String {
    let mut lines = vec![
        "## 👨‍💻 About Me".to_string(),
        String::new(),
        profile.bio.as_deref().unwrap_or(FALLBACK_BIO).to_string(),
        String::new(),
    ];

    if let Some(location) = &profile.location {
        lines.push(format!("📍 Based in {}  ", location));
    }
    lines.push("🔭 I'm currently working on exciting projects  ".to_string());
    lines.push("🌱 I'm always learning something new  ".to_string());
    lines.push("💬 Ask me about anything tech-related  ".to_string());
    lines.push(format!("📫 How to reach me: [GitHub]({})  ", profile.github_url()));
    lines.push(format!(
        "⚡ Fun fact: I have {} public repositories!",
        profile.public_repo_count
    ));

    lines.join("\n") + "\n"
}

fn tech_stack(languages: &[&str]) -> String {
    let body = if languages.is_empty() {
        NO_LANGUAGES.to_string()
    } else {
        languages
            .iter()
            .map(|language| language_badge(language))
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!("## 🛠️ Tech Stack\n\n{}\n", body)
}

fn stats_widgets(login: &str) -> String {
    format!(
        "## 📊 GitHub Stats\n\n\
         ![GitHub Stats]({base}?username={login}&show_icons=true&theme=radical)\n\
         ![Top Languages]({base}/top-langs/?username={login}&layout=compact&theme=radical)\n",
        base = STATS_BASE,
        login = login
    )
}

// The heading is always emitted, even with no repositories, so the
// document keeps the same outline for every user.
fn featured_projects(repos: &RepositoryList) -> String {
    let mut out = format!("{}\n", FEATURED_HEADING);
    for repo in repos {
        out.push('\n');
        out.push_str(&project(repo));
    }
    out
}

fn project(repo: &RepositorySummary) -> String {
    let mut badges = vec![
        count_badge("Stars", "stars", repo.star_count, "yellow"),
        count_badge("Forks", "forks", repo.fork_count, "blue"),
    ];
    if let Some(language) = &repo.primary_language {
        badges.push(language_badge(language));
    }

    format!(
        "### [{}]({})\n\n{}\n\n{}\n",
        repo.name,
        repo.url,
        repo.description,
        badges.join(" ")
    )
}

fn count_badge(alt: &str, label: &str, count: u64, color: &str) -> String {
    format!(
        "![{}](https://img.shields.io/badge/{}-{}-{}?style=flat-square)",
        alt,
        badge_text(label),
        count,
        color
    )
}

fn profile_stats(profile: &Profile, total_stars: u64) -> String {
    format!(
        "## 📈 Profile Stats\n\n\
         - 👥 **{}** followers\n\
         - 👤 **{}** following\n\
         - 📚 **{}** public repositories\n\
         - ⭐ **{}** total stars earned\n",
        profile.follower_count, profile.following_count, profile.public_repo_count, total_stars
    )
}

fn connect(profile: &Profile) -> String {
    let mut links = vec![format!(
        "[![GitHub](https://img.shields.io/badge/-GitHub-181717?style=flat-square&logo=github)]({})",
        profile.github_url()
    )];

    if let Some(website) = &profile.website_url {
        links.push(format!(
            "[![Website](https://img.shields.io/badge/-Website-blue?style=flat-square&logo=googlechrome&logoColor=white)]({})",
            website
        ));
    }
    if let Some(handle) = &profile.social_handle {
        links.push(format!(
            "[![Twitter](https://img.shields.io/badge/-Twitter-1DA1F2?style=flat-square&logo=twitter&logoColor=white)](https://twitter.com/{})",
            handle
        ));
    }

    format!("## 🤝 Let's Connect!\n\n{}\n", links.join("\n"))
}

fn footer() -> String {
    "---\n\n💙 Thanks for visiting my profile! Have a great day!\n".to_string()
}
