// src/readme/badges.rs
// =============================================================================
// Maps programming languages to shields.io badges.
//
// The mapping is a plain table: one row per language we know a brand
// color and logo for. Lookups are exact and case-sensitive ("Rust", not
// "rust"), matching the language names GitHub reports.
//
// Languages not in the table still get a badge: a generic blue one that
// uses the language name as both the label and the logo name.
//
// Badge URL format (shields.io static badge):
//   https://img.shields.io/badge/<TEXT>-<COLOR>?style=flat-square&logo=<LOGO>
// Inside <TEXT>, "-" and "_" must be doubled, everything else URL-encoded.
// =============================================================================

use url::form_urlencoded::byte_serialize;

/// One row of the language table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageBadge {
    pub language: &'static str,
    pub color: &'static str,
    pub logo: &'static str,
    pub logo_color: &'static str,
}

const fn row(
    language: &'static str,
    color: &'static str,
    logo: &'static str,
    logo_color: &'static str,
) -> LanguageBadge {
    LanguageBadge {
        language,
        color,
        logo,
        logo_color,
    }
}

pub const LANGUAGE_BADGES: &[LanguageBadge] = &[
    row("JavaScript", "F7DF1E", "javascript", "black"),
    row("TypeScript", "3178C6", "typescript", "white"),
    row("Python", "3776AB", "python", "white"),
    row("Java", "ED8B00", "openjdk", "white"),
    row("Go", "00ADD8", "go", "white"),
    row("Rust", "000000", "rust", "white"),
    row("C", "A8B9CC", "c", "black"),
    row("C++", "00599C", "cplusplus", "white"),
    row("C#", "512BD4", "dotnet", "white"),
    row("Ruby", "CC342D", "ruby", "white"),
    row("PHP", "777BB4", "php", "white"),
    row("Swift", "FA7343", "swift", "white"),
    row("Kotlin", "7F52FF", "kotlin", "white"),
    row("Dart", "0175C2", "dart", "white"),
    row("Scala", "DC322F", "scala", "white"),
    row("Haskell", "5D4F85", "haskell", "white"),
    row("Elixir", "4B275F", "elixir", "white"),
    row("Lua", "2C2D72", "lua", "white"),
    row("R", "276DC3", "r", "white"),
    row("HTML", "E34F26", "html5", "white"),
    row("CSS", "1572B6", "css3", "white"),
    row("SCSS", "CC6699", "sass", "white"),
    row("Vue", "4FC08D", "vuedotjs", "white"),
    row("Svelte", "FF3E00", "svelte", "white"),
    row("Shell", "4EAA25", "gnubash", "white"),
    row("PowerShell", "5391FE", "powershell", "white"),
    row("Dockerfile", "2496ED", "docker", "white"),
    row("Nix", "5277C3", "nixos", "white"),
    row("Jupyter Notebook", "F37626", "jupyter", "white"),
    row("Zig", "F7A41D", "zig", "black"),
];

impl LanguageBadge {
    /// Markdown image for this language
    pub fn markdown(&self) -> String {
        format!(
            "![{}](https://img.shields.io/badge/{}-{}?style=flat-square&logo={}&logoColor={})",
            self.language,
            badge_text(self.language),
            self.color,
            self.logo,
            self.logo_color
        )
    }
}

/// Exact, case-sensitive table lookup
pub fn lookup(language: &str) -> Option<&'static LanguageBadge> {
    LANGUAGE_BADGES.iter().find(|badge| badge.language == language)
}

/// Badge for a language that isn't in the table
pub fn generic_badge(language: &str) -> String {
    format!(
        "![{}](https://img.shields.io/badge/-{}-blue?style=flat-square&logo={})",
        language,
        badge_text(language),
        encode(&language.to_lowercase())
    )
}

/// Table badge if we have one, generic badge otherwise
pub fn language_badge(language: &str) -> String {
    match lookup(language) {
        Some(badge) => badge.markdown(),
        None => generic_badge(language),
    }
}

// Escapes text for the path part of a shields.io badge URL
pub(crate) fn badge_text(text: &str) -> String {
    encode(&text.replace('-', "--").replace('_', "__"))
}

// Percent-encodes everything except letters, digits and "*-._"
// form_urlencoded writes spaces as '+', which shields would show literally.
fn encode(text: &str) -> String {
    byte_serialize(text.as_bytes()).collect::<String>().replace('+', "%20")
}
