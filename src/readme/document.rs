// src/readme/document.rs
// =============================================================================
// The finished README: the Markdown text plus the file name to save it as.
// =============================================================================

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    markdown: String,
    filename: String,
}

impl RenderedDocument {
    // `username` is what the user typed, not the profile's login, so the
    // file name follows the submitted spelling ("OctoCat" stays "OctoCat").
    pub fn new(username: &str, markdown: String) -> Self {
        Self {
            markdown,
            filename: download_filename(username),
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// "<username>-README.md", with surrounding whitespace trimmed first
pub fn download_filename(username: &str) -> String {
    format!("{}-README.md", username.trim())
}
