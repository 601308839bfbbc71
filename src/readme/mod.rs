// src/readme/mod.rs
// =============================================================================
// This module builds the README document.
//
// Submodules:
// - render: the Markdown template (pure, deterministic)
// - badges: the language -> shields.io badge table
// - document: the finished text plus its download file name
// =============================================================================

mod badges;
mod document;
mod render;

pub use badges::LANGUAGE_BADGES;
pub use document::RenderedDocument;
pub use render::render;
