//! Source model extraction for tenet.
//!
//! Parses TypeScript/TSX files with tree-sitter into a [`source_model::SourceModel`]:
//! the ordered imports, declarations, and identifiers that style rules are
//! checked against. Also provides language detection by extension and an
//! ignore-aware file walker.

pub mod builder;
pub mod source_model;
pub mod walker;
