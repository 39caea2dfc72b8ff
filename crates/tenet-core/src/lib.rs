//! Core types and configuration for tenet.
//!
//! This crate provides the foundational data structures used across all tenet crates:
//! - [`types`] — Severity, spans, and diagnostics
//! - [`config`] — Configuration loading from `tenet.json`

pub mod config;
pub mod types;
