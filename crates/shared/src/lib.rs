//! Shared types and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for fiscal years and journal entries
//! - The positive decimal `Amount` used by journal entries
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
