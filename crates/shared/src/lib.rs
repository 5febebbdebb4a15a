//! Shared types and configuration for Mizan.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes, the vocabulary every currency operation is keyed by
//! - Money values with decimal precision
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{CurrencyCode, InvalidCurrencyCode, Money};
