//! Shared types, errors, and configuration for Liasse.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision and a currency label
//! - Number formatting for amounts, percentages, multiples and day counts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;


pub use config::{AppConfig, EngineConfig, LoggingConfig, TaxConfig};
pub use error::{AppError, AppResult};
