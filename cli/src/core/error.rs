//! # StycoBot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout StycoBot. Domain
//! failures get a dedicated `StycoError` variant; everything else (I/O,
//! TOML and JSON parsing) is carried by `anyhow` with added context.
//!
//! ## Architecture
//!
//! - `StycoError`: a `thiserror` enum for the failures callers may want to match on
//! - `Result<T>`: a type alias for `anyhow::Result<T>`
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if registry.lookup(name).is_none() {
//!     return Err(StycoError::UnknownUser { name: name.to_string() })?;
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<StycoError>(), Some(StycoError::InvalidInput(_))) => {
//!         println!("Rejected input");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the StycoBot application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StycoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User '{name}' is not in the registry.")]
    UnknownUser { name: String },

    #[error("User '{name}' is defined more than once.")]
    DuplicateUser { name: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid request format: {0}")]
    InvalidRequest(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
