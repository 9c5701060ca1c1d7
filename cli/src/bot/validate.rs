//! # StycoBot Input Validation
//!
//! File: cli/src/bot/validate.rs
//!
//! ## Overview
//!
//! Screens messages that arrive in one shot (`stycobot ask`) before they reach
//! the responder. A message is rejected when it is empty, longer than
//! `MAX_INPUT_LENGTH` characters, or contains markup/script-like content.
//! The interactive loop does not validate: every line there gets a reply.
//!
use crate::core::error::StycoError;
use regex::RegexSet;
use std::sync::LazyLock;

/// Maximum accepted message length, in characters.
pub const MAX_INPUT_LENGTH: usize = 1000;

const SUSPICIOUS_PATTERNS: [&str; 5] = [
    r"(?i)<script.*?>",
    r"(?i)javascript:",
    r"(?i)data:",
    r"(?i)vbscript:",
    r"(?i)on\w+\s*=",
];

static SUSPICIOUS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(SUSPICIOUS_PATTERNS).expect("suspicious-input patterns are valid regexes")
});

/// # Validate Input (`validate_input`)
///
/// ## Errors
///
/// Returns `StycoError::InvalidInput` describing the first check that failed.
pub fn validate_input(input: &str) -> Result<(), StycoError> {
    if input.is_empty() {
        return Err(StycoError::InvalidInput("Input cannot be empty.".into()));
    }

    let length = input.chars().count();
    if length > MAX_INPUT_LENGTH {
        return Err(StycoError::InvalidInput(format!(
            "Input is {} characters long; the limit is {}.",
            length, MAX_INPUT_LENGTH
        )));
    }

    if SUSPICIOUS.is_match(input) {
        return Err(StycoError::InvalidInput(
            "Input contains disallowed content.".into(),
        ));
    }

    Ok(())
}
