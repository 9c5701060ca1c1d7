//! # StycoBot Name Extraction
//!
//! File: cli/src/bot/extract.rs
//!
//! ## Overview
//!
//! Locates the first known name in a line of free text. Alphanumeric runs are
//! accumulated into a candidate token; the candidate is checked against the
//! registry whenever a non-alphanumeric character (or the end of the input)
//! is reached, and discarded only at whitespace.
//!
//! Because punctuation does not reset the candidate, `"Ruzan's"` still
//! matches `Ruzan` (the check fires at the apostrophe), while `"What's"`
//! accumulates into the non-name `Whats`.
//!
//! Matching is exact: no lowercasing, stemming, or fuzzy comparison.
//!
use super::registry::Registry;

/// # Extract Name (`extract_name`)
///
/// Returns the first token in `input` that is a key of `registry`, or `None`.
/// The returned slice borrows from the registry, not from the input.
pub fn extract_name<'r>(registry: &'r Registry, input: &str) -> Option<&'r str> {
    let mut candidate = String::new();

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            candidate.push(ch);
        } else if let Some(name) = known(registry, &candidate) {
            return Some(name);
        } else if ch.is_whitespace() {
            candidate.clear();
        }
    }

    known(registry, &candidate)
}

fn known<'r>(registry: &'r Registry, candidate: &str) -> Option<&'r str> {
    if candidate.is_empty() {
        return None;
    }
    registry.key(candidate)
}
