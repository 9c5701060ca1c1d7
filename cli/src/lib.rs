//! # StycoBot Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! StycoBot answers questions about a small set of known people (age,
//! favorite food, favorite quote) by spotting a known name in the message and
//! matching a handful of keywords. This library holds everything except the
//! argument parsing and logging setup in `main.rs`, so the same code drives
//! the interactive loop, `stycobot ask`, and the integration tests.
//!
//! ## Architecture
//!
//! - `bot`: registry, name extraction, response generation, validation
//! - `commands`: the `chat` and `ask` command handlers
//! - `core`: configuration and errors
//!
pub mod bot;
pub mod commands;
pub mod core;
