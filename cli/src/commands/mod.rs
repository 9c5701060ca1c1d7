//! # StycoBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the commands of the StycoBot CLI. Each command
//! defines its own `clap` arguments struct and a `handle_*` function that
//! receives those arguments together with the configured `Chatbot`.
//!
//! ## Commands
//!
//! - `chat`: interactive conversation (the default)
//! - `ask`: answer a single message, optionally as JSON
//!

/// Interactive conversation loop. Includes the `Conversation` state machine.
pub mod chat;
/// One-shot answers in plain text or JSON.
pub mod ask;
