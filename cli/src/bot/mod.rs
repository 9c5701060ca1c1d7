//! # StycoBot Chatbot Core
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! This module ties the registry, name extraction and response generation
//! together behind two types:
//!
//! - `Chatbot`: the bot's display name plus the registry it answers about.
//!   `respond()` never fails; `try_respond()` validates the message first and
//!   is used for one-shot input.
//! - `Session`: the authenticated active user. A session can only be created
//!   (or switched) by authenticating against a registry, so its user is
//!   always a registered name.
//!
//! ## Architecture
//!
//! - `registry`: `UserProfile` and the read-only `Registry`
//! - `extract`: first-known-name scanning
//! - `response`: the ordered topic table and reply templates
//! - `validate`: length and content checks for one-shot messages
//!
//! ## Examples
//!
//! ```rust
//! use stycobot::bot::{registry::Registry, Chatbot, Session};
//!
//! let bot = Chatbot::new("StycoBot", Registry::default());
//! let session = Session::authenticate(bot.registry(), "Ruzan").unwrap();
//! assert_eq!(session.active_user(), "Ruzan");
//! assert!(bot.respond("Ruzan what's your favorite food?").contains("Shrimp"));
//! ```
//!
use crate::core::error::StycoError;
use tracing::info;

pub mod extract;
pub mod registry;
pub mod response;
pub mod validate;

use registry::Registry;

/// A keyword-matching chatbot that knows the people in its registry.
#[derive(Debug, Clone)]
pub struct Chatbot {
    name: String,
    registry: Registry,
}

impl Chatbot {
    pub fn new(name: &str, registry: Registry) -> Self {
        Self {
            name: name.to_string(),
            registry,
        }
    }

    /// The bot's display name, used as the prefix of every reply.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Reply to any message. Unknown or empty input gets a guidance reply.
    pub fn respond(&self, input: &str) -> String {
        response::respond(&self.registry, input)
    }

    /// Fallible version of `respond()`: rejects input that fails
    /// `validate::validate_input` instead of answering it.
    pub fn try_respond(&self, input: &str) -> Result<String, StycoError> {
        validate::validate_input(input)?;
        Ok(self.respond(input))
    }
}

/// The authenticated user of one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    active_user: String,
}

impl Session {
    /// # Authenticate (`authenticate`)
    ///
    /// Starts a session for `name` if the registry knows it.
    ///
    /// ## Errors
    ///
    /// Returns `StycoError::UnknownUser` for names not in `registry`.
    pub fn authenticate(registry: &Registry, name: &str) -> Result<Self, StycoError> {
        if !registry.contains(name) {
            return Err(StycoError::UnknownUser {
                name: name.to_string(),
            });
        }
        info!("Authenticated user '{}'", name);
        Ok(Self {
            active_user: name.to_string(),
        })
    }

    /// Switches the active user. On failure the session is left unchanged.
    pub fn change_user(&mut self, registry: &Registry, name: &str) -> Result<(), StycoError> {
        *self = Self::authenticate(registry, name)?;
        Ok(())
    }

    pub fn active_user(&self) -> &str {
        &self.active_user
    }
}
