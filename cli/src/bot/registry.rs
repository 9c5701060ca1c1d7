//! # StycoBot User Registry
//!
//! File: cli/src/bot/registry.rs
//!
//! ## Overview
//!
//! The registry is the fixed collection of people the bot knows about. It is
//! built once from configuration and is read-only afterwards: there are no
//! insert or remove operations, only lookups.
//!
//! Profiles are deserialized straight from the `[[users]]` tables of the TOML
//! configuration. The `age` field accepts either a string (`"34"`) or an
//! integer (`34`) and always stores the text form.
//!
use crate::core::error::{Result, StycoError};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// A known user's static profile.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserProfile {
    /// Unique key. Matched case-sensitively against tokens in chat input.
    pub name: String,
    #[serde(deserialize_with = "string_or_integer")]
    pub age: String,
    pub favorite_food: String,
    pub favorite_quote: String,
}

impl UserProfile {
    pub fn new(name: &str, age: &str, favorite_food: &str, favorite_quote: &str) -> Self {
        Self {
            name: name.to_string(),
            age: age.to_string(),
            favorite_food: favorite_food.to_string(),
            favorite_quote: favorite_quote.to_string(),
        }
    }
}

/// Accepts `age = "34"` as well as `age = 34`.
fn string_or_integer<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Age {
        Text(String),
        Number(i64),
    }

    Ok(match Age::deserialize(deserializer)? {
        Age::Text(text) => text,
        Age::Number(number) => number.to_string(),
    })
}

/// The people seeded into every run that does not configure its own users.
pub fn default_users() -> Vec<UserProfile> {
    vec![UserProfile::new("Ruzan", "34", "Shrimp", "Never give up")]
}

/// # User Registry (`Registry`)
///
/// Immutable name → profile map. Constructed explicitly and passed to whatever
/// needs it, so tests can build as many independent registries as they like.
#[derive(Debug, Clone)]
pub struct Registry {
    users: HashMap<String, UserProfile>,
}

impl Registry {
    /// # Build Registry (`from_profiles`)
    ///
    /// Seeds a registry from a list of profiles.
    ///
    /// ## Errors
    ///
    /// Returns `StycoError::DuplicateUser` if two profiles share a name.
    pub fn from_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Result<Self> {
        let mut users = HashMap::new();
        for profile in profiles {
            if users.contains_key(&profile.name) {
                return Err(StycoError::DuplicateUser {
                    name: profile.name,
                }
                .into());
            }
            users.insert(profile.name.clone(), profile);
        }
        Ok(Self { users })
    }

    /// Returns the profile registered under exactly `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&UserProfile> {
        self.users.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// Returns the stored key equal to `name`, borrowed from the registry.
    pub(crate) fn key(&self, name: &str) -> Option<&str> {
        self.users.get_key_value(name).map(|(key, _)| key.as_str())
    }

    /// All known names, sorted so messages listing them are stable.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        let users = default_users()
            .into_iter()
            .map(|profile| (profile.name.clone(), profile))
            .collect();
        Self { users }
    }
}
