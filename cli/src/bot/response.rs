//! # StycoBot Response Generation
//!
//! File: cli/src/bot/response.rs
//!
//! ## Overview
//!
//! Turns a resolved profile plus the user's text into a canned reply. The
//! keyword policy is a small ordered table (`TOPIC_RULES`): the input is
//! lowercased and the first rule whose keyword occurs as a substring selects
//! the profile field to report. Matching is deliberately literal, so
//! `"how old are you?"` does not count as asking about age.
//!
//! `respond` is the complete pipeline (extract → look up → strip the name →
//! generate) and is what both the interactive loop and `stycobot ask` call.
//!
use super::extract::extract_name;
use super::registry::{Registry, UserProfile};
use tracing::debug;

/// Reply when the input mentions nobody the registry knows.
pub const NO_NAME_GUIDANCE: &str = "I didn't find a name in your message.\n\
Try asking about someone I know,\n\
or ask them to chat with me first so I can learn about them.";

/// Reply when a name was extracted but has no profile.
pub const UNKNOWN_USER: &str = "I don't know that user.";

/// Profile field a topic rule reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Food,
    Age,
    Quote,
}

impl Field {
    /// Fills this field's template with the profile's data.
    pub fn render(self, profile: &UserProfile) -> String {
        match self {
            Field::Food => format!(
                "{}, your favorite food is {}. How about trying something new today?",
                profile.name, profile.favorite_food
            ),
            Field::Age => format!("{}, you're {} years young!", profile.name, profile.age),
            Field::Quote => format!(
                "{}, your favorite quote is: '{}'",
                profile.name, profile.favorite_quote
            ),
        }
    }
}

/// A `(keyword, field)` pair from the topic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRule {
    pub keyword: &'static str,
    pub field: Field,
}

/// Topic rules in priority order. Keywords are lowercase.
pub static TOPIC_RULES: [TopicRule; 3] = [
    TopicRule {
        keyword: "food",
        field: Field::Food,
    },
    TopicRule {
        keyword: "age",
        field: Field::Age,
    },
    TopicRule {
        keyword: "quote",
        field: Field::Quote,
    },
];

/// Returns the first rule whose keyword occurs in `input`, ignoring case.
pub fn match_rule(input: &str) -> Option<&'static TopicRule> {
    let lowered = input.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| lowered.contains(rule.keyword))
}

/// Reply used when no topic keyword is present.
pub fn fallback(profile: &UserProfile) -> String {
    format!(
        "Sorry {}, I can only talk about food, age, and quotes.",
        profile.name
    )
}

/// # Generate Response (`generate_response`)
///
/// Picks the reply for `profile` given the (name-stripped) `input`.
/// A missing profile yields `UNKNOWN_USER` without consulting the rules.
pub fn generate_response(profile: Option<&UserProfile>, input: &str) -> String {
    let Some(profile) = profile else {
        return UNKNOWN_USER.to_string();
    };

    match match_rule(input) {
        Some(rule) => rule.field.render(profile),
        None => fallback(profile),
    }
}

/// # Respond (`respond`)
///
/// Full reply to one message against `registry`. The extracted name is
/// removed from the text before the keyword rules run, so a name that itself
/// contains a keyword cannot select a topic.
pub fn respond(registry: &Registry, message: &str) -> String {
    let name = extract_name(registry, message);
    debug!("Extracted name: {:?}", name);

    let Some(name) = name else {
        return NO_NAME_GUIDANCE.to_string();
    };

    let profile = registry.lookup(name);
    let remainder = message.replace(name, "");
    generate_response(profile, remainder.trim())
}
