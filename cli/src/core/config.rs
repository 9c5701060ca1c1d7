//! # StycoBot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the bot's configuration: its display name and the set of
//! users it knows about. The result is an explicit `Config` value that is
//! turned into a `Chatbot` and handed to the command handlers. Nothing is
//! process-global.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` (or `STYCOBOT_CONFIG`). When
//!    present, no other file is consulted.
//! 2. Project-specific `.stycobot.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `<config dir>/stycobot/config.toml`
//! 4. Built-in defaults (`StycoBot`, who knows `Ruzan`)
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! name = "StycoBot"
//!
//! [[users]]
//! name = "Ruzan"
//! age = 34
//! favorite_food = "Shrimp"
//! favorite_quote = "Never give up"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let bot = cfg.chatbot()?;
//! ```
//!
use crate::bot::registry::{default_users, Registry, UserProfile};
use crate::bot::Chatbot;
use crate::core::error::{Result, StycoError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    /// The people the bot can answer questions about.
    #[serde(default = "default_users")]
    pub users: Vec<UserProfile>,
}

/// Settings for the bot itself.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Display name used in greetings and as the reply prefix.
    #[serde(default = "default_bot_name")]
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            users: default_users(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
        }
    }
}

fn default_bot_name() -> String {
    "StycoBot".to_string()
}

impl Config {
    /// Builds the read-only registry from the configured users.
    pub fn registry(&self) -> Result<Registry> {
        Registry::from_profiles(self.users.iter().cloned())
            .context("Failed to build user registry from configuration")
    }

    /// Builds the chatbot described by this configuration.
    pub fn chatbot(&self) -> Result<Chatbot> {
        Ok(Chatbot::new(&self.bot.name, self.registry()?))
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".stycobot.toml";

/// # Load Configuration (`load_config`)
///
/// Loads, merges and validates configuration.
///
/// ## Arguments
///
/// * `explicit`: A file named on the command line. When `Some`, it is the only
///   source (`~` is expanded) and a missing file is an error.
///
/// ## Errors
///
/// Fails if a configuration file cannot be read or parsed, or if the merged
/// result does not pass `validate_config`. Duplicate user names are reported
/// later, by `Config::chatbot()`, when the registry is built.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = expand_path(path);
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "StycoBot", "stycobot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.stycobot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();

    Config {
        bot: BotConfig {
            name: if project.bot.name != defaults.bot.name {
                project.bot.name
            } else {
                user.bot.name
            },
        },
        users: if project.users != defaults.users {
            project.users
        } else {
            user.users
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(StycoError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    if config.users.is_empty() {
        return Err(anyhow!(StycoError::Config(
            "At least one user must be configured.".to_string()
        )));
    }
    for user in &config.users {
        if user.name.is_empty() {
            return Err(anyhow!(StycoError::Config(
                "User names cannot be empty.".to_string()
            )));
        }
        // Extraction only ever produces alphanumeric tokens.
        if !user.name.chars().all(char::is_alphanumeric) {
            return Err(anyhow!(StycoError::Config(format!(
                "User name '{}' must be a single alphanumeric word.",
                user.name
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [bot]
            name = "QuoteBot"

            [[users]]
            name = "Sean"
            age = 34
            favorite_food = "Daar"
            favorite_quote = "Main who Daan Can't Love Yourself"

            [[users]]
            name = "Brijesh"
            age = "32"
            favorite_food = "Pizza"
            favorite_quote = "Life is beautiful"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.bot.name, "QuoteBot");
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].age, "34");
        assert_eq!(config.users[1].favorite_food, "Pizza");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert_eq!(config, Config::default());
        assert_eq!(config.bot.name, "StycoBot");
        assert_eq!(config.users[0].name, "Ruzan");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [bot]
            name = "StycoBot"
            mood = "cheerful"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_non_default_project_values() {
        let user = Config {
            bot: BotConfig {
                name: "UserBot".into(),
            },
            ..Default::default()
        };
        let project = Config {
            users: vec![UserProfile::new("Sean", "34", "Daar", "Hi")],
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.bot.name, "UserBot");
        assert_eq!(merged.users[0].name, "Sean");
    }

    #[test]
    fn test_merge_without_project_returns_user() {
        let user = Config {
            bot: BotConfig {
                name: "UserBot".into(),
            },
            ..Default::default()
        };
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_bad_names() {
        let config = Config {
            users: vec![UserProfile::new("Mary Ann", "30", "Soup", "Hello")],
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("single alphanumeric word"));

        let config = Config {
            users: vec![],
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_chatbot_rejects_duplicates() {
        let config = Config {
            users: vec![
                UserProfile::new("Sean", "34", "Daar", "Hi"),
                UserProfile::new("Sean", "35", "Rice", "Bye"),
            ],
            ..Default::default()
        };
        // Per-field checks pass; the registry build is where duplicates surface.
        assert!(validate_config(&config).is_ok());
        let err = config.chatbot().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StycoError>(),
            Some(StycoError::DuplicateUser { .. })
        ));
    }

    #[test]
    fn test_validate_config_rejects_blank_bot_name() {
        let config = Config {
            bot: BotConfig { name: "  ".into() },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bot.toml");
        fs::write(
            &path,
            r#"
            [[users]]
            name = "Brijesh"
            age = 32
            favorite_food = "Pizza"
            favorite_quote = "Life is beautiful"
            "#,
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).expect("Failed to load config");
        assert_eq!(config.bot.name, "StycoBot");
        let bot = config.chatbot().unwrap();
        assert!(bot.registry().contains("Brijesh"));
        assert!(!bot.registry().contains("Ruzan"));
    }

    #[test]
    fn test_load_explicit_config_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(Some(temp_dir.path().join("missing.toml").as_path()));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read configuration file"));
    }
}
