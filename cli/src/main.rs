//! # StycoBot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the StycoBot CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the chatbot
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start an interactive chat (the default command)
//! stycobot
//!
//! # Use a specific registry file and show debug logs on stderr
//! stycobot -vv --config ~/friends.toml chat
//!
//! # Answer one message
//! stycobot ask "Ruzan what's your favorite food?"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and build the `Chatbot`
//! 4. Route to the command handler
//! 5. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stycobot::commands;
use stycobot::core::config;
use stycobot::core::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "stycobot",
    about = "StycoBot: ask about the food, age, and quotes of people it knows",
    long_about = "A small keyword-matching chatbot. Log in with a known name, then ask\n\
                  about someone by name, e.g. \"Ruzan what's your favorite food?\".",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the discovered ones.
    #[arg(long, global = true, env = "STYCOBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat interactively (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single message and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
}

fn run(cli: Cli) -> Result<()> {
    let bot = config::load_config(cli.config.as_deref())?.chatbot()?;

    match cli.command.unwrap_or(Commands::Chat(Default::default())) {
        Commands::Chat(args) => commands::chat::handle_chat(args, &bot),
        Commands::Ask(args) => commands::ask::handle_ask(args, &bot),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
