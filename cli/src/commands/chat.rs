//! # StycoBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `stycobot chat` (also the default when no
//! subcommand is given): an interactive loop that first asks who is talking,
//! then answers questions about the people in the registry until the user
//! quits.
//!
//! ## Architecture
//!
//! The loop is a small state machine driven by `Conversation::run`:
//!
//! ```text
//! AwaitingName ──known──▶ Chatting ──quit / EOF──▶ Terminated(Goodbye)
//!      │   ▲                 │
//!      │   └──change name────┘
//!      └──unknown──▶ Terminated(Rejected)      EOF at name prompt ▶ Terminated(InputClosed)
//! ```
//!
//! An unknown name ends the conversation at once, both on first login and on
//! `change name`; there is no retry.
//!
//! `Conversation` is generic over its reader and writer, so tests run whole
//! conversations against in-memory buffers.
//!
//! ## Examples
//!
//! ```text
//! Please enter your name: Ruzan
//! Welcome back Ruzan! I'm StycoBot.
//! Hello Ruzan! I'm StycoBot.
//! Type 'help' for instructions.
//! Once you are done talking with me you can change your name by typing 'change name'.
//! You: Ruzan what's your favorite food?
//! StycoBot: Ruzan, your favorite food is Shrimp. How about trying something new today?
//! You: quit
//! Goodbye! Have a great day!
//! ```
//!
use crate::bot::{Chatbot, Session};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
///
/// `stycobot chat` takes no options; the registry and bot name come from
/// configuration.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {}

pub const NAME_PROMPT: &str = "Please enter your name: ";
pub const INPUT_PROMPT: &str = "You: ";
pub const GOODBYE: &str = "Goodbye! Have a great day!";

const HELP_LINES: [&str; 8] = [
    "Type 'quit' to exit.",
    "Type 'help' for instructions.",
    "Type 'change name' to change your name.",
    "Available commands:",
    "- Ask about food preferences",
    "- Ask about age",
    "- Ask about favorite quotes",
    "- Mention the person you are asking about by name",
];

/// A line typed at the `You: ` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Quit,
    Help,
    ChangeName,
    Message(&'a str),
}

impl<'a> ChatCommand<'a> {
    /// Commands are matched case-insensitively after trimming; anything else
    /// is a message for the responder.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            ChatCommand::Quit
        } else if trimmed.eq_ignore_ascii_case("help") {
            ChatCommand::Help
        } else if trimmed.eq_ignore_ascii_case("change name") {
            ChatCommand::ChangeName
        } else {
            ChatCommand::Message(trimmed)
        }
    }
}

/// How a conversation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The user quit (or input ended mid-chat); a goodbye was printed.
    /// `active_user` is whoever was logged in at that point.
    Goodbye { active_user: String },
    /// A name outside the registry was entered.
    Rejected { name: String },
    /// Input ended while waiting for a name.
    InputClosed,
}

enum State {
    /// `session` is `Some` when re-authenticating via `change name`.
    AwaitingName { session: Option<Session> },
    Chatting(Session),
    Terminated(ChatOutcome),
}

/// One interactive conversation between a user and `bot`.
pub struct Conversation<'b, R, W> {
    bot: &'b Chatbot,
    input: R,
    output: W,
}

impl<'b, R: BufRead, W: Write> Conversation<'b, R, W> {
    pub fn new(bot: &'b Chatbot, input: R, output: W) -> Self {
        Self { bot, input, output }
    }

    /// # Run Conversation (`run`)
    ///
    /// Drives the state machine until it terminates.
    ///
    /// ## Errors
    ///
    /// Only I/O failures on the reader or writer are errors; every kind of
    /// user input, including an unknown name, ends in an `Ok` outcome.
    pub fn run(mut self) -> Result<ChatOutcome> {
        let mut state = State::AwaitingName { session: None };
        loop {
            state = match state {
                State::AwaitingName { session } => self.authenticate(session)?,
                State::Chatting(session) => self.turn(session)?,
                State::Terminated(outcome) => {
                    self.output.flush().context("Failed to flush output")?;
                    return Ok(outcome);
                }
            };
        }
    }

    fn authenticate(&mut self, session: Option<Session>) -> Result<State> {
        let Some(line) = self.prompt(NAME_PROMPT)? else {
            return Ok(State::Terminated(ChatOutcome::InputClosed));
        };
        let name = line.trim();
        let registry = self.bot.registry();

        let first_login = session.is_none();
        let authenticated = match session {
            None => Session::authenticate(registry, name),
            Some(mut session) => session.change_user(registry, name).map(|()| session),
        };

        let Ok(session) = authenticated else {
            info!("Rejected unknown user '{}'", name);
            writeln!(
                self.output,
                "Sorry {}, I'm not there yet. Soon, I will be able to learn about new people. Till then ask about {}.",
                name,
                registry.names().join(", ")
            )?;
            return Ok(State::Terminated(ChatOutcome::Rejected {
                name: name.to_string(),
            }));
        };

        writeln!(
            self.output,
            "Welcome back {}! I'm {}.",
            session.active_user(),
            self.bot.name()
        )?;
        if first_login {
            writeln!(
                self.output,
                "Hello {}! I'm {}.",
                session.active_user(),
                self.bot.name()
            )?;
            writeln!(self.output, "Type 'help' for instructions.")?;
            writeln!(
                self.output,
                "Once you are done talking with me you can change your name by typing 'change name'."
            )?;
        }
        Ok(State::Chatting(session))
    }

    fn turn(&mut self, session: Session) -> Result<State> {
        let Some(line) = self.prompt(INPUT_PROMPT)? else {
            writeln!(self.output)?;
            writeln!(self.output, "{}", GOODBYE)?;
            return Ok(State::Terminated(goodbye(&session)));
        };

        let command = ChatCommand::parse(&line);
        debug!("[{}] {:?}", session.active_user(), command);

        match command {
            ChatCommand::Quit => {
                writeln!(self.output, "{}", GOODBYE)?;
                Ok(State::Terminated(goodbye(&session)))
            }
            ChatCommand::Help => {
                for help_line in HELP_LINES {
                    writeln!(self.output, "{}", help_line)?;
                }
                Ok(State::Chatting(session))
            }
            ChatCommand::ChangeName => Ok(State::AwaitingName {
                session: Some(session),
            }),
            ChatCommand::Message(text) => {
                let reply = self.bot.respond(text);
                writeln!(self.output, "{}: {}", self.bot.name(), reply)?;
                Ok(State::Chatting(session))
            }
        }
    }

    /// Prints `prompt` and reads one line. `None` means end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn goodbye(session: &Session) -> ChatOutcome {
    ChatOutcome::Goodbye {
        active_user: session.active_user().to_string(),
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs an interactive conversation on stdin/stdout. Every outcome, including
/// rejection of an unknown name, is a normal exit.
pub fn handle_chat(_args: ChatArgs, bot: &Chatbot) -> Result<()> {
    info!("Starting chat as {}", bot.name());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Conversation::new(bot, stdin.lock(), stdout.lock()).run()?;
    info!("Chat ended: {:?}", outcome);
    Ok(())
}
