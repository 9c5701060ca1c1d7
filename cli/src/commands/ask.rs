//! # StycoBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `stycobot ask` answers a single message and exits, for scripts and for
//! wrappers that want the bot's reply without the interactive loop. Unlike
//! `chat`, the message is validated first (see `bot::validate`).
//!
//! With `--json` the input is a request payload and the output a response
//! body:
//!
//! ```text
//! $ echo '{"message": "Ruzan quote?"}' | stycobot ask --json
//! {"message":"Ruzan, your favorite quote is: 'Never give up'"}
//!
//! $ stycobot ask --json '{"message": ""}'
//! {"error":"Invalid input"}            (exit status 1)
//! ```
//!
use crate::bot::Chatbot;
use crate::core::error::{Result, StycoError};
use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Read, Write};
use tracing::{debug, warn};

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to answer. Read from stdin when omitted.
    pub message: Option<String>,

    /// Treat the input as a JSON payload (`{"message": "..."}`) and reply in JSON.
    #[arg(long)]
    pub json: bool,
}

/// Request body accepted by `ask --json`.
///
/// `message` is kept as a raw JSON value so that a well-formed payload with a
/// missing, `null` or non-string message is reported as invalid input rather
/// than as a malformed request.
#[derive(Deserialize, Debug, Default)]
pub struct AskRequest {
    #[serde(default)]
    pub message: Value,
}

/// Response body written by `ask --json`.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum AskResponse {
    Message { message: String },
    Error { error: String },
}

impl From<&std::result::Result<String, StycoError>> for AskResponse {
    fn from(result: &std::result::Result<String, StycoError>) -> Self {
        match result {
            Ok(reply) => AskResponse::Message {
                message: reply.clone(),
            },
            Err(StycoError::InvalidRequest(_)) => AskResponse::Error {
                error: "Invalid request format".into(),
            },
            Err(StycoError::InvalidInput(_)) => AskResponse::Error {
                error: "Invalid input".into(),
            },
            Err(_) => AskResponse::Error {
                error: "Internal error".into(),
            },
        }
    }
}

/// # Answer Payload (`answer_payload`)
///
/// Parses a JSON request and returns the bot's validated reply.
///
/// ## Errors
///
/// - `StycoError::InvalidRequest` if `payload` is not a JSON request object.
/// - `StycoError::InvalidInput` if the message is missing, not a string, or
///   fails validation.
pub fn answer_payload(bot: &Chatbot, payload: &str) -> std::result::Result<String, StycoError> {
    let request: AskRequest = serde_json::from_str(payload).map_err(|e| {
        warn!("Invalid JSON in request body: {}", e);
        StycoError::InvalidRequest(e.to_string())
    })?;

    match request.message {
        Value::String(message) => bot.try_respond(&message),
        Value::Null => bot.try_respond(""),
        other => {
            warn!("Non-string message in request body: {}", other);
            Err(StycoError::InvalidInput("Message must be a string.".into()))
        }
    }
}

/// # Answer (`answer`)
///
/// Writes the reply for `input` to `out`, in plain text or JSON.
///
/// ## Errors
///
/// Invalid input (and, in JSON mode, an invalid payload) is returned as an
/// error after any JSON error body has been written, so the process exits
/// non-zero.
pub fn answer<W: Write>(bot: &Chatbot, input: &str, json: bool, out: &mut W) -> Result<()> {
    if !json {
        let reply = bot.try_respond(input)?;
        writeln!(out, "{}", reply)?;
        return Ok(());
    }

    let result = answer_payload(bot, input);
    let body = serde_json::to_string(&AskResponse::from(&result))
        .context("Failed to serialize response")?;
    writeln!(out, "{}", body)?;
    result.map(|_| ()).map_err(Into::into)
}

/// # Handle Ask Command (`handle_ask`)
///
/// Reads the message (argument or stdin) and prints the reply on stdout.
pub fn handle_ask(args: AskArgs, bot: &Chatbot) -> Result<()> {
    let input = match args.message {
        Some(message) => message,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read message from stdin")?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    debug!("Answering one-shot message (json = {}): {:?}", args.json, input);

    let stdout = io::stdout();
    answer(bot, &input, args.json, &mut stdout.lock())
}
