//! # StycoBot Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives the interactive loop of the real binary through stdin and checks
//! the transcript on stdout.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_food_question() {
    let (_dir, mut cmd) = stycobot_cmd(THREE_USERS);
    cmd.arg("chat")
        .write_stdin("Ruzan\nRuzan what's your favorite food?\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter your name: "))
        .stdout(predicate::str::contains("Welcome back Ruzan! I'm StycoBot."))
        .stdout(predicate::str::contains("Hello Ruzan! I'm StycoBot."))
        .stdout(predicate::str::contains("StycoBot: Ruzan, your favorite food is Shrimp."))
        .stdout(predicate::str::ends_with("Goodbye! Have a great day!\n"));
}

#[test]
fn test_chat_is_the_default_command() {
    let (_dir, mut cmd) = stycobot_cmd(THREE_USERS);
    cmd.write_stdin("Brijesh\nquote for Sean\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "StycoBot: Sean, your favorite quote is: 'Main who Daan Can't Love Yourself'",
        ));
}

#[test]
fn test_unknown_user_exits_without_welcome() {
    let (_dir, mut cmd) = stycobot_cmd(THREE_USERS);
    cmd.write_stdin("Bob\nRuzan food\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry Bob, I'm not there yet."))
        .stdout(predicate::str::contains("Welcome").not())
        .stdout(predicate::str::contains("You: ").not())
        .stdout(predicate::str::contains("Goodbye").not());
}

#[test]
fn test_help_then_change_name() {
    let (_dir, mut cmd) = stycobot_cmd(THREE_USERS);
    cmd.write_stdin("Ruzan\nHELP\nchange name\nSean\nSean age\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'quit' to exit."))
        .stdout(predicate::str::contains("Welcome back Sean! I'm StycoBot."))
        .stdout(predicate::str::contains("StycoBot: Sean, you're 34 years young!"));
}

#[test]
fn test_custom_bot_name() {
    let config = THREE_USERS.replace("name = \"StycoBot\"", "name = \"QuoteBot\"");
    let (_dir, mut cmd) = stycobot_cmd(&config);
    cmd.write_stdin("Ruzan\nRuzan quote\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm QuoteBot."))
        .stdout(predicate::str::contains("QuoteBot: Ruzan, your favorite quote is: 'Never give up'"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let (_dir, mut cmd) = stycobot_cmd(THREE_USERS);
    cmd.arg("-vv")
        .write_stdin("Ruzan\nRuzan food\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted name").not())
        .stderr(predicate::str::contains("Extracted name"));
}
