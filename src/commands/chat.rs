//! Interactive chat session handler
//!
//! Builds the backend client and conversation controller, replays any
//! restored transcript, and runs a readline loop that submits user input as
//! conversation turns. Slash commands control the session itself.

use crate::backend::BackendClient;
use crate::chat::{ChatSession, Message, TurnOutcome};
use crate::config::Config;
use crate::error::Result;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

/// Canned conversation openers offered while the transcript is fresh
///
/// Mirrors the quick actions shown to first-time visitors: they disappear
/// once the conversation is more than one exchange deep.
pub const QUICK_ACTIONS: [&str; 3] = [
    "What services do you offer?",
    "I want to book a call",
    "Tell me about pricing",
];

/// Session-control commands recognized in the input line
enum SpecialCommand {
    /// Show available commands
    Help,
    /// Show the captured lead state
    Lead,
    /// Clear the persisted conversation and start over
    Reset,
    /// Leave the session
    Exit,
    /// Not a special command
    None,
}

fn parse_special_command(input: &str) -> SpecialCommand {
    match input {
        "/help" | "/h" => SpecialCommand::Help,
        "/lead" => SpecialCommand::Lead,
        "/reset" => SpecialCommand::Reset,
        "/quit" | "/exit" | "/q" => SpecialCommand::Exit,
        _ => SpecialCommand::None,
    }
}

/// Start an interactive chat session
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
///
/// # Errors
///
/// Returns error if the backend client or profile store cannot be
/// initialized, or if the profile store fails during the session. Backend
/// failures inside a turn surface as the fallback assistant message, not as
/// errors.
pub async fn run_chat(config: Config) -> Result<()> {
    tracing::info!("Starting interactive chat session");

    let backend = Arc::new(BackendClient::new(config.backend.clone())?);
    let store = super::open_store(&config)?;
    let mut session = ChatSession::new(backend, store)?;

    let mut rl = DefaultEditor::new()?;

    print_welcome_banner();

    // Replay the transcript so a resumed conversation reads naturally.
    if session.messages().len() > 1 {
        println!(
            "{}",
            format!("Restored {} messages.", session.messages().len()).dimmed()
        );
    }
    for message in session.messages() {
        print_message(message);
    }

    let mut suggestions_active = false;
    if config.chat.show_suggestions && session.messages().len() <= 2 {
        print_quick_actions();
        suggestions_active = true;
    }

    loop {
        match rl.readline(&format!("{} ", "you>".green().bold())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_special_command(trimmed) {
                    SpecialCommand::Help => {
                        print_help();
                        continue;
                    }
                    SpecialCommand::Lead => {
                        print_lead_status(&session);
                        continue;
                    }
                    SpecialCommand::Reset => {
                        session.reset()?;
                        println!("{}", "Conversation cleared.".yellow());
                        print_message(&session.messages()[0]);
                        if config.chat.show_suggestions {
                            print_quick_actions();
                            suggestions_active = true;
                        }
                        continue;
                    }
                    SpecialCommand::Exit => break,
                    SpecialCommand::None => {}
                }

                rl.add_history_entry(trimmed)?;

                // A bare 1-3 while the openers are on screen picks that opener.
                let text = if suggestions_active {
                    match trimmed.parse::<usize>() {
                        Ok(n) if (1..=QUICK_ACTIONS.len()).contains(&n) => {
                            QUICK_ACTIONS[n - 1].to_string()
                        }
                        _ => trimmed.to_string(),
                    }
                } else {
                    trimmed.to_string()
                };

                session.set_input(text);
                if session.submit().await? == TurnOutcome::Replied {
                    if let Some(reply) = session.messages().last() {
                        print_message(reply);
                    }
                }

                if session.messages().len() > 2 {
                    suggestions_active = false;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("{}", "Goodbye!".cyan());
    Ok(())
}

fn print_welcome_banner() {
    println!();
    println!("{}", "Zuvigo AI Assistant".cyan().bold());
    println!("{}", "Hyper Intelligent Digital Assistant".dimmed());
    println!(
        "{}",
        "Type /help for commands, /quit to leave.".dimmed()
    );
    println!();
}

fn print_message(message: &Message) {
    if message.is_user() {
        println!("{} {}", "you>".green().bold(), message.content);
    } else {
        println!("{} {}", "zuvigo>".cyan().bold(), message.content);
    }
}

fn print_quick_actions() {
    println!("{}", "Quick actions (type a number):".dimmed());
    for (idx, action) in QUICK_ACTIONS.iter().enumerate() {
        println!("  {} {}", format!("{}.", idx + 1).dimmed(), action);
    }
    println!();
}

fn print_help() {
    println!("Available commands:");
    println!("  {}   Show this help", "/help".cyan());
    println!("  {}   Show the captured lead state", "/lead".cyan());
    println!("  {}  Clear the conversation and start over", "/reset".cyan());
    println!("  {}   Leave the session", "/quit".cyan());
    println!();
}

fn print_lead_status(session: &ChatSession) {
    let lead = session.lead();
    let display = |field: &Option<String>| {
        field.clone().unwrap_or_else(|| "-".to_string())
    };
    println!("Captured lead:");
    println!("  name:      {}", display(&lead.name));
    println!("  email:     {}", display(&lead.email));
    println!(
        "  submitted: {}",
        if lead.submitted {
            "yes".green().to_string()
        } else {
            "no".yellow().to_string()
        }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_actions_match_widget_openers() {
        assert_eq!(QUICK_ACTIONS.len(), 3);
        assert!(QUICK_ACTIONS.contains(&"I want to book a call"));
    }

    #[test]
    fn test_parse_special_command_variants() {
        assert!(matches!(parse_special_command("/help"), SpecialCommand::Help));
        assert!(matches!(parse_special_command("/h"), SpecialCommand::Help));
        assert!(matches!(parse_special_command("/lead"), SpecialCommand::Lead));
        assert!(matches!(
            parse_special_command("/reset"),
            SpecialCommand::Reset
        ));
        assert!(matches!(parse_special_command("/quit"), SpecialCommand::Exit));
        assert!(matches!(parse_special_command("/exit"), SpecialCommand::Exit));
        assert!(matches!(
            parse_special_command("hello there"),
            SpecialCommand::None
        ));
    }
}
