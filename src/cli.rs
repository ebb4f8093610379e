//! Command-line interface definition for the Zuvigo chat client
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot messages, and
//! conversation history management.

use clap::{Parser, Subcommand};

/// Zuvigo chat - lead-capturing client for the Zuvigo AI backend
///
/// Talk to the Zuvigo assistant from the terminal. Conversations are
/// persisted locally and resumed automatically.
#[derive(Parser, Debug, Clone)]
#[command(name = "zuvigo-chat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the profile database path
    #[arg(long, env = "ZUVIGO_PROFILE_DB")]
    pub profile_db: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the chat client
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session with the assistant
    Chat,

    /// Send a single message and print the assistant's reply
    Send {
        /// The message to send
        #[arg(short, long)]
        message: String,
    },

    /// Inspect or clear the persisted conversation
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

/// History management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// Print the persisted transcript and captured lead state
    Show,

    /// Delete the persisted conversation and captured lead state
    Clear,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            profile_db: None,
            command: Commands::Chat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(cli.profile_db.is_none());
        assert!(matches!(cli.command, Commands::Chat));
    }

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["zuvigo-chat", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert!(matches!(cli.command, Commands::Chat));
    }

    #[test]
    fn test_cli_parse_send_command() {
        let cli = Cli::try_parse_from(["zuvigo-chat", "send", "--message", "Hello there"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Send { message } = cli.command {
            assert_eq!(message, "Hello there");
        } else {
            panic!("Expected Send command");
        }
    }

    #[test]
    fn test_cli_parse_send_requires_message() {
        let cli = Cli::try_parse_from(["zuvigo-chat", "send"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_history_show() {
        let cli = Cli::try_parse_from(["zuvigo-chat", "history", "show"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::History { command } = cli.command {
            assert!(matches!(command, HistoryCommand::Show));
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_history_clear() {
        let cli = Cli::try_parse_from(["zuvigo-chat", "history", "clear"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::History { command } = cli.command {
            assert!(matches!(command, HistoryCommand::Clear));
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_profile_db_flag() {
        let cli =
            Cli::try_parse_from(["zuvigo-chat", "--profile-db", "/tmp/test.db", "chat"]).unwrap();
        assert_eq!(cli.profile_db, Some("/tmp/test.db".to_string()));
    }

    #[test]
    fn test_cli_parse_verbose_flag() {
        let cli = Cli::try_parse_from(["zuvigo-chat", "-v", "chat"]).unwrap();
        assert!(cli.verbose);
    }
}
