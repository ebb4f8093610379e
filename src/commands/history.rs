use crate::cli::HistoryCommand;
use crate::config::Config;
use crate::error::Result;
use crate::storage::KEY_CHAT_MESSAGES;
use colored::Colorize;

/// Handle history commands
pub fn handle_history(config: &Config, command: HistoryCommand) -> Result<()> {
    let store = super::open_store(config)?;

    match command {
        HistoryCommand::Show => {
            let snapshot = store.load_snapshot()?;

            if snapshot.is_empty() {
                println!("{}", "No conversation history found.".yellow());
                return Ok(());
            }

            if let Some(messages) = &snapshot.messages {
                println!("\nConversation ({} messages):", messages.len());
                for message in messages {
                    let tag = if message.is_user() {
                        "you>".green().bold()
                    } else {
                        "zuvigo>".cyan().bold()
                    };
                    println!("  {} {}", tag, message.content);
                }
            }

            println!("\nCaptured lead:");
            println!(
                "  name:      {}",
                snapshot.user_name.as_deref().unwrap_or("-")
            );
            println!(
                "  email:     {}",
                snapshot.user_email.as_deref().unwrap_or("-")
            );
            println!(
                "  submitted: {}",
                if snapshot.lead_submitted { "yes" } else { "no" }
            );

            if let Some(stamp) = store.last_updated(KEY_CHAT_MESSAGES)? {
                println!(
                    "\nLast activity: {}",
                    stamp.format("%Y-%m-%d %H:%M").to_string().dimmed()
                );
            }
            println!();
        }
        HistoryCommand::Clear => {
            store.clear()?;
            println!("{}", "Conversation history cleared.".green());
        }
    }

    Ok(())
}
