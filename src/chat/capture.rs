//! Contact detection heuristics for lead capture
//!
//! The detectors are intentionally simple pattern matches, not a general
//! text-understanding capability: a fixed email regex and a fixed
//! case-insensitive phrase check against the assistant's last question.
//! Keeping them fixed keeps lead-capture behavior reproducible.

use regex::Regex;
use std::sync::OnceLock;

/// Fixed pattern for email-shaped substrings: alphanumeric local part with
/// `._%+-`, an `@`, dot-separated domain labels, and a top-level label of at
/// least two letters.
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Phrase the assistant uses when asking for the visitor's name
const NAME_PROMPT_PHRASE: &str = "your name";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("invalid email pattern"))
}

/// Extracts the first email-shaped substring from a message, if any
///
/// # Arguments
///
/// * `text` - The message text to scan
///
/// # Examples
///
/// ```
/// use zuvigo_chat::chat::capture::extract_email;
///
/// assert_eq!(
///     extract_email("reach me at jane@example.com please"),
///     Some("jane@example.com".to_string())
/// );
/// assert_eq!(extract_email("no contact here"), None);
/// ```
pub fn extract_email(text: &str) -> Option<String> {
    email_regex().find(text).map(|m| m.as_str().to_string())
}

/// Returns true if an assistant message asked for the visitor's name
///
/// The check is a case-insensitive substring match on "your name", applied to
/// the most recent assistant message before a user turn.
///
/// # Examples
///
/// ```
/// use zuvigo_chat::chat::capture::asks_for_name;
///
/// assert!(asks_for_name("What's your name?"));
/// assert!(asks_for_name("May I have Your Name please"));
/// assert!(!asks_for_name("What's your email?"));
/// ```
pub fn asks_for_name(assistant_text: &str) -> bool {
    assistant_text.to_lowercase().contains(NAME_PROMPT_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email_from_plain_address() {
        assert_eq!(
            extract_email("jane@example.com"),
            Some("jane@example.com".to_string())
        );
    }

    #[test]
    fn test_extract_email_embedded_in_sentence() {
        assert_eq!(
            extract_email("sure, it's alex@co.com, thanks"),
            Some("alex@co.com".to_string())
        );
    }

    #[test]
    fn test_extract_email_takes_first_match() {
        assert_eq!(
            extract_email("a@b.com or c@d.org"),
            Some("a@b.com".to_string())
        );
    }

    #[test]
    fn test_extract_email_allows_special_local_chars() {
        assert_eq!(
            extract_email("first.last+tag%x-y@mail.example.co"),
            Some("first.last+tag%x-y@mail.example.co".to_string())
        );
    }

    #[test]
    fn test_extract_email_rejects_short_tld() {
        assert_eq!(extract_email("user@host.c"), None);
    }

    #[test]
    fn test_extract_email_rejects_plain_text() {
        assert_eq!(extract_email("I want to book a call"), None);
        assert_eq!(extract_email(""), None);
    }

    #[test]
    fn test_asks_for_name_case_insensitive() {
        assert!(asks_for_name("What's your name?"));
        assert!(asks_for_name("WHAT IS YOUR NAME"));
        assert!(asks_for_name("Before we continue, Your Name please."));
    }

    #[test]
    fn test_asks_for_name_negative() {
        assert!(!asks_for_name("What's your email address?"));
        assert!(!asks_for_name("How can I help you today?"));
    }
}
