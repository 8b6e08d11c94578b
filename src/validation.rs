use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Inline error for an email field, `None` when it is fine.
pub fn email_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Email is required")
    } else if !is_valid_email(value) {
        Some("Enter a valid email address")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@studio.io"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("ana@studio"));
        assert!(!is_valid_email("ana studio@x.io"));
        assert!(!is_valid_email("@x.io"));
        assert!(!is_valid_email("ana@@x.io"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(email_error("   "), Some("Email is required"));
        assert_eq!(email_error("nope"), Some("Enter a valid email address"));
        assert_eq!(email_error("a@b.co"), None);
    }
}
