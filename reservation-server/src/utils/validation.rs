//! Input validation helpers
//!
//! Request payload fields arrive as `Option<String>`; a field counts as
//! provided only when it is present and non-empty.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot in the domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Return the value when it is present and non-empty
pub fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
