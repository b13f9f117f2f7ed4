//! Text format helpers shared by both rule sets.
//!
//! # Email
//!
//! `local@domain` with exactly one `@`, no whitespace, a non-empty local
//! part, and a domain made of at least two non-empty dot-separated labels.
//!
//! # Phone
//!
//! Conventional phone syntax, not tied to any country:
//!
//! ```text
//! phone     := number [extension]
//! number    := ["+"] (digit | "-" | "." | "(" | ")" | " ")+
//! extension := ws* ("ext" | "ext." | "x") ws* digit+      (case-insensitive)
//! ```
//!
//! The number part must contain between [`MIN_PHONE_DIGITS`] and
//! [`MAX_PHONE_DIGITS`] digits. Trailing whitespace is ignored.

use std::sync::LazyLock;

use regex::Regex;

/// Fewest digits accepted in a phone number (a local subscriber number).
pub const MIN_PHONE_DIGITS: usize = 7;

/// Most digits accepted in a phone number (E.164 maximum).
pub const MAX_PHONE_DIGITS: usize = 15;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("valid regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9().\- ]+$").expect("valid regex"));

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:ext\.?|x)\s*[0-9]+$").expect("valid regex"));

/// Returns true if `value` is a syntactically valid email address.
///
/// The empty string is not a valid address.
///
/// # Examples
///
/// ```
/// use staffing_validator::validation::is_valid_email;
///
/// assert!(is_valid_email("jane.doe@example.com"));
/// assert!(!is_valid_email("bad-email"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns true if `value` follows conventional phone syntax.
///
/// # Examples
///
/// ```
/// use staffing_validator::validation::is_valid_phone;
///
/// assert!(is_valid_phone("+1 (555) 123-4567"));
/// assert!(is_valid_phone("555.123.4567 ext. 89"));
/// assert!(!is_valid_phone("call me"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim_end();
    let number = match EXTENSION_RE.find(value) {
        Some(extension) => &value[..extension.start()],
        None => value,
    };

    if !PHONE_RE.is_match(number) {
        return false;
    }

    let digits = number.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

/// Returns true if `value` is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
