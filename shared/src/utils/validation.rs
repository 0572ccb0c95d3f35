//! Format validation helpers for natural keys (email, phone)

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC-5321-ish email shape. The mailbox side accepts anything printable;
/// the domain side requires at least one dot.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

/// E.164-style phone numbers with an optional leading plus sign.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{6,15}$").expect("phone regex must compile")
});

/// Check if a string is not blank
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if an email address has a valid shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check if a phone number has a valid shape
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
