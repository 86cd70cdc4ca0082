//! Identifier shape classification.
//!
//! Distinguishes inputs that are already canonical backend ids from inputs
//! that need a lookup, and email-shaped inputs that select the email search
//! strategy for users.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 8-4-4-4-12 hex grouping, case-insensitive.
    static ref CANONICAL_ID: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .expect("canonical id pattern is valid");
    static ref EMAIL: Regex = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid");
}

/// Whether `value` is already a canonical backend identifier.
pub fn is_canonical_id(value: &str) -> bool {
    CANONICAL_ID.is_match(value)
}

/// Whether `value` looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
