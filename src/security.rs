/*

   security.rs

   This file is responsible for the general maintenance of security of the application.
   Put functions that are related to validating user input here.

   Cryptographic functions should be put in crypto.rs.

*/

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Loose sanity check on email shape, not RFC 5322 validation.
pub fn validate_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

pub fn validate_password(password: &str) -> bool {
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&password.len())
}

pub fn validate_display_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.len() <= 64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("member@example.com"));
        assert!(!validate_email("member@example"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("two@@example.com"));
    }

    #[test]
    fn test_password_bounds() {
        assert!(!validate_password("short"));
        assert!(validate_password("password123"));
        assert!(!validate_password(&"x".repeat(129)));
    }
}
