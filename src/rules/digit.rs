//! Digit rule - checks that the password contains a decimal digit.

use secrecy::{ExposeSecret, SecretString};
use super::{Rule, RuleResult};

/// Checks that at least one character is an ASCII decimal digit.
pub fn digit_rule(password: &SecretString) -> RuleResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some(Rule::HasDigit);
    }
    None
}
