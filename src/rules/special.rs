//! Special character rule.

use secrecy::{ExposeSecret, SecretString};
use super::{Rule, RuleResult};

/// Checks that at least one character is ASCII punctuation.
///
/// Whitespace and non-ASCII symbols do not count.
pub fn special_char_rule(password: &SecretString) -> RuleResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_punctuation()) {
        return Some(Rule::HasSpecial);
    }
    None
}
