//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{Rule, RuleResult};

/// Passwords with this many characters or fewer are too short.
const MAX_SHORT_LENGTH: usize = 8;

/// Checks that the password is longer than eight characters.
///
/// Length is counted in characters, not bytes.
pub fn length_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().count() <= MAX_SHORT_LENGTH {
        return Some(Rule::Length);
    }
    None
}
