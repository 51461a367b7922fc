//! Mixed case rule - checks for both uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};
use super::{Rule, RuleResult};

/// Checks that the password has at least one uppercase and one lowercase letter.
pub fn mixed_case_rule(password: &SecretString) -> RuleResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());

    if !(has_upper && has_lower) {
        return Some(Rule::HasMixedCase);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert_eq!(mixed_case_rule(&pwd), Some(Rule::HasMixedCase));
    }

    #[test]
    fn test_mixed_case_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert_eq!(mixed_case_rule(&pwd), Some(Rule::HasMixedCase));
    }

    #[test]
    fn test_mixed_case_present() {
        let pwd = SecretString::new("Aa".to_string().into());
        assert_eq!(mixed_case_rule(&pwd), None);
    }

    #[test]
    fn test_mixed_case_unicode_letters() {
        let pwd = SecretString::new("Ζz".to_string().into());
        assert_eq!(mixed_case_rule(&pwd), None);
    }
}
