//! Password strength validator - runs every rule and collects violations.

use secrecy::SecretString;

use crate::rules::{Rule, RuleResult, digit_rule, length_rule, mixed_case_rule, special_char_rule};

type RuleFn = fn(&SecretString) -> RuleResult;

/// Evaluates passwords against the fixed set of strength rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthValidator;

impl StrengthValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a password and returns the violated rules.
    ///
    /// Every rule is evaluated; the result is in rule-definition order
    /// and is empty when the password passes all rules.
    pub fn validate(&self, password: &SecretString) -> Vec<Rule> {
        // Order here is the reporting order
        let rules: [(&str, RuleFn); 4] = [
            ("length", length_rule),
            ("digit", digit_rule),
            ("special", special_char_rule),
            ("case", mixed_case_rule),
        ];

        let mut violations = Vec::new();
        for (rule_name, rule_fn) in rules {
            match rule_fn(password) {
                Some(violated) => {
                    tracing::trace!(rule = rule_name, "rule violated");
                    violations.push(violated);
                }
                None => {
                    // Rule passed, continue
                }
            }
        }

        violations
    }
}
