//! Password strength rules
//!
//! Each rule checks one property of the password and is evaluated
//! independently of the others.

mod case_mix;
mod digit;
mod length;
mod special;

use std::fmt;

use serde::Serialize;

pub use case_mix::mixed_case_rule;
pub use digit::digit_rule;
pub use length::length_rule;
pub use special::special_char_rule;

/// Result type for rule functions.
/// - `Some(rule)` - The rule is violated
/// - `None` - The rule passed
pub type RuleResult = Option<Rule>;

/// Identifier of a strength rule.
///
/// Variants are declared in rule-definition order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Length,
    HasDigit,
    HasSpecial,
    HasMixedCase,
}

impl Rule {
    /// All rules in definition order.
    pub const ALL: [Rule; 4] = [
        Rule::Length,
        Rule::HasDigit,
        Rule::HasSpecial,
        Rule::HasMixedCase,
    ];

    /// Stable identifier used in logs and reports.
    pub fn id(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::HasDigit => "has_digit",
            Rule::HasSpecial => "has_special",
            Rule::HasMixedCase => "has_mixed_case",
        }
    }

    /// Human-readable reason shown next to the identifier.
    pub fn reason(self) -> &'static str {
        match self {
            Rule::Length => "password is too short",
            Rule::HasDigit => "password contains no digit",
            Rule::HasSpecial => "password contains no special character",
            Rule::HasMixedCase => "password lacks lowercase or uppercase letters",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
