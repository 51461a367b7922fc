//! Audit pipeline - strength rules and breach check for each password in turn.

use std::path::Path;

use secrecy::SecretString;
use serde::Serialize;

use crate::breach::{BreachChecker, RangeSource};
use crate::error::AuditError;
use crate::input::read_passwords;
use crate::reporter::Reporter;
use crate::rules::Rule;
use crate::validator::StrengthValidator;

/// Outcome of the breach check for one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachStatus {
    Breached,
    Clean,
    /// The range query failed; the password was not checked.
    Unknown { reason: String },
}

/// Findings for one password.
#[derive(Debug)]
pub struct AuditResult {
    pub password: SecretString,
    pub violations: Vec<Rule>,
    pub status: BreachStatus,
}

impl AuditResult {
    pub fn is_weak(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn is_breached(&self) -> bool {
        self.status == BreachStatus::Breached
    }
}

/// Counts over a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub total: usize,
    pub weak: usize,
    pub breached: usize,
    pub unchecked: usize,
}

impl AuditSummary {
    pub fn from_results(results: &[AuditResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            if result.is_weak() {
                summary.weak += 1;
            }
            match result.status {
                BreachStatus::Breached => summary.breached += 1,
                BreachStatus::Unknown { .. } => summary.unchecked += 1,
                BreachStatus::Clean => {}
            }
        }
        summary
    }
}

/// Runs the strength rules and breach check over a list of passwords.
///
/// Passwords are processed one at a time, in input order. Findings go to
/// the owned [`Reporter`].
pub struct Auditor<S, R> {
    validator: StrengthValidator,
    checker: BreachChecker<S>,
    reporter: R,
}

impl<S: RangeSource, R: Reporter> Auditor<S, R> {
    pub fn new(checker: BreachChecker<S>, reporter: R) -> Self {
        Self {
            validator: StrengthValidator::new(),
            checker,
            reporter,
        }
    }

    /// Audits a single password.
    ///
    /// Network and upstream failures are reported and recorded as
    /// [`BreachStatus::Unknown`]; any other error is returned.
    pub async fn audit_password(&mut self, password: SecretString) -> Result<AuditResult, AuditError> {
        let violations = self.validator.validate(&password);
        if !violations.is_empty() {
            self.reporter.weak_password(&password, &violations);
        }

        let status = match self.checker.check(&password).await {
            Ok(true) => {
                self.reporter.breached(&password);
                BreachStatus::Breached
            }
            Ok(false) => BreachStatus::Clean,
            Err(e) if e.is_recoverable() => {
                self.reporter.check_failed(&password, &e);
                BreachStatus::Unknown {
                    reason: e.to_string(),
                }
            }
            Err(e) => return Err(e),
        };

        Ok(AuditResult {
            password,
            violations,
            status,
        })
    }

    /// Audits every password in order and returns one result per password.
    pub async fn run(&mut self, passwords: Vec<SecretString>) -> Result<Vec<AuditResult>, AuditError> {
        let mut results = Vec::with_capacity(passwords.len());
        for password in passwords {
            results.push(self.audit_password(password).await?);
        }

        self.reporter.finished(&AuditSummary::from_results(&results));
        Ok(results)
    }

    /// Reads the password list at `path` and audits it.
    pub async fn run_file(&mut self, path: &Path) -> Result<Vec<AuditResult>, AuditError> {
        let passwords = read_passwords(path)?;
        self.run(passwords).await
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
