//! Finding reporters
//!
//! The pipeline never logs findings directly; it hands them to a
//! [`Reporter`] it owns. [`TracingReporter`] turns them into tracing events.

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuditError;
use crate::pipeline::AuditSummary;
use crate::rules::Rule;

/// Receives audit findings as they are produced.
pub trait Reporter {
    /// The password violates one or more strength rules, in definition order.
    fn weak_password(&mut self, password: &SecretString, violations: &[Rule]);

    /// The password was found in the breach corpus.
    fn breached(&mut self, password: &SecretString);

    /// The breach check for this password failed and was skipped.
    fn check_failed(&mut self, password: &SecretString, error: &AuditError);

    /// Called once after the last password.
    fn finished(&mut self, _summary: &AuditSummary) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn weak_password(&mut self, password: &SecretString, violations: &[Rule]) {
        (**self).weak_password(password, violations)
    }

    fn breached(&mut self, password: &SecretString) {
        (**self).breached(password)
    }

    fn check_failed(&mut self, password: &SecretString, error: &AuditError) {
        (**self).check_failed(password, error)
    }

    fn finished(&mut self, summary: &AuditSummary) {
        (**self).finished(summary)
    }
}

/// Reports findings as tracing events.
///
/// Breached passwords are logged in plaintext: this is a local audit tool
/// and the operator needs to know which entry to rotate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn weak_password(&mut self, password: &SecretString, violations: &[Rule]) {
        let rules = violations.iter().map(|r| r.id()).collect::<Vec<_>>().join(", ");
        let reasons = violations.iter().map(|r| r.reason()).collect::<Vec<_>>().join("; ");
        tracing::warn!(
            password = password.expose_secret(),
            rules = %rules,
            reasons = %reasons,
            "Password violates strength rules"
        );
    }

    fn breached(&mut self, password: &SecretString) {
        // tracing has no CRITICAL level
        tracing::error!(
            severity = "critical",
            password = password.expose_secret(),
            "Password found in breach corpus"
        );
    }

    fn check_failed(&mut self, password: &SecretString, error: &AuditError) {
        tracing::error!(
            password = password.expose_secret(),
            error = %error,
            "Breach check failed, skipping password"
        );
    }

    fn finished(&mut self, summary: &AuditSummary) {
        if summary.total == 0 {
            return;
        }
        tracing::info!(
            total = summary.total,
            weak = summary.weak,
            breached = summary.breached,
            unchecked = summary.unchecked,
            "Audit finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce(&mut TracingReporter)) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || f(&mut TracingReporter));
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_weak_password_is_warning_with_rules_in_order() {
        let out = capture(|r| {
            r.weak_password(&secret("abc"), &[Rule::Length, Rule::HasDigit]);
        });
        assert!(out.contains("WARN"));
        assert!(out.contains("abc"));
        assert!(out.contains("length, has_digit"));
    }

    #[test]
    fn test_breached_is_critical() {
        let out = capture(|r| r.breached(&secret("hunter2")));
        assert!(out.contains("ERROR"));
        assert!(out.contains("critical"));
        assert!(out.contains("hunter2"));
    }

    #[test]
    fn test_empty_run_is_silent() {
        let out = capture(|r| r.finished(&AuditSummary::default()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_summary_logged_at_info() {
        let summary = AuditSummary {
            total: 3,
            weak: 1,
            breached: 1,
            unchecked: 0,
        };
        let out = capture(|r| r.finished(&summary));
        assert!(out.contains("INFO"));
        assert!(out.contains("total=3"));
    }
}
