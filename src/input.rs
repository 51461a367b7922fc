//! Password list input and JSON report output.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::error::AuditError;
use crate::pipeline::{AuditResult, BreachStatus};
use crate::rules::Rule;

/// Reads one password per line from `path`.
///
/// Lines are trimmed and blank lines skipped. A missing or unreadable file
/// is reported as [`AuditError::InputNotFound`].
pub fn read_passwords<P: AsRef<Path>>(path: P) -> Result<Vec<SecretString>, AuditError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| {
        tracing::error!("Password list not readable: {}", path.display());
        AuditError::InputNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let passwords: Vec<SecretString> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| SecretString::new(l.to_string().into()))
        .collect();

    tracing::debug!("Loaded {} passwords from {:?}", passwords.len(), path);
    Ok(passwords)
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    password: &'a str,
    violations: &'a [Rule],
    status: &'a BreachStatus,
}

/// Writes the results to `path` as a JSON array.
///
/// The report contains plaintext passwords; it is written only when the
/// operator asks for it.
pub fn write_report<P: AsRef<Path>>(path: P, results: &[AuditResult]) -> Result<(), AuditError> {
    let path = path.as_ref();

    let entries: Vec<ReportEntry<'_>> = results
        .iter()
        .map(|r| ReportEntry {
            password: r.password.expose_secret(),
            violations: &r.violations,
            status: &r.status,
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)?;

    std::fs::write(path, json).map_err(|source| AuditError::Report {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Report written to {:?}", path);
    Ok(())
}
