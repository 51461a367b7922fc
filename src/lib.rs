//! Password list audit library
//!
//! Checks passwords against four strength rules and against the Pwned
//! Passwords corpus using the k-anonymity range API: only the first five
//! hex characters of each password's SHA-1 digest leave the process.
//!
//! # Environment Variables
//!
//! The `pwd-audit` binary reads `PWD_AUDIT_INPUT`, `PWD_AUDIT_OUTPUT`,
//! `PWD_AUDIT_TIMEOUT`, `PWD_AUDIT_BASE_URL`, `PWD_AUDIT_RETRIES` and
//! `PWD_AUDIT_LOG_FORMAT` as fallbacks for its flags.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{Auditor, BreachChecker, HttpRangeSource, TracingReporter};
//! use pwd_audit::breach::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
//!
//! # async fn run() -> Result<(), pwd_audit::AuditError> {
//! let source = HttpRangeSource::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)?;
//! let mut auditor = Auditor::new(BreachChecker::new(source), TracingReporter);
//!
//! let results = auditor.run_file("passwords.txt".as_ref()).await?;
//! for result in &results {
//!     println!("{:?} {:?}", result.violations, result.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod breach;
pub mod config;
mod digest;
mod error;
mod input;
mod pipeline;
mod reporter;
mod rules;
mod validator;

// Public API
pub use breach::{BreachChecker, HttpRangeSource, RangeResponse, RangeSource, is_breached};
pub use config::{Config, LogFormat};
pub use digest::Digest;
pub use error::AuditError;
pub use input::{read_passwords, write_report};
pub use pipeline::{AuditResult, AuditSummary, Auditor, BreachStatus};
pub use reporter::{Reporter, TracingReporter};
pub use rules::Rule;
pub use validator::StrengthValidator;
