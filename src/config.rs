//! Command line configuration.
//!
//! Every option can also be set through a `PWD_AUDIT_*` environment
//! variable; a flag on the command line wins over the environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::breach::{DEFAULT_BASE_URL, DEFAULT_RETRIES};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pwd-audit",
    version,
    about = "Check a password list against strength rules and the Pwned Passwords range API"
)]
pub struct Config {
    /// Password list, one password per line.
    #[arg(long, env = "PWD_AUDIT_INPUT", default_value = "passwords.txt")]
    pub input_file: PathBuf,

    /// Write a JSON report of all results to this file.
    #[arg(long, env = "PWD_AUDIT_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "PWD_AUDIT_TIMEOUT", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Range endpoint; the 5 character prefix is appended as a path segment.
    #[arg(long, env = "PWD_AUDIT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Extra attempts for failed range requests.
    #[arg(long, env = "PWD_AUDIT_RETRIES", default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    #[arg(long, env = "PWD_AUDIT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
