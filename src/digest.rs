//! SHA-1 password digest used for range queries.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest as _, Sha1};

/// Number of hex characters sent to the range service.
pub const PREFIX_LEN: usize = 5;

/// SHA-1 digest of a password, as 40 lowercase hex characters.
///
/// Only [`Digest::prefix`] is meant to leave the process. `Debug` prints
/// the prefix alone so the full digest does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    /// Hashes the UTF-8 bytes of `password`.
    pub fn of(password: &SecretString) -> Self {
        let hash = Sha1::digest(password.expose_secret().as_bytes());
        Self(hex::encode(hash))
    }

    /// The full lowercase hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First five hex characters, uppercased, as sent to the range service.
    pub fn prefix(&self) -> String {
        self.0[..PREFIX_LEN].to_ascii_uppercase()
    }

    /// Remaining 35 hex characters, uppercased, as listed in range responses.
    pub fn suffix(&self) -> String {
        self.0[PREFIX_LEN..].to_ascii_uppercase()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}…)", self.prefix())
    }
}
