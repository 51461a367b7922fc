//! Breach checking via k-anonymity range queries
//!
//! Only the first five hex characters of a password's SHA-1 digest are sent
//! to the range service. The service answers with every known suffix sharing
//! that prefix, and the exact match is done locally by [`is_breached`].

use std::time::Duration;

use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, warn};

use crate::digest::Digest;
use crate::error::AuditError;

/// Default Pwned Passwords range endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of extra attempts after a failed range request.
pub const DEFAULT_RETRIES: u32 = 2;

const USER_AGENT: &str = concat!("pwd-audit/", env!("CARGO_PKG_VERSION"));

/// Lines of a range response for one digest prefix.
///
/// Each line is expected to look like `SUFFIX:COUNT`; lines are kept as-is
/// and only parsed while matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeResponse {
    lines: Vec<String>,
}

impl RangeResponse {
    /// Splits a response body into lines. Handles both `\n` and `\r\n`.
    pub fn from_body(body: &str) -> Self {
        Self {
            lines: body.lines().map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RangeResponse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns `true` if some entry's suffix equals the digest's last 35
/// characters, compared case-insensitively.
///
/// Lines without a `:` separator are skipped. Scanning stops at the first
/// match.
pub fn is_breached(digest: &Digest, response: &RangeResponse) -> bool {
    let suffix = digest.suffix();

    for line in response.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((entry_suffix, _count)) = line.split_once(':') else {
            debug!(prefix = %digest.prefix(), "skipping malformed range entry");
            continue;
        };
        if entry_suffix.trim().eq_ignore_ascii_case(&suffix) {
            return true;
        }
    }
    false
}

/// Source of range responses keyed by a five character digest prefix.
#[async_trait]
pub trait RangeSource: Send + Sync {
    /// Fetches every known suffix for `prefix` (uppercase hex).
    async fn fetch_range(&self, prefix: &str) -> Result<RangeResponse, AuditError>;
}

/// Range source backed by the HTTP range API.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    base_url: String,
    retries: u32,
}

impl HttpRangeSource {
    /// Creates a source for `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuditError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout.min(DEFAULT_TIMEOUT))
            .build()
            .map_err(AuditError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retries: DEFAULT_RETRIES,
        })
    }

    /// Sets the number of extra attempts for network and upstream failures.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.base_url, prefix)
    }

    /// One GET; the body is read to the end before returning so the
    /// connection goes back to the pool on every path.
    async fn fetch_once(&self, url: &str) -> Result<String, AuditError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: &str) -> Result<RangeResponse, AuditError> {
        let url = self.range_url(prefix);

        let mut attempts: u32 = 0;
        loop {
            match self.fetch_once(&url).await {
                Ok(body) => {
                    let response = RangeResponse::from_body(&body);
                    debug!(prefix, entries = response.len(), "range fetched");
                    return Ok(response);
                }
                Err(e) if e.is_recoverable() && attempts < self.retries => {
                    attempts += 1;
                    warn!(prefix, attempt = attempts, error = %e, "range request failed, retrying");
                    tokio::time::sleep(Duration::from_millis(100 * u64::from(attempts))).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Checks passwords against a [`RangeSource`].
#[derive(Debug, Clone)]
pub struct BreachChecker<S> {
    source: S,
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Hashes `password` and checks whether its digest is in the corpus.
    pub async fn check(&self, password: &SecretString) -> Result<bool, AuditError> {
        self.check_digest(&Digest::of(password)).await
    }

    /// Queries the range for the digest's prefix and matches locally.
    pub async fn check_digest(&self, digest: &Digest) -> Result<bool, AuditError> {
        let response = self.source.fetch_range(&digest.prefix()).await?;
        Ok(is_breached(digest, &response))
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn digest(pwd: &str) -> Digest {
        Digest::of(&SecretString::new(pwd.to_string().into()))
    }

    /// Serves a fixed body and records requested prefixes.
    struct FixedSource {
        body: String,
        requested: Mutex<Vec<String>>,
    }

    impl FixedSource {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RangeSource for FixedSource {
        async fn fetch_range(&self, prefix: &str) -> Result<RangeResponse, AuditError> {
            self.requested.lock().unwrap().push(prefix.to_string());
            Ok(RangeResponse::from_body(&self.body))
        }
    }

    #[test]
    fn test_is_breached_match() {
        let response: RangeResponse = [
            "0018A45C4D1DEF81644B54AB7F969B88D65:1",
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:3",
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF:2",
        ]
        .into_iter()
        .collect();
        assert!(is_breached(&digest("password"), &response));
    }

    #[test]
    fn test_is_breached_no_match() {
        let response: RangeResponse = [
            "0018A45C4D1DEF81644B54AB7F969B88D65:1",
            "1E4C9B93F3F0682250B6CF8331B7EE68FD9:3",
        ]
        .into_iter()
        .collect();
        assert!(!is_breached(&digest("password"), &response));
    }

    #[test]
    fn test_is_breached_case_insensitive() {
        let response: RangeResponse = ["1e4c9b93f3f0682250b6cf8331b7ee68fd8:3"].into_iter().collect();
        assert!(is_breached(&digest("password"), &response));
    }

    #[test]
    fn test_is_breached_skips_malformed_lines() {
        let response = RangeResponse::from_body(
            "GARBAGE WITHOUT SEPARATOR\r\n\r\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:3\r\n",
        );
        assert!(is_breached(&digest("password"), &response));
    }

    #[test]
    fn test_is_breached_full_digest_is_not_a_suffix() {
        let response: RangeResponse = ["5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8:3"].into_iter().collect();
        assert!(!is_breached(&digest("password"), &response));
    }

    #[test]
    fn test_is_breached_empty_response() {
        assert!(!is_breached(&digest("password"), &RangeResponse::default()));
    }

    #[test]
    fn test_range_response_from_body() {
        let response = RangeResponse::from_body("AAA:1\r\nBBB:2\n");
        assert_eq!(response.lines().collect::<Vec<_>>(), vec!["AAA:1", "BBB:2"]);
        assert_eq!(response.len(), 2);
    }

    #[tokio::test]
    async fn test_checker_sends_only_uppercase_prefix() {
        let checker = BreachChecker::new(FixedSource::new("1E4C9B93F3F0682250B6CF8331B7EE68FD8:3"));
        let pwd = SecretString::new("password".to_string().into());

        assert!(checker.check(&pwd).await.unwrap());
        assert_eq!(*checker.source().requested.lock().unwrap(), vec!["5BAA6".to_string()]);
    }

    #[tokio::test]
    async fn test_checker_not_breached() {
        let checker = BreachChecker::new(FixedSource::new("0018A45C4D1DEF81644B54AB7F969B88D65:1"));
        let pwd = SecretString::new("password".to_string().into());
        assert!(!checker.check(&pwd).await.unwrap());
    }

    #[test]
    fn test_http_source_trims_base_url() {
        let source = HttpRangeSource::new("http://localhost:1/range/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(source.base_url(), "http://localhost:1/range");
        assert_eq!(source.range_url("5BAA6"), "http://localhost:1/range/5BAA6");
    }
}
