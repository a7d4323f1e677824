//! k-anonymity breach lookup.
//!
//! The password is hashed locally with SHA-1. Only the first five hex
//! characters of the digest leave the process; the service answers with
//! every known suffix sharing that prefix and the match happens here.

use std::future::Future;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::evaluator::Analysis;

/// Hex characters of the digest disclosed to the range service.
pub const PREFIX_LEN: usize = 5;

/// Hex characters kept local.
pub const SUFFIX_LEN: usize = 35;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreachError {
    #[error("range service returned {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("range request failed: {0}")]
    Transport(String),
    #[error("malformed range response at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl BreachError {
    /// Generic notice suitable for end users. Diagnostic detail stays in
    /// the `Display` output.
    pub fn user_notice(&self) -> &'static str {
        match self {
            BreachError::Transport(_) => "Problém s pripojením k službe.",
            BreachError::Status { .. } | BreachError::Malformed { .. } => {
                "Služba dočasne nedostupná."
            }
        }
    }
}

/// SHA-1 digest of a password split into the disclosed prefix and the
/// private suffix. Both halves are uppercase hex.
#[derive(Clone, PartialEq, Eq)]
pub struct HashRange {
    prefix: String,
    suffix: String,
}

impl HashRange {
    pub fn of(password: &SecretString) -> Self {
        let digest = format!("{:X}", Sha1::digest(password.expose_secret().as_bytes()));
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

// The suffix identifies the password; keep it out of logs.
impl std::fmt::Debug for HashRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashRange")
            .field("prefix", &self.prefix)
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}

/// Remote lookup-by-prefix endpoint.
///
/// Implementations return the raw response body: newline-separated
/// `SUFFIX:COUNT` records.
pub trait RangeSource {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

impl<S: RangeSource + Sync> RangeSource for &S {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send {
        (**self).fetch_range(prefix)
    }
}

impl<S: RangeSource + Send + Sync> RangeSource for std::sync::Arc<S> {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send {
        (**self).fetch_range(prefix)
    }
}

/// Scans a range response for `suffix` and returns its count, or 0 when
/// absent. Every non-blank line must be a `HEX:COUNT` record.
pub fn parse_range_response(body: &str, suffix: &str) -> Result<u64, BreachError> {
    let mut found = None;

    for (index, raw) in body.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        let Some((candidate, count)) = line.split_once(':') else {
            return Err(BreachError::Malformed {
                line: line_no,
                reason: "missing ':' separator".to_string(),
            });
        };
        if candidate.is_empty() || !candidate.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BreachError::Malformed {
                line: line_no,
                reason: "suffix is not hexadecimal".to_string(),
            });
        }
        let count = count.trim().parse::<u64>().map_err(|e| BreachError::Malformed {
            line: line_no,
            reason: format!("invalid count: {}", e),
        })?;

        if found.is_none() && candidate.eq_ignore_ascii_case(suffix) {
            found = Some(count);
        }
    }

    Ok(found.unwrap_or(0))
}

/// Number of times `password` appears in the breach corpus behind `source`.
///
/// The empty password resolves to 0 without contacting the source.
pub async fn check_breach<S: RangeSource>(
    source: &S,
    password: &SecretString,
) -> Result<u64, BreachError> {
    if password.expose_secret().is_empty() {
        return Ok(0);
    }

    let range = HashRange::of(password);

    #[cfg(feature = "tracing")]
    tracing::debug!("querying range {}", range.prefix());

    let body = source.fetch_range(range.prefix()).await.inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!("range query {} failed: {}", range.prefix(), _e);
    })?;

    let count = parse_range_response(&body, range.suffix())?;

    #[cfg(feature = "tracing")]
    tracing::debug!("range {} scanned, exposed={}", range.prefix(), count > 0);

    Ok(count)
}

/// Outcome of screening a password before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachVerdict {
    /// Nothing was entered.
    Empty,
    /// Already on the local denylist; no lookup performed.
    KnownCommon,
    /// Checked and not found.
    Clean,
    /// Checked and found this many times.
    Exposed(u64),
}

impl BreachVerdict {
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            BreachVerdict::Clean
        } else {
            BreachVerdict::Exposed(count)
        }
    }

    /// True when a network lookup produced this verdict.
    pub fn was_checked(&self) -> bool {
        matches!(self, BreachVerdict::Clean | BreachVerdict::Exposed(_))
    }
}

/// Breach checker bound to one range source.
#[derive(Debug, Clone)]
pub struct BreachChecker<S> {
    source: S,
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// See [`check_breach`].
    pub async fn check(&self, password: &SecretString) -> Result<u64, BreachError> {
        check_breach(&self.source, password).await
    }

    /// Checks `password` unless it is empty or `analysis` already marked
    /// it as a known-common password.
    pub async fn screen(
        &self,
        password: &SecretString,
        analysis: &Analysis,
    ) -> Result<BreachVerdict, BreachError> {
        if password.expose_secret().is_empty() {
            return Ok(BreachVerdict::Empty);
        }
        if analysis.is_known_common() {
            #[cfg(feature = "tracing")]
            tracing::debug!("skipping range query for known-common password");
            return Ok(BreachVerdict::KnownCommon);
        }
        self.check(password).await.map(BreachVerdict::from_count)
    }
}
