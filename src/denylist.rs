//! Common-password denylist.
//!
//! A small set of globally common passwords is embedded in the crate. A
//! [`Denylist`] can additionally be extended from a newline-delimited file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Passwords rejected without further analysis.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "qwerty", "12345", "12345678", "heslo", "admin", "123",
    "heslo123", "test", "test123", "p123456", "heslicko",
];

static BUILTIN: LazyLock<Denylist> = LazyLock::new(|| Denylist {
    entries: Arc::new(COMMON_PASSWORDS.iter().map(|p| p.to_lowercase()).collect()),
});

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Immutable, case-insensitive set of known-common passwords.
///
/// Cloning is cheap; entries are shared.
#[derive(Debug, Clone)]
pub struct Denylist {
    entries: Arc<HashSet<String>>,
}

impl Denylist {
    /// The embedded list.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Builds a list from arbitrary entries. Entries are trimmed and
    /// lowercased; blank ones are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: Arc::new(
                entries
                    .into_iter()
                    .map(|e| e.as_ref().trim().to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect(),
            ),
        }
    }

    /// Loads one password per line from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let list = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", list.len(), path);

        Ok(list)
    }

    /// The embedded list plus every entry of the file at `path`.
    pub fn builtin_with_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let extra = Self::from_path(path)?;
        Ok(Self::builtin().merged(&extra))
    }

    /// Union of both lists.
    pub fn merged(&self, other: &Denylist) -> Self {
        Self {
            entries: Arc::new(self.entries.union(&other.entries).cloned().collect()),
        }
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}
