//! Password strength estimation and breach lookup
//!
//! This library pairs a local, pool-size based strength analyzer with a
//! k-anonymity lookup against a Pwned Passwords compatible range service.
//!
//! # Features
//!
//! - `async` (default): HTTP range client, debouncer and breach watcher
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! See [`Settings::from_env`]:
//! `PWD_RANGE_ENDPOINT`, `PWD_RANGE_TIMEOUT_MS`, `PWD_DEBOUNCE_MS`,
//! `PWD_DENYLIST_PATH`.
//!
//! # Example
//!
//! ```rust
//! use pwd_exposure::analyze;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let analysis = analyze(&password);
//! println!("{} ({})", analysis.strength_label(), analysis.crack_time_label());
//! ```
//!
//! With the `async` feature, `HibpClient` documents the remote breach
//! check.

// Internal modules
mod breach;
mod charset;
mod config;
mod crack_time;
mod denylist;
mod evaluator;
mod sections;
mod strength;
mod suggestion;

#[cfg(feature = "async")]
mod debounce;
#[cfg(feature = "async")]
mod hibp;
#[cfg(feature = "async")]
mod watcher;

// Public API
pub use breach::{
    check_breach, parse_range_response, BreachChecker, BreachError, BreachVerdict, HashRange,
    RangeSource, PREFIX_LEN, SUFFIX_LEN,
};
pub use charset::{entropy_bits, CharClass, CharClasses, SYMBOLS};
pub use config::{ConfigError, Settings};
pub use crack_time::{assumed_guess_rate, CrackTime, GUESSES_PER_SECOND};
pub use denylist::{Denylist, DenylistError, COMMON_PASSWORDS};
pub use evaluator::{analyze, Analysis, Analyzer};
pub use strength::{Strength, MIN_SCORED_LENGTH};
pub use suggestion::Suggestion;

#[cfg(feature = "async")]
pub use debounce::{debounce, Debouncer};
#[cfg(feature = "async")]
pub use hibp::HibpClient;
#[cfg(feature = "async")]
pub use watcher::{BreachUpdate, BreachWatcher};
