//! Brute-force crack time estimation and formatting.

use std::fmt;

/// Assumed attacker throughput, in guesses per second.
pub const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

/// Returns the attacker throughput the estimates assume.
pub fn assumed_guess_rate() -> f64 {
    GUESSES_PER_SECOND
}

/// Estimated time to exhaust the search space, in the coarsest unit that
/// fits. Unit counts are always rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrackTime {
    /// Nothing to estimate yet.
    Placeholder,
    /// Found on the common-password list.
    KnownPassword,
    Instant,
    UnderASecond,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Years(u64),
    Centuries(u64),
    OverAMillennium,
}

impl CrackTime {
    /// Estimate for a password with the given entropy.
    pub fn from_entropy(entropy_bits: f64) -> Self {
        let combinations = entropy_bits.exp2();
        Self::from_seconds(combinations / GUESSES_PER_SECOND)
    }

    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 0.01 {
            return CrackTime::Instant;
        }
        if seconds < 1.0 {
            return CrackTime::UnderASecond;
        }
        if seconds < 60.0 {
            return CrackTime::Seconds(ceil(seconds));
        }

        let minutes = seconds / 60.0;
        if minutes < 60.0 {
            return CrackTime::Minutes(ceil(minutes));
        }

        let hours = minutes / 60.0;
        if hours < 24.0 {
            return CrackTime::Hours(ceil(hours));
        }

        let days = hours / 24.0;
        if days < 30.0 {
            return CrackTime::Days(ceil(days));
        }

        let months = days / 30.0;
        if months < 12.0 {
            return CrackTime::Months(ceil(months));
        }

        let years = days / 365.25;
        if years < 100.0 {
            return CrackTime::Years(ceil(years));
        }

        let centuries = years / 100.0;
        if centuries < 10.0 {
            return CrackTime::Centuries(ceil(centuries));
        }

        CrackTime::OverAMillennium
    }
}

// Callers only pass values below the unit's upper bound, so the cast
// cannot truncate.
fn ceil(value: f64) -> u64 {
    value.ceil() as u64
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Placeholder => f.write_str("-"),
            CrackTime::KnownPassword => f.write_str("Okamžite (známe heslo)"),
            CrackTime::Instant => f.write_str("Okamžite"),
            CrackTime::UnderASecond => f.write_str("Menej ako sekunda"),
            CrackTime::Seconds(n) => write!(f, "{} sekúnd", n),
            CrackTime::Minutes(n) => write!(f, "{} minút", n),
            CrackTime::Hours(n) => write!(f, "{} hodín", n),
            CrackTime::Days(n) => write!(f, "{} dní", n),
            CrackTime::Months(n) => write!(f, "{} mesiacov", n),
            CrackTime::Years(n) => write!(f, "{} rokov", n),
            CrackTime::Centuries(n) => write!(f, "{} storočí", n),
            CrackTime::OverAMillennium => f.write_str("Viac ako tisícročie"),
        }
    }
}
