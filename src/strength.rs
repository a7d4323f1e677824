//! Strength tiers and their presentation tags.

/// Passwords shorter than this never score above zero.
pub const MIN_SCORED_LENGTH: usize = 4;

/// Entropy cutoffs (bits) separating score 0..4.
const TIER_CUTOFFS: [f64; 4] = [28.0, 36.0, 60.0, 128.0];

/// Strength classification of a password.
///
/// The five entropy tiers map to scores 0 through 4. `Empty`, `KnownCommon`
/// and `TooShort` are overrides and always score 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Empty,
    KnownCommon,
    TooShort,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Tiers the entropy, then applies the short-password override.
    pub fn classify(entropy_bits: f64, length: usize) -> Self {
        let tier = match TIER_CUTOFFS.iter().position(|cutoff| entropy_bits < *cutoff) {
            Some(0) => Strength::VeryWeak,
            Some(1) => Strength::Weak,
            Some(2) => Strength::Medium,
            Some(3) => Strength::Strong,
            _ => Strength::VeryStrong,
        };

        if length < MIN_SCORED_LENGTH && tier.score() > 0 {
            return Strength::TooShort;
        }
        tier
    }

    /// Ordinal score in `0..=4`.
    pub const fn score(self) -> u8 {
        match self {
            Strength::Empty
            | Strength::KnownCommon
            | Strength::TooShort
            | Strength::VeryWeak => 0,
            Strength::Weak => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
            Strength::VeryStrong => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Strength::Empty => "Zadajte heslo",
            Strength::KnownCommon => "Extrémne nebezpečné!",
            Strength::TooShort => "Príliš krátke",
            Strength::VeryWeak => "Veľmi slabé",
            Strength::Weak => "Slabé",
            Strength::Medium => "Stredné",
            Strength::Strong => "Silné",
            Strength::VeryStrong => "Veľmi silné",
        }
    }

    pub const fn color_tag(self) -> &'static str {
        match self {
            Strength::Empty => "bg-slate-300",
            Strength::KnownCommon => "bg-red-700",
            Strength::TooShort | Strength::VeryWeak => "bg-red-500",
            Strength::Weak => "bg-orange-500",
            Strength::Medium => "bg-yellow-500",
            Strength::Strong => "bg-green-500",
            Strength::VeryStrong => "bg-emerald-600",
        }
    }

    pub const fn fill_tag(self) -> &'static str {
        match self {
            Strength::Empty => "w-0",
            Strength::KnownCommon => "w-[5%]",
            Strength::TooShort | Strength::VeryWeak => "w-1/5",
            Strength::Weak => "w-2/5",
            Strength::Medium => "w-3/5",
            Strength::Strong => "w-4/5",
            Strength::VeryStrong => "w-full",
        }
    }
}
