//! Character classes and the pool-size entropy model.

/// Symbols counted towards the symbol class.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~`";

/// The four disjoint classes a password character can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Alphabet size an attacker assumes once the class is present.
    pub const fn pool_size(self) -> u32 {
        match self {
            CharClass::Lowercase | CharClass::Uppercase => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => SYMBOLS.len() as u32,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => SYMBOLS.contains(c),
        }
    }

    /// Returns the class of `c`, or `None` for whitespace, non-ASCII and
    /// anything else outside the four classes.
    pub fn of(c: char) -> Option<CharClass> {
        CharClass::ALL.into_iter().find(|class| class.contains(c))
    }

    const fn bit(self) -> u8 {
        match self {
            CharClass::Lowercase => 0b0001,
            CharClass::Uppercase => 0b0010,
            CharClass::Digit => 0b0100,
            CharClass::Symbol => 0b1000,
        }
    }
}

/// Set of classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses(u8);

impl CharClasses {
    /// Scans `password` once and records every class seen.
    pub fn scan(password: &str) -> Self {
        let mut set = CharClasses::default();
        for class in password.chars().filter_map(CharClass::of) {
            set.0 |= class.bit();
        }
        set
    }

    pub fn has(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn missing(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| !self.has(*c))
    }

    /// Sum of the full class sizes for each class present.
    pub fn pool_size(self) -> u32 {
        CharClass::ALL
            .into_iter()
            .filter(|c| self.has(*c))
            .map(CharClass::pool_size)
            .sum()
    }
}

/// Estimated entropy in bits for a password of `length` characters drawn
/// from an alphabet of `pool_size`.
pub fn entropy_bits(length: usize, pool_size: u32) -> f64 {
    match pool_size {
        0 => 0.0,
        1 => length as f64,
        n => length as f64 * f64::from(n).log2(),
    }
}
