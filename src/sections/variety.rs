//! Character variety sections - missing classes and restricted alphabets.

use super::{Facts, SectionResult};
use crate::charset::CharClass;
use crate::suggestion::Suggestion;

/// Pools at or below this size get an extra variety warning.
const RESTRICTED_POOL: u32 = 10;

/// One hint per character class absent from the password.
pub fn missing_classes_section(facts: &Facts, _emitted: &[Suggestion]) -> SectionResult {
    facts
        .classes
        .missing()
        .map(|class| Suggestion::plain(missing_class_hint(class)))
        .collect()
}

fn missing_class_hint(class: CharClass) -> &'static str {
    match class {
        CharClass::Lowercase => "Pridajte malé písmená (a-z) na zvýšenie komplexnosti.",
        CharClass::Uppercase => "Pridajte veľké písmená (A-Z) pre väčšiu variabilitu.",
        CharClass::Digit => "Pridajte číslice (0-9), aby bolo heslo ťažšie uhádnuteľné.",
        CharClass::Symbol => "Pridajte špeciálne znaky (napr. !@#$%) pre maximálnu silu.",
    }
}

/// Warns about very small alphabets regardless of earlier hints.
pub fn restricted_pool_section(facts: &Facts, _emitted: &[Suggestion]) -> SectionResult {
    if facts.pool_size <= RESTRICTED_POOL && facts.length > 0 {
        return vec![Suggestion::plain(
            "Heslo používa veľmi obmedzenú sadu znakov (napr. len čísla). Zvážte pridanie písmen a symbolov.",
        )];
    }
    Vec::new()
}
