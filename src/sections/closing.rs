//! Closing section - feedback when no concrete improvement was found.

use super::{Facts, SectionResult};
use crate::suggestion::Suggestion;

/// Emits a single closing remark, but only if no earlier section produced
/// a hint.
pub fn closing_section(facts: &Facts, emitted: &[Suggestion]) -> SectionResult {
    if !emitted.is_empty() {
        return Vec::new();
    }
    let remark = if facts.score < 4 {
        "Heslo je dobré, ale pridanie dĺžky alebo ďalšieho typu znakov ho môže ešte vylepšiť."
    } else {
        "Výborné heslo! Je dlhé a obsahuje rôzne typy znakov."
    };
    vec![Suggestion::plain(remark)]
}
