//! Length section - recommends longer passwords.

use super::{Facts, SectionResult};
use crate::suggestion::Suggestion;

const MIN_LENGTH: usize = 8;
const COMFORTABLE_LENGTH: usize = 12;

/// Recommends 8+ characters for short passwords, 12-16 for passwords that
/// are long enough but still score below "strong".
pub fn length_section(facts: &Facts, _emitted: &[Suggestion]) -> SectionResult {
    if facts.length < MIN_LENGTH {
        return vec![Suggestion::plain(
            "Použite aspoň 8 znakov. Dlhšie heslá sú výrazne bezpečnejšie.",
        )];
    }
    if facts.length < COMFORTABLE_LENGTH && facts.score < 3 {
        return vec![Suggestion::plain(
            "Pre lepšiu bezpečnosť zvážte aspoň 12-16 znakov.",
        )];
    }
    Vec::new()
}
