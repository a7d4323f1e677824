//! Suggestion sections
//!
//! Each section inspects the computed facts about a password and may emit
//! improvement hints. Sections run in a fixed order; later sections can see
//! what earlier ones emitted.

mod closing;
mod length;
mod variety;

pub use closing::closing_section;
pub use length::length_section;
pub use variety::{missing_classes_section, restricted_pool_section};

use crate::charset::CharClasses;
use crate::suggestion::Suggestion;

/// What the analyzer knows about a non-empty, non-denylisted password.
#[derive(Debug, Clone, Copy)]
pub struct Facts {
    pub length: usize,
    pub score: u8,
    pub classes: CharClasses,
    pub pool_size: u32,
}

/// Hints emitted by a section. Empty when the section has nothing to add.
pub type SectionResult = Vec<Suggestion>;

/// A section receives the facts and every hint emitted before it.
pub type Section = fn(&Facts, &[Suggestion]) -> SectionResult;
