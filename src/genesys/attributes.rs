//! Archetype + character attribute merge.

use super::types::{Archetype, Character, ResolvedAttributes};

/// Archetype base plus character delta, attribute by attribute. No bounds are
/// applied; negative or very large scores pass through unchanged.
#[must_use]
pub fn merge_attributes(archetype: &Archetype, character: &Character) -> ResolvedAttributes {
    ResolvedAttributes::from(archetype.attributes) + ResolvedAttributes::from(character.attributes)
}

#[must_use]
pub fn merge_experience(archetype: &Archetype, character: &Character) -> i64 {
    i64::from(archetype.experience) + i64::from(character.experience)
}
