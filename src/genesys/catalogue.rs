//! Name lookup over setting catalogues.

use crate::error::{CatalogueKind, GcsError, Result};

use super::types::{Archetype, Skill, Talent};

/// A catalogue record addressable by name.
pub trait Named {
    const KIND: CatalogueKind;

    fn name(&self) -> &str;
}

impl Named for Archetype {
    const KIND: CatalogueKind = CatalogueKind::Archetype;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Skill {
    const KIND: CatalogueKind = CatalogueKind::Skill;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Talent {
    const KIND: CatalogueKind = CatalogueKind::Talent;

    fn name(&self) -> &str {
        &self.name
    }
}

/// First record in `haystack` whose name is exactly `needle`.
///
/// Comparison is ordinal and case-sensitive.
pub fn find<'a, T: Named>(needle: &str, haystack: &'a [T]) -> Result<&'a T> {
    haystack
        .iter()
        .find(|record| record.name() == needle)
        .ok_or_else(|| GcsError::UnknownReference {
            kind: T::KIND,
            name: needle.to_string(),
        })
}

/// Names that occur more than once, in order of their second appearance.
pub fn duplicate_names<T: Named>(records: &[T]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .map(Named::name)
        .filter(|name| !seen.insert(*name))
        .collect()
}
