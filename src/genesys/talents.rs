//! Talent ownership and ranks.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::catalogue;
use super::types::{CalculationWarning, CharacterTalent, Talent};

/// Resolve owned talent names against `catalogue`.
///
/// Listing a ranked talent N times gives rank N. Unknown names and repeats of
/// unranked talents are reported as warnings and otherwise skipped.
pub fn resolve_talents(
    owned: &[String],
    catalogue: &[Talent],
    warnings: &mut Vec<CalculationWarning>,
) -> BTreeMap<String, CharacterTalent> {
    let mut talents: BTreeMap<String, CharacterTalent> = BTreeMap::new();

    for name in owned {
        let Ok(talent) = catalogue::find(name, catalogue) else {
            warnings.push(CalculationWarning::UnknownTalent {
                talent: name.clone(),
            });
            continue;
        };

        match talents.entry(talent.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(CharacterTalent {
                    talent: talent.clone(),
                    rank: 1,
                });
            }
            Entry::Occupied(mut slot) if talent.ranked => {
                slot.get_mut().rank += 1;
            }
            Entry::Occupied(_) => {
                warnings.push(CalculationWarning::UnrankedTalentRepeated {
                    talent: talent.name.clone(),
                });
            }
        }
    }

    talents
}
