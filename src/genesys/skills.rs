//! Dice pools for skills.
//!
//! A skill's pool is its governing attribute score, split into proficiency
//! dice (the character's trained level) and ability dice (whatever is left).
//! Which skills end up on the sheet depends on [`SkillRows`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GcsError, Result};

use super::catalogue;
use super::types::{CalculationWarning, Character, CharacterSkill, ResolvedAttributes, Skill};

/// Which skills a calculated sheet lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillRows {
    /// Every skill in the setting, untrained ones at level 0.
    #[default]
    #[serde(rename = "default", alias = "catalogue")]
    Catalogue,
    /// Only the skills the character levels. A level for a skill the setting
    /// does not list is an error.
    Sparse,
}

impl FromStr for SkillRows {
    type Err = GcsError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "default" | "catalogue" | "all" => Ok(Self::Catalogue),
            "sparse" => Ok(Self::Sparse),
            other => Err(GcsError::Config(format!(
                "invalid skill rows '{other}' (expected default or sparse)"
            ))),
        }
    }
}

impl fmt::Display for SkillRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalogue => f.write_str("default"),
            Self::Sparse => f.write_str("sparse"),
        }
    }
}

/// Dice split for one skill at `level`.
///
/// An ability name outside the six attributes resolves to a score of zero and
/// yields an [`CalculationWarning::UnknownAbility`].
pub fn resolve_skill(
    skill: &Skill,
    level: i32,
    attributes: &ResolvedAttributes,
) -> (CharacterSkill, Option<CalculationWarning>) {
    let (score, warning) = match skill.governing_attribute() {
        Some(attribute) => (attributes.get(attribute), None),
        None => (
            0,
            Some(CalculationWarning::UnknownAbility {
                skill: skill.name.clone(),
                ability: skill.ability.clone(),
            }),
        ),
    };

    let proficiency = i64::from(level);
    let resolved = CharacterSkill {
        name: skill.name.clone(),
        ability: skill.ability.clone(),
        proficiency_dice: proficiency,
        ability_dice: score - proficiency,
    };
    (resolved, warning)
}

/// Resolve the skills of `character` against `catalogue`.
pub fn resolve_skills(
    character: &Character,
    attributes: &ResolvedAttributes,
    catalogue: &[Skill],
    rows: SkillRows,
    warnings: &mut Vec<CalculationWarning>,
) -> Result<BTreeMap<String, CharacterSkill>> {
    let mut skills = BTreeMap::new();

    match rows {
        SkillRows::Catalogue => {
            for skill in catalogue {
                let level = character.skill_level(&skill.name);
                let (resolved, warning) = resolve_skill(skill, level, attributes);
                warnings.extend(warning);
                skills.insert(resolved.name.clone(), resolved);
            }
            for name in character.skills.keys() {
                if catalogue::find(name, catalogue).is_err() {
                    warnings.push(CalculationWarning::UnlistedSkill {
                        skill: name.clone(),
                    });
                }
            }
        }
        SkillRows::Sparse => {
            for (name, &level) in &character.skills {
                let skill = catalogue::find(name, catalogue)
                    .map_err(|_| GcsError::UnknownSkillReference(name.clone()))?;
                let (resolved, warning) = resolve_skill(skill, level, attributes);
                warnings.extend(warning);
                skills.insert(resolved.name.clone(), resolved);
            }
        }
    }

    Ok(skills)
}
