//! One-pass character calculation.

use serde::Serialize;

use crate::error::{GcsError, Result};

use super::attributes::{merge_attributes, merge_experience};
use super::catalogue;
use super::skills::{SkillRows, resolve_skills};
use super::talents::resolve_talents;
use super::types::{
    Archetype, CalculatedCharacter, CalculationWarning, Character, Setting, Skill, Talent,
};

/// Result of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub character: CalculatedCharacter,
    pub warnings: Vec<CalculationWarning>,
}

/// Calculates characters against borrowed, read-only catalogues.
///
/// Holds no mutable state, so one calculator can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    archetypes: &'a [Archetype],
    skills: &'a [Skill],
    talents: &'a [Talent],
    rows: SkillRows,
}

impl<'a> Calculator<'a> {
    #[must_use]
    pub const fn new(archetypes: &'a [Archetype], skills: &'a [Skill]) -> Self {
        Self {
            archetypes,
            skills,
            talents: &[],
            rows: SkillRows::Catalogue,
        }
    }

    #[must_use]
    pub const fn with_talents(mut self, talents: &'a [Talent]) -> Self {
        self.talents = talents;
        self
    }

    #[must_use]
    pub const fn with_skill_rows(mut self, rows: SkillRows) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub const fn skill_rows(&self) -> SkillRows {
        self.rows
    }

    pub fn calculate(&self, character: &Character) -> Result<Calculation> {
        let archetype = catalogue::find(&character.archetype, self.archetypes)
            .map_err(|_| GcsError::UnknownArchetype(character.archetype.clone()))?;

        let attributes = merge_attributes(archetype, character);
        let mut warnings = Vec::new();
        let skills = resolve_skills(character, &attributes, self.skills, self.rows, &mut warnings)?;
        let talents = resolve_talents(&character.talents, self.talents, &mut warnings);

        Ok(Calculation {
            character: CalculatedCharacter {
                name: character.name.clone(),
                archetype: archetype.name.clone(),
                player: character.player.clone(),
                profession: character.profession.clone(),
                attributes,
                experience: merge_experience(archetype, character),
                skills,
                talents,
            },
            warnings,
        })
    }
}

impl Setting {
    #[must_use]
    pub fn calculator(&self) -> Calculator<'_> {
        Calculator::new(&self.archetypes, &self.skills).with_talents(&self.talents)
    }
}

/// Calculate `character` with the default skill rows and no talent catalogue.
pub fn calculate(
    character: &Character,
    archetypes: &[Archetype],
    skills: &[Skill],
) -> Result<Calculation> {
    Calculator::new(archetypes, skills).calculate(character)
}
