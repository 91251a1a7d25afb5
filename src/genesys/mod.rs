//! Character derivation for the Genesys system.
//!
//! Everything here is pure: callers hand in already loaded catalogues and a
//! character, and get back a [`CalculatedCharacter`] plus any
//! [`CalculationWarning`]s. Nothing in this module reads files or logs.

pub mod attributes;
pub mod calculator;
pub mod catalogue;
pub mod skills;
pub mod talents;
pub mod types;

pub use attributes::{merge_attributes, merge_experience};
pub use calculator::{Calculation, Calculator, calculate};
pub use catalogue::{Named, duplicate_names, find};
pub use skills::{SkillRows, resolve_skill, resolve_skills};
pub use talents::resolve_talents;
pub use types::{
    Archetype, Attribute, Attributes, CalculatedCharacter, CalculationWarning, Character,
    CharacterSkill, CharacterTalent, ResolvedAttributes, Setting, Skill, Talent,
};
