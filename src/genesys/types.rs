use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// One of the six core characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Brawn,
    Agility,
    Intellect,
    Cunning,
    Will,
    Presence,
}

impl Attribute {
    pub const ALL: [Self; 6] = [
        Self::Brawn,
        Self::Agility,
        Self::Intellect,
        Self::Cunning,
        Self::Will,
        Self::Presence,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brawn => "Brawn",
            Self::Agility => "Agility",
            Self::Intellect => "Intellect",
            Self::Cunning => "Cunning",
            Self::Will => "Will",
            Self::Presence => "Presence",
        }
    }

    /// Case-insensitive match against the six attribute names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six attribute scores. Used both for archetype bases and character deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes<T = i32> {
    pub brawn: T,
    pub agility: T,
    pub intellect: T,
    pub cunning: T,
    pub will: T,
    pub presence: T,
}

/// Merged scores. Wide enough that base plus delta never overflows.
pub type ResolvedAttributes = Attributes<i64>;

impl<T: Copy> Attributes<T> {
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> T {
        match attribute {
            Attribute::Brawn => self.brawn,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
            Attribute::Cunning => self.cunning,
            Attribute::Will => self.will,
            Attribute::Presence => self.presence,
        }
    }
}

impl From<Attributes> for ResolvedAttributes {
    fn from(scores: Attributes) -> Self {
        Self {
            brawn: i64::from(scores.brawn),
            agility: i64::from(scores.agility),
            intellect: i64::from(scores.intellect),
            cunning: i64::from(scores.cunning),
            will: i64::from(scores.will),
            presence: i64::from(scores.presence),
        }
    }
}

impl<T: Add<Output = T>> Add for Attributes<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            brawn: self.brawn + rhs.brawn,
            agility: self.agility + rhs.agility,
            intellect: self.intellect + rhs.intellect,
            cunning: self.cunning + rhs.cunning,
            will: self.will + rhs.will,
            presence: self.presence + rhs.presence,
        }
    }
}

/// Starting template for a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Attributes,
    #[serde(default)]
    pub wound: i32,
    #[serde(default)]
    pub strain: i32,
    #[serde(default)]
    pub experience: i32,
}

/// A trainable skill and the attribute that governs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub ability: String,
}

impl Skill {
    #[must_use]
    pub fn governing_attribute(&self) -> Option<Attribute> {
        Attribute::from_name(&self.ability)
    }
}

/// A talent from the rule book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub name: String,
    #[serde(default)]
    pub tier: u8,
    #[serde(default)]
    pub ranked: bool,
    #[serde(default)]
    pub gives: String,
}

/// The player's additions on top of an archetype.
///
/// Every field may be omitted in the character file; omitted attribute deltas,
/// experience and skill levels count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub name: String,
    pub player: String,
    pub profession: String,
    pub archetype: String,
    #[serde(flatten)]
    pub attributes: Attributes,
    pub experience: i32,
    pub skills: BTreeMap<String, i32>,
    pub talents: Vec<String>,
}

impl Character {
    /// Trained level for `skill`, zero when the character never mentions it.
    #[must_use]
    pub fn skill_level(&self, skill: &str) -> i32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }
}

/// Reference data for one game setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub name: String,
    pub archetypes: Vec<Archetype>,
    pub skills: Vec<Skill>,
    pub talents: Vec<Talent>,
}

/// A skill as it appears on a finished sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSkill {
    pub name: String,
    pub ability: String,
    pub proficiency_dice: i64,
    /// Governing score minus proficiency. Negative when the character trained
    /// past the attribute.
    pub ability_dice: i64,
}

impl CharacterSkill {
    #[must_use]
    pub const fn pool_size(&self) -> i64 {
        self.proficiency_dice + self.ability_dice
    }
}

/// A talent as applied to a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTalent {
    #[serde(flatten)]
    pub talent: Talent,
    pub rank: u32,
}

/// Fully resolved character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedCharacter {
    pub name: String,
    pub archetype: String,
    pub player: String,
    pub profession: String,
    #[serde(flatten)]
    pub attributes: ResolvedAttributes,
    pub experience: i64,
    pub skills: BTreeMap<String, CharacterSkill>,
    pub talents: BTreeMap<String, CharacterTalent>,
}

impl CalculatedCharacter {
    #[must_use]
    pub fn skill(&self, name: &str) -> Option<&CharacterSkill> {
        self.skills.get(name)
    }
}

/// Non-fatal problems found while calculating. The calculator reports these
/// to its caller instead of logging them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationWarning {
    /// The skill's ability is not one of the six attributes; its governing
    /// score was taken as zero.
    UnknownAbility { skill: String, ability: String },
    /// The character levels a skill the setting does not list.
    UnlistedSkill { skill: String },
    UnknownTalent { talent: String },
    UnrankedTalentRepeated { talent: String },
}

impl fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAbility { skill, ability } => write!(
                f,
                "skill '{skill}' names unknown ability '{ability}'; using 0"
            ),
            Self::UnlistedSkill { skill } => {
                write!(f, "skill '{skill}' is not part of this setting; ignored")
            }
            Self::UnknownTalent { talent } => {
                write!(f, "talent '{talent}' is not part of this setting; ignored")
            }
            Self::UnrankedTalentRepeated { talent } => {
                write!(f, "talent '{talent}' is not ranked; extra copies ignored")
            }
        }
    }
}
