//! Unit tests for character calculation.
//!
//! Tests cover:
//! - Archetype values copied with zero deltas
//! - Delta addition per attribute
//! - Unknown archetype failure
//! - Dice split, including overtrained skills
//! - Default rows versus sparse rows
//! - Unknown ability quirk

use gcs::GcsError;
use gcs::genesys::{
    Archetype, Attribute, Attributes, CalculationWarning, Calculator, Character, Setting, Skill,
    SkillRows, Talent, calculate,
};
use gcs::test_utils::{TestCase, run_table_tests};

// ============================================================================
// Test Fixtures
// ============================================================================

fn archetype(name: &str, scores: [i32; 6], experience: i32) -> Archetype {
    let [brawn, agility, intellect, cunning, will, presence] = scores;
    Archetype {
        name: name.to_string(),
        attributes: Attributes {
            brawn,
            agility,
            intellect,
            cunning,
            will,
            presence,
        },
        wound: 10,
        strain: 10,
        experience,
    }
}

fn skill(name: &str, ability: &str) -> Skill {
    Skill {
        name: name.to_string(),
        ability: ability.to_string(),
    }
}

fn archetypes() -> Vec<Archetype> {
    vec![
        archetype("The Intellectual", [2, 1, 3, 2, 2, 2], 100),
        archetype("The Aristocrat", [1, 2, 2, 2, 2, 3], 100),
    ]
}

fn skills() -> Vec<Skill> {
    vec![
        skill("Athletics", "Brawn"),
        skill("Computers", "Intellect"),
        skill("Cunning Skill", "Cunning"),
        skill("Agility Skill", "Agility"),
        skill("Presence Skill", "Presence"),
        skill("Will Skill", "Will"),
    ]
}

fn character(archetype: &str) -> Character {
    Character {
        archetype: archetype.to_string(),
        ..Character::default()
    }
}

// ============================================================================
// Attribute merge
// ============================================================================

#[test]
fn wilberforce_gets_intellectual_values() {
    let mut input = character("The Intellectual");
    input.name = "Wilberforce".to_string();

    let result = calculate(&input, &archetypes(), &skills()).unwrap();
    let sheet = result.character;

    assert_eq!(sheet.name, "Wilberforce");
    assert_eq!(sheet.archetype, "The Intellectual");
    assert_eq!(sheet.attributes.brawn, 2);
    assert_eq!(sheet.attributes.agility, 1);
    assert_eq!(sheet.attributes.intellect, 3);
    assert_eq!(sheet.attributes.cunning, 2);
    assert_eq!(sheet.attributes.will, 2);
    assert_eq!(sheet.attributes.presence, 2);
    assert_eq!(sheet.experience, 100);
}

#[test]
fn character_traits_add_to_archetype_traits() {
    let input = Character {
        name: "Floyd".to_string(),
        archetype: "The Aristocrat".to_string(),
        attributes: Attributes {
            agility: 1,
            brawn: 2,
            cunning: 3,
            intellect: 5,
            presence: 7,
            will: 8,
        },
        experience: 4,
        ..Character::default()
    };
    let base = &archetypes()[1];

    let sheet = calculate(&input, &archetypes(), &skills()).unwrap().character;

    for attribute in Attribute::ALL {
        assert_eq!(
            sheet.attributes.get(attribute),
            i64::from(base.attributes.get(attribute)) + i64::from(input.attributes.get(attribute)),
            "{attribute}"
        );
    }
    assert_eq!(sheet.experience, 104);
    assert_eq!(sheet.name, "Floyd");
}

#[test]
fn bogus_archetype_is_an_error() {
    let err = calculate(&character("Bogus"), &archetypes(), &skills()).unwrap_err();
    assert!(matches!(err, GcsError::UnknownArchetype(ref name) if name == "Bogus"));
    assert_eq!(err.to_string(), "unknown archetype 'Bogus'");
}

#[test]
fn archetype_lookup_is_case_sensitive() {
    let err = calculate(&character("the intellectual"), &archetypes(), &skills()).unwrap_err();
    assert!(matches!(err, GcsError::UnknownArchetype(_)));
}

#[test]
fn extreme_values_pass_through_unchanged() {
    let mut input = character("The Intellectual");
    input.attributes.brawn = i32::MAX;
    input.attributes.agility = i32::MIN;
    input.experience = i32::MAX;
    input.skills.insert("Athletics".to_string(), i32::MIN);
    input.skills.insert("Agility Skill".to_string(), i32::MAX);

    let sheet = calculate(&input, &archetypes(), &skills()).unwrap().character;

    assert_eq!(sheet.attributes.brawn, i64::from(i32::MAX) + 2);
    assert_eq!(sheet.attributes.agility, i64::from(i32::MIN) + 1);
    assert_eq!(sheet.experience, i64::from(i32::MAX) + 100);

    let athletics = sheet.skill("Athletics").unwrap();
    assert_eq!(athletics.proficiency_dice, i64::from(i32::MIN));
    assert_eq!(athletics.pool_size(), sheet.attributes.brawn);

    let agility = sheet.skill("Agility Skill").unwrap();
    assert_eq!(agility.ability_dice, i64::from(i32::MIN) + 1 - i64::from(i32::MAX));
    assert_eq!(agility.pool_size(), sheet.attributes.agility);
}

#[test]
fn oversized_yaml_value_is_rejected_not_wrapped() {
    let err = serde_yaml::from_str::<Character>("archetype: The Intellectual\nbrawn: 9999999999\n");
    assert!(err.is_err());
}

// ============================================================================
// Skills
// ============================================================================

#[test]
fn skill_levels_use_the_governing_attribute() -> Result<(), String> {
    let mut input = character("The Aristocrat");
    input.attributes = Attributes {
        agility: 1,
        brawn: 2,
        cunning: 3,
        intellect: 4,
        presence: 5,
        will: 6,
    };
    input.skills.insert("Cunning Skill".to_string(), 1);
    input.skills.insert("Agility Skill".to_string(), 2);
    input.skills.insert("Presence Skill".to_string(), 3);
    input.skills.insert("Will Skill".to_string(), 4);

    let sheet = calculate(&input, &archetypes(), &skills()).unwrap().character;

    let cases = vec![
        TestCase {
            name: "cunning",
            input: ("Cunning Skill", Attribute::Cunning),
            expected: (1, true),
        },
        TestCase {
            name: "agility",
            input: ("Agility Skill", Attribute::Agility),
            expected: (2, true),
        },
        TestCase {
            name: "presence",
            input: ("Presence Skill", Attribute::Presence),
            expected: (3, true),
        },
        TestCase {
            name: "will",
            input: ("Will Skill", Attribute::Will),
            expected: (4, true),
        },
    ];

    run_table_tests(cases, |(name, attribute)| {
        let resolved = sheet.skill(name).expect("skill present");
        (
            resolved.proficiency_dice,
            resolved.pool_size() == sheet.attributes.get(attribute),
        )
    })
}

#[test]
fn athletics_level_one_with_brawn_two() {
    let mut input = character("The Intellectual");
    input.skills.insert("Athletics".to_string(), 1);

    let sheet = calculate(&input, &archetypes(), &skills()).unwrap().character;
    let athletics = sheet.skill("Athletics").unwrap();

    assert_eq!(athletics.name, "Athletics");
    assert_eq!(athletics.ability, "Brawn");
    assert_eq!(athletics.proficiency_dice, 1);
    assert_eq!(athletics.ability_dice, 1);
}

#[test]
fn overtrained_skill_keeps_negative_ability_dice() {
    let mut input = character("The Intellectual");
    input.skills.insert("Athletics".to_string(), 4);

    let sheet = calculate(&input, &archetypes(), &skills()).unwrap().character;
    let athletics = sheet.skill("Athletics").unwrap();

    assert_eq!(athletics.proficiency_dice, 4);
    assert_eq!(athletics.ability_dice, -2);
}

#[test]
fn untrained_skills_get_default_rows() {
    let mut input = character("The Aristocrat");
    input.attributes.presence = 1;

    let sheet = calculate(&input, &archetypes(), &skills()).unwrap().character;

    assert_eq!(sheet.skills.len(), skills().len());
    let presence = sheet.skill("Presence Skill").unwrap();
    assert_eq!(presence.proficiency_dice, 0);
    assert_eq!(presence.ability_dice, 4);
}

#[test]
fn sparse_rows_only_list_trained_skills() {
    let archetypes = archetypes();
    let skills = skills();
    let mut input = character("The Intellectual");
    input.skills.insert("Computers".to_string(), 2);

    let sheet = Calculator::new(&archetypes, &skills)
        .with_skill_rows(SkillRows::Sparse)
        .calculate(&input)
        .unwrap()
        .character;

    assert_eq!(sheet.skills.keys().collect::<Vec<_>>(), vec!["Computers"]);
    assert_eq!(sheet.skill("Computers").unwrap().ability_dice, 1);
}

#[test]
fn sparse_rows_fail_on_unknown_skill() {
    let archetypes = archetypes();
    let skills = skills();
    let mut input = character("The Intellectual");
    input.skills.insert("Astrocartography".to_string(), 1);

    let err = Calculator::new(&archetypes, &skills)
        .with_skill_rows(SkillRows::Sparse)
        .calculate(&input)
        .unwrap_err();
    assert_eq!(err.to_string(), "could not match skill 'Astrocartography'");
}

#[test]
fn unknown_ability_defaults_to_zero_with_warning() {
    let archetypes = archetypes();
    let skills = vec![skill("Lore", "Intelligence")];
    let mut input = character("The Intellectual");
    input.skills.insert("Lore".to_string(), 1);

    let result = Calculator::new(&archetypes, &skills).calculate(&input).unwrap();
    let lore = result.character.skill("Lore").unwrap();

    assert_eq!(lore.proficiency_dice, 1);
    assert_eq!(lore.ability_dice, -1);
    assert_eq!(lore.pool_size(), 0);
    assert_eq!(
        result.warnings,
        vec![CalculationWarning::UnknownAbility {
            skill: "Lore".to_string(),
            ability: "Intelligence".to_string(),
        }]
    );
}

// ============================================================================
// Talents
// ============================================================================

#[test]
fn setting_calculator_resolves_talent_ranks() {
    let setting = Setting {
        name: "test".to_string(),
        archetypes: archetypes(),
        skills: skills(),
        talents: vec![Talent {
            name: "Toughened".to_string(),
            tier: 1,
            ranked: true,
            gives: "Increase wound threshold by two.".to_string(),
        }],
    };
    let mut input = character("The Intellectual");
    input.talents = vec!["Toughened".to_string(), "Toughened".to_string()];

    let sheet = setting.calculator().calculate(&input).unwrap().character;
    assert_eq!(sheet.talents["Toughened"].rank, 2);
}
