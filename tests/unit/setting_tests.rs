//! Unit tests for setting loading against the shipped data directory.

use std::path::PathBuf;

use gcs::genesys::Attribute;
use gcs::setting::{SettingLoader, read_character_file};
use gcs::test_utils::fixtures::SettingFixture;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn shipped_loader() -> SettingLoader {
    SettingLoader::new(repo_path("data"))
}

#[test]
fn shipped_genesys_setting_loads() {
    let setting = shipped_loader().load("genesys").unwrap();
    assert_eq!(setting.archetypes.len(), 4);
    assert!(setting.skills.len() > 20);
    assert!(!setting.talents.is_empty());
    assert!(
        setting
            .archetypes
            .iter()
            .any(|archetype| archetype.name == "The Intellectual")
    );
}

#[test]
fn shipped_skills_name_known_characteristics() {
    let setting = shipped_loader().load("genesys").unwrap();
    for skill in &setting.skills {
        assert!(
            skill.governing_attribute().is_some(),
            "{} has ability {}",
            skill.name,
            skill.ability
        );
    }
}

#[test]
fn shipped_settings_are_discoverable() {
    let names = shipped_loader().available().unwrap();
    assert!(names.contains(&"genesys".to_string()));
}

#[test]
fn demo_character_calculates_cleanly() {
    let setting = shipped_loader().load("genesys").unwrap();
    let character = read_character_file(&repo_path("demos/wilberforce.yaml")).unwrap();

    let result = setting.calculator().calculate(&character).unwrap();
    let sheet = result.character;

    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(sheet.name, "Wilberforce");
    assert_eq!(sheet.attributes.get(Attribute::Intellect), 4);
    assert_eq!(sheet.experience, 115);
    assert_eq!(sheet.skills.len(), setting.skills.len());

    let knowledge = sheet.skill("Knowledge").unwrap();
    assert_eq!(knowledge.proficiency_dice, 2);
    assert_eq!(knowledge.ability_dice, 2);
    assert_eq!(sheet.talents.len(), 2);
}

#[test]
fn fixture_character_matches_recorded_pools() {
    let fixture = SettingFixture::standard();
    let path = fixture.write_character("hart", SettingFixture::CHARACTER);
    let setting = fixture.loader().load(SettingFixture::SETTING).unwrap();
    let character = read_character_file(&path).unwrap();

    assert_eq!(character.name, "J. Marcus Hart");
    assert_eq!(character.experience, 50);
    assert_eq!(character.skill_level("Athletics"), 1);

    let sheet = setting.calculator().calculate(&character).unwrap().character;
    let athletics = sheet.skill("Athletics").unwrap();
    assert_eq!((athletics.proficiency_dice, athletics.ability_dice), (1, 0));
    let computers = sheet.skill("Computers").unwrap();
    assert_eq!((computers.proficiency_dice, computers.ability_dice), (2, 2));
    assert_eq!(sheet.talents["Grit"].rank, 1);
}

#[test]
fn list_document_is_not_a_character() {
    let fixture = SettingFixture::new();
    let path = fixture.write_character("roster", "- Wilberforce\n- Floyd\n");
    let err = read_character_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid data: parse"), "{err}");
}
