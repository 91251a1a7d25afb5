use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::setting::{ARCHETYPES_FILE, SKILLS_FILE, SettingLoader, TALENTS_FILE};

/// A throwaway data directory holding settings and character files.
pub struct SettingFixture {
    pub temp_dir: TempDir,
}

impl Default for SettingFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingFixture {
    pub const SETTING: &'static str = "genesys";

    pub const ARCHETYPES: &'static str = "\
- name: The Intellectual
  brawn: 2
  agility: 1
  intellect: 3
  cunning: 2
  will: 2
  presence: 2
  wound: 8
  strain: 12
  experience: 100
- name: The Aristocrat
  brawn: 1
  agility: 2
  intellect: 2
  cunning: 2
  will: 2
  presence: 3
  wound: 10
  strain: 10
  experience: 100
";

    pub const SKILLS: &'static str = "\
- name: Athletics
  ability: Brawn
- name: Computers
  ability: Intellect
";

    pub const TALENTS: &'static str = "\
- name: Grit
  tier: 1
  ranked: true
  gives: Increase strain threshold by one.
- name: Quick Draw
  tier: 1
  ranked: false
  gives: Draw or holster a weapon as an incidental.
";

    /// Aristocrat with Athletics 1 and Computers 2: 1/0 and 2/2 pools.
    pub const CHARACTER: &'static str = "\
name: J. Marcus Hart
player: Clay
profession: Investigator
archetype: The Aristocrat
intellect: 2
presence: 1
experience: 50
skills:
  Athletics: 1
  Computers: 2
talents:
  - Grit
";

    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        println!("[FIXTURE] Created data directory: {:?}", temp_dir.path());
        Self { temp_dir }
    }

    /// Data directory with the `genesys` setting already written.
    #[must_use]
    pub fn standard() -> Self {
        let fixture = Self::new();
        fixture.write_setting_file(Self::SETTING, ARCHETYPES_FILE, Self::ARCHETYPES);
        fixture.write_setting_file(Self::SETTING, SKILLS_FILE, Self::SKILLS);
        fixture.write_setting_file(Self::SETTING, TALENTS_FILE, Self::TALENTS);
        fixture
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    #[must_use]
    pub fn loader(&self) -> SettingLoader {
        SettingLoader::new(self.data_dir())
    }

    /// Path of `file` inside the standard setting.
    #[must_use]
    pub fn setting_file(&self, file: &str) -> PathBuf {
        self.data_dir().join(Self::SETTING).join(file)
    }

    pub fn write_setting_file(&self, setting: &str, file: &str, content: &str) -> PathBuf {
        self.write(&format!("{setting}/{file}"), content)
    }

    pub fn write_character(&self, name: &str, content: &str) -> PathBuf {
        self.write(&format!("characters/{name}.yaml"), content)
    }

    fn write(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_dir().join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}
