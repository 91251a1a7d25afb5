//! Loading settings and characters from YAML.

pub mod loader;
pub mod parser;

pub use loader::{ARCHETYPES_FILE, SKILLS_FILE, SettingLoader, TALENTS_FILE, default_data_dir};
pub use parser::{
    YamlParser, read_archetype_file, read_character_file, read_skill_file, read_talent_file,
};
