use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{GcsError, Result};
use crate::genesys::{Archetype, Character, Skill, Talent};

/// YAML reader for setting catalogues and character files.
pub struct YamlParser;

impl YamlParser {
    pub fn parse_str<T: DeserializeOwned>(content: &str, source: &Path) -> Result<T> {
        serde_yaml::from_str(content).map_err(|err| {
            GcsError::InvalidData(format!("parse {}: {err}", source.display()))
        })
    }

    /// Parse a catalogue file; an empty document is an empty catalogue.
    pub fn parse_list<T: DeserializeOwned>(content: &str, source: &Path) -> Result<Vec<T>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Self::parse_str(content, source)
    }

    pub fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|err| GcsError::InvalidData(format!("read {}: {err}", path.display())))
    }
}

pub fn read_archetype_file(path: &Path) -> Result<Vec<Archetype>> {
    YamlParser::parse_list(&YamlParser::read(path)?, path)
}

pub fn read_skill_file(path: &Path) -> Result<Vec<Skill>> {
    YamlParser::parse_list(&YamlParser::read(path)?, path)
}

pub fn read_talent_file(path: &Path) -> Result<Vec<Talent>> {
    YamlParser::parse_list(&YamlParser::read(path)?, path)
}

pub fn read_character_file(path: &Path) -> Result<Character> {
    YamlParser::parse_str(&YamlParser::read(path)?, path)
}
