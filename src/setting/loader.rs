use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{GcsError, Result};
use crate::genesys::{Named, Setting, duplicate_names};

use super::parser::{read_archetype_file, read_skill_file, read_talent_file};

pub const ARCHETYPES_FILE: &str = "archetypes.yaml";
pub const SKILLS_FILE: &str = "skills.yaml";
pub const TALENTS_FILE: &str = "talents.yaml";

/// Loads settings from `<data_dir>/<setting>/`.
#[derive(Debug, Clone)]
pub struct SettingLoader {
    data_dir: PathBuf,
}

impl SettingLoader {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loader rooted at the `data` directory next to the running executable.
    pub fn beside_executable() -> Result<Self> {
        Ok(Self::new(default_data_dir()?))
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn setting_dir(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(GcsError::SettingNotFound(name.to_string()));
        }
        let dir = self.data_dir.join(name);
        if !dir.join(ARCHETYPES_FILE).is_file() {
            return Err(GcsError::SettingNotFound(format!(
                "{name} (looked in {})",
                dir.display()
            )));
        }
        Ok(dir)
    }

    /// Read archetypes, skills and (optionally) talents for `name`.
    pub fn load(&self, name: &str) -> Result<Setting> {
        let dir = self.setting_dir(name)?;

        let archetypes_path = dir.join(ARCHETYPES_FILE);
        let archetypes = read_archetype_file(&archetypes_path)?;
        ensure_unique(&archetypes, &archetypes_path)?;

        let skills_path = dir.join(SKILLS_FILE);
        let skills = read_skill_file(&skills_path)?;
        ensure_unique(&skills, &skills_path)?;

        let talents_path = dir.join(TALENTS_FILE);
        let talents = if talents_path.is_file() {
            read_talent_file(&talents_path)?
        } else {
            debug!(setting = name, "no talents file; using empty talent catalogue");
            Vec::new()
        };
        ensure_unique(&talents, &talents_path)?;

        debug!(
            setting = name,
            archetypes = archetypes.len(),
            skills = skills.len(),
            talents = talents.len(),
            "loaded setting"
        );

        Ok(Setting {
            name: name.to_string(),
            archetypes,
            skills,
            talents,
        })
    }

    /// Names of the settings under the data directory, sorted.
    pub fn available(&self) -> Result<Vec<String>> {
        if !self.data_dir.is_dir() {
            return Err(GcsError::MissingConfig(format!(
                "data directory {} does not exist",
                self.data_dir.display()
            )));
        }

        let mut names: Vec<String> = WalkDir::new(&self.data_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter(|entry| entry.path().join(ARCHETYPES_FILE).is_file())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();

        debug!(data_dir = %self.data_dir.display(), count = names.len(), "discovered settings");
        Ok(names)
    }
}

/// `data/` beside the current executable.
pub fn default_data_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| GcsError::MissingConfig(format!("no parent for {}", exe.display())))?;
    Ok(dir.join("data"))
}

fn ensure_unique<T: Named>(records: &[T], path: &Path) -> Result<()> {
    match duplicate_names(records).first() {
        Some(name) => Err(GcsError::DuplicateEntry {
            kind: T::KIND,
            name: (*name).to_string(),
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
