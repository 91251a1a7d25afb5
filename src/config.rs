use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GcsError, Result};
use crate::genesys::SkillRows;

pub const DEFAULT_SETTING: &str = "genesys";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one sub-directory per setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_setting")]
    pub default_setting: String,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub robot: RobotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_setting: default_setting(),
            sheet: SheetConfig::default(),
            robot: RobotConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, then the global and project files (or the single explicit
    /// file), then environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_dir: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("GCS_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(dir) = project_dir {
                if let Some(project) = Self::load_patch(&dir.join("config.toml"))? {
                    config.merge_patch(project);
                }
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gcs/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| GcsError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| GcsError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(value) = patch.data_dir {
            self.data_dir = Some(value);
        }
        if let Some(value) = patch.default_setting {
            self.default_setting = value;
        }
        if let Some(patch) = patch.sheet {
            self.sheet.merge(patch);
        }
        if let Some(patch) = patch.robot {
            self.robot.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("GCS_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = env_string("GCS_DEFAULT_SETTING") {
            self.default_setting = value;
        }
        if let Some(value) = env_string("GCS_SKILL_ROWS") {
            self.sheet.skill_rows = value
                .parse()
                .map_err(|_| GcsError::Config(format!("invalid GCS_SKILL_ROWS value {value}")))?;
        }
        if let Some(value) = env_bool("GCS_SHOW_UNTRAINED")? {
            self.sheet.show_untrained = value;
        }
        if let Some(value) = env_bool("GCS_ROBOT_INCLUDE_WARNINGS")? {
            self.robot.include_warnings = value;
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| GcsError::Config(format!("serialize config: {err}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub skill_rows: SkillRows,
    /// List level-0 skills in human output.
    #[serde(default = "default_true")]
    pub show_untrained: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            skill_rows: SkillRows::default(),
            show_untrained: true,
        }
    }
}

impl SheetConfig {
    fn merge(&mut self, patch: SheetPatch) {
        if let Some(value) = patch.skill_rows {
            self.skill_rows = value;
        }
        if let Some(value) = patch.show_untrained {
            self.show_untrained = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default = "default_true")]
    pub include_warnings: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            include_warnings: true,
        }
    }
}

impl RobotConfig {
    fn merge(&mut self, patch: RobotPatch) {
        if let Some(value) = patch.include_warnings {
            self.include_warnings = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data_dir: Option<PathBuf>,
    pub default_setting: Option<String>,
    pub sheet: Option<SheetPatch>,
    pub robot: Option<RobotPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SheetPatch {
    pub skill_rows: Option<SkillRows>,
    pub show_untrained: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RobotPatch {
    pub include_warnings: Option<bool>,
}

fn default_setting() -> String {
    DEFAULT_SETTING.to_string()
}

const fn default_true() -> bool {
    true
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => parse_bool(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(GcsError::Config(format!("invalid {key} value {value}"))),
    }
}
