//! Error types for gcs.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Which catalogue a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogueKind {
    Archetype,
    Skill,
    Talent,
}

impl CatalogueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Archetype => "archetype",
            Self::Skill => "skill",
            Self::Talent => "talent",
        }
    }
}

impl fmt::Display for CatalogueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum GcsError {
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),

    #[error("could not match skill '{0}'")]
    UnknownSkillReference(String),

    #[error("unknown {kind} '{name}'")]
    UnknownReference { kind: CatalogueKind, name: String },

    #[error("setting not found: {0}")]
    SettingNotFound(String),

    #[error("duplicate {kind} '{name}' in {}", path.display())]
    DuplicateEntry {
        kind: CatalogueKind,
        name: String,
        path: PathBuf,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GcsError {
    /// Stable machine-readable code for robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownArchetype(_) => "unknown_archetype",
            Self::UnknownSkillReference(_) => "unknown_skill",
            Self::UnknownReference { .. } => "unknown_reference",
            Self::SettingNotFound(_) => "setting_not_found",
            Self::DuplicateEntry { .. } => "duplicate_entry",
            Self::InvalidData(_) => "invalid_data",
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, GcsError>;
