use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::genesys::Setting;
use crate::setting::{SettingLoader, default_data_dir};

pub struct AppContext {
    pub config: Config,
    pub loader: SettingLoader,
    /// Setting selected by `--setting` or the configured default.
    pub setting_name: String,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let project_dir = find_upwards(&cwd, ".gcs");
        let config = Config::load(cli.config.as_deref(), project_dir.as_deref())?;

        let data_dir = match (&cli.data_dir, &config.data_dir) {
            (Some(dir), _) | (None, Some(dir)) => dir.clone(),
            (None, None) => default_data_dir()?,
        };
        let setting_name = cli
            .setting
            .clone()
            .unwrap_or_else(|| config.default_setting.clone());

        debug!(data_dir = %data_dir.display(), setting = %setting_name, "resolved context");

        Ok(Self {
            config,
            loader: SettingLoader::new(data_dir),
            setting_name,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    pub fn load_setting(&self) -> Result<Setting> {
        self.loader.load(&self.setting_name)
    }

    #[must_use]
    pub fn is_robot(&self) -> bool {
        self.output_format != OutputFormat::Human
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_dir())
}
