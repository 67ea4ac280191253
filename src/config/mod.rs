//! TOML configuration: threshold, per-level switches, backend selection and backend
//! settings, all fixed when the logger is built.

mod structs;

pub use structs::{
    BackendKind, FileConfig, GeneralConfig, LevelsConfig, OutputConfig, SchemeKind,
    TerminalConfig,
};

use crate::filter::LevelFilter;
use crate::level::{Level, ParseLevelError};
use std::fs;
use std::path::{Path, PathBuf};

/// `#[serde(default)]` everywhere: an empty file is a valid config.
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub levels: LevelsConfig,
    pub output: OutputConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Malformed TOML.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/lightlog/lightlog.toml`
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "lightlog")
            .map(|dirs| dirs.config_dir().join("lightlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Strict threshold parse; `Logger::from_config` handles the fallback.
    ///
    /// # Errors
    /// The configured name is not one of the canonical level names.
    pub fn parse_level(&self) -> Result<Level, ParseLevelError> {
        self.general.level.parse()
    }

    /// Threshold (INFO when unparseable) combined with the per-level switches.
    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        let levels = &self.levels;
        LevelFilter::new(self.parse_level().unwrap_or(Level::Info))
            .with_level(Level::Critical, levels.critical)
            .with_level(Level::Error, levels.error)
            .with_level(Level::Warn, levels.warning)
            .with_level(Level::Info, levels.info)
            .with_level(Level::Verbose, levels.verbose)
            .with_level(Level::Debug, levels.debug)
    }
}
