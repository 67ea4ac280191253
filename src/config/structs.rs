//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Build-wide threshold (`DEBUG`, `VERBOSE`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`).
    pub level: String,
    /// Tag applied to untagged records.
    pub tag: Option<String>,
    /// Prefix bodies with the source location.
    pub location: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "DEBUG".to_string(),
            tag: None,
            location: false,
        }
    }
}

/// Per-level switches, applied on top of the threshold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct LevelsConfig {
    pub critical: bool,
    pub error: bool,
    pub warning: bool,
    pub info: bool,
    pub verbose: bool,
    pub debug: bool,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            critical: true,
            error: true,
            warning: true,
            info: true,
            verbose: true,
            debug: true,
        }
    }
}

/// Which backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Platform priority: system log, then colorized terminal, then plain terminal.
    #[default]
    Auto,
    Terminal,
    Plain,
    File,
    DebugChannel,
    SystemLog,
}

impl BackendKind {
    /// What `Auto` means on this platform.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Auto => {
                if cfg!(target_os = "android") {
                    Self::SystemLog
                } else if cfg!(windows) {
                    Self::Plain
                } else {
                    Self::Terminal
                }
            }
            other => other,
        }
    }
}

/// Output selection.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub backend: BackendKind,
}

/// Escape dialect for the colorized terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    #[default]
    Ansi,
    Xcode,
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TerminalConfig {
    /// Color even where the platform default is plain.
    pub force_colors: bool,
    pub scheme: SchemeKind,
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Log file path; `~` is expanded.
    pub path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: crate::output::DEFAULT_LOG_FILE.to_string(),
        }
    }
}
