//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::{BackendKind, Config, SchemeKind, TerminalConfig};
use crate::output::{ColorScheme, FileOutput, Output, TerminalOutput};

impl Logger {
    /// Builds the single backend the config selects. An unknown `general.level` falls back
    /// to INFO, and the logger just built reports that about itself.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = LoggerBuilder::new()
            .filter(config.level_filter())
            .location(config.general.location)
            .boxed_output(Self::configure_output(config));

        if let Some(tag) = &config.general.tag {
            builder = builder.tag(tag);
        }

        let logger = builder.build();
        if config.parse_level().is_err() {
            let _ = logger.level_from_string(&config.general.level);
        }
        logger
    }

    /// Loads the default config file (defaults when missing or broken) and builds from it.
    #[must_use]
    pub fn from_default_config() -> Self {
        Self::from_config(&Config::load().unwrap_or_default())
    }

    fn configure_output(config: &Config) -> Box<dyn Output> {
        match config.output.backend.resolve() {
            BackendKind::File => Box::new(FileOutput::new().path(&config.file.path)),
            BackendKind::Plain => {
                Box::new(TerminalOutput::plain().colors(config.terminal.force_colors))
            }
            BackendKind::SystemLog => Self::system_log(),
            BackendKind::DebugChannel => Self::debug_channel(),
            BackendKind::Terminal | BackendKind::Auto => {
                Box::new(Self::configure_terminal(&config.terminal))
            }
        }
    }

    /// `force_colors` wins over scheme detection: a forced Xcode scheme colors even when
    /// the plugin variable is absent.
    fn configure_terminal(terminal: &TerminalConfig) -> TerminalOutput {
        let scheme = match terminal.scheme {
            SchemeKind::Ansi => ColorScheme::Ansi,
            SchemeKind::Xcode => ColorScheme::Xcode,
        };
        let output = TerminalOutput::new().scheme(scheme);
        if terminal.force_colors {
            output.colors(true)
        } else {
            output
        }
    }

    #[cfg(target_os = "android")]
    fn system_log() -> Box<dyn Output> {
        Box::new(crate::output::SystemLogOutput::new(crate::output::Logd::new()))
    }

    #[cfg(target_os = "android")]
    fn debug_channel() -> Box<dyn Output> {
        Box::new(crate::output::DebugChannelOutput::new(
            crate::output::Logd::new(),
        ))
    }

    #[cfg(all(unix, not(target_os = "android")))]
    fn system_log() -> Box<dyn Output> {
        Box::new(crate::output::SystemLogOutput::new(
            crate::output::Syslog::new(),
        ))
    }

    #[cfg(all(unix, not(target_os = "android")))]
    fn debug_channel() -> Box<dyn Output> {
        Box::new(crate::output::DebugChannelOutput::new(
            crate::output::Syslog::new(),
        ))
    }

    // No native channel reachable without FFI: fall back to the plain console.
    #[cfg(not(unix))]
    fn system_log() -> Box<dyn Output> {
        Box::new(TerminalOutput::plain())
    }

    #[cfg(not(unix))]
    fn debug_channel() -> Box<dyn Output> {
        Box::new(TerminalOutput::plain())
    }
}
