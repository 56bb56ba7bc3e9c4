//! Configuration system for ferr.
//!
//! Values are resolved in three layers:
//! - built-in defaults
//! - a TOML file (`--config`, else `$XDG_CONFIG_HOME/ferr/config.toml`)
//! - `FERR_` environment variables
//!
//! Every effective value remembers which layer it came from.

pub mod env;
pub mod source;

pub use env::{EnvError, EnvParser};
pub use source::{ConfigSource, ConfigValueSource, Sourced};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::logging::LogFormat;
use crate::logref::DisplayFormat;
use env::LOG_LEVELS;

/// Default wrap width for text output; 0 prints text as published.
pub const DEFAULT_WRAP_WIDTH: u32 = 0;
/// Largest accepted wrap width.
pub const MAX_WRAP_WIDTH: u32 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key} in {path}: {message}")]
    Invalid {
        path: PathBuf,
        key: &'static str,
        message: String,
    },
}

/// On-disk configuration. Every field is optional so that only the keys
/// present in the file override defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub logging: LoggingSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub format: Option<DisplayFormat>,
    pub wrap_width: Option<u32>,
}

impl FileConfig {
    /// Parse TOML text.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: FileConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(level) = &self.logging.level
            && !LOG_LEVELS.contains(&level.to_lowercase().as_str())
        {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "logging.level",
                message: format!("unknown log level '{}'", level),
            });
        }
        if let Some(width) = self.display.wrap_width
            && width > MAX_WRAP_WIDTH
        {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "display.wrap_width",
                message: format!("{} exceeds {}", width, MAX_WRAP_WIDTH),
            });
        }
        Ok(())
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Serialize)]
pub struct FerrConfig {
    pub log_level: Sourced<String>,
    pub log_format: Sourced<LogFormat>,
    pub log_file: Sourced<Option<PathBuf>>,
    pub display_format: Sourced<DisplayFormat>,
    pub wrap_width: Sourced<u32>,
    /// File that was loaded, if any.
    pub config_path: Option<PathBuf>,
    /// Environment problems that fell back to lower layers.
    #[serde(skip)]
    pub env_errors: Vec<EnvError>,
}

impl Default for FerrConfig {
    fn default() -> Self {
        Self {
            log_level: Sourced::default_value(DEFAULT_LOG_LEVEL.to_string()),
            log_format: Sourced::default_value(LogFormat::default()),
            log_file: Sourced::default_value(None),
            display_format: Sourced::default_value(DisplayFormat::default()),
            wrap_width: Sourced::default_value(DEFAULT_WRAP_WIDTH),
            config_path: None,
            env_errors: Vec::new(),
        }
    }
}

impl FerrConfig {
    /// Resolve defaults, file and environment.
    ///
    /// An explicit path must exist. The default path is skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let candidate = explicit.map(Path::to_path_buf).or_else(default_config_path);
        if let Some(path) = candidate {
            if explicit.is_some() || path.exists() {
                let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                let file = FileConfig::parse(&text, &path)?;
                config.apply_file(file, &path);
                debug!(path = %path.display(), "Loaded config file");
            } else {
                debug!(path = %path.display(), "No config file, using defaults");
            }
        }

        config.apply_env(&mut EnvParser::new());
        Ok(config)
    }

    /// Overlay values present in a config file.
    pub fn apply_file(&mut self, file: FileConfig, path: &Path) {
        if let Some(level) = file.logging.level {
            self.log_level = Sourced::from_file(level.to_lowercase(), path);
        }
        if let Some(format) = file.logging.format {
            self.log_format = Sourced::from_file(format, path);
        }
        if let Some(log_file) = file.logging.file {
            let expanded = env::expand_home(&log_file.to_string_lossy());
            self.log_file = Sourced::from_file(Some(expanded), path);
        }
        if let Some(format) = file.display.format {
            self.display_format = Sourced::from_file(format, path);
        }
        if let Some(width) = file.display.wrap_width {
            self.wrap_width = Sourced::from_file(width, path);
        }
        self.config_path = Some(path.to_path_buf());
    }

    /// Overlay `FERR_` environment variables. Invalid values keep the lower
    /// layer and are recorded in `env_errors`.
    pub fn apply_env(&mut self, parser: &mut EnvParser) {
        let level = parser.get_log_level("LOG_LEVEL", &self.log_level.value);
        if level.is_overridden() {
            self.log_level = level;
        }

        let format = parser.get_parsed("LOG_FORMAT", self.log_format.value, "pretty|json");
        if format.is_overridden() {
            self.log_format = format;
        }

        let file = parser.get_optional_path("LOG_FILE");
        if file.is_overridden() {
            self.log_file = file;
        }

        let display = parser.get_parsed("DISPLAY_FORMAT", self.display_format.value, "text|json");
        if display.is_overridden() {
            self.display_format = display;
        }

        let width = parser.get_u32_range("WRAP_WIDTH", self.wrap_width.value, 0, MAX_WRAP_WIDTH);
        if width.is_overridden() {
            self.wrap_width = width;
        }

        self.env_errors.extend(parser.take_errors());
    }

    /// Render the effective configuration with value origins.
    pub fn describe(&self) -> String {
        let file = self
            .log_file
            .value
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut output = String::new();
        output.push_str(&format!(
            "config file     {}\n",
            self.config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        ));
        output.push_str(&format!(
            "log_level       {:<24} ({})\n",
            self.log_level.value, self.log_level.origin
        ));
        output.push_str(&format!(
            "log_format      {:<24} ({})\n",
            self.log_format.value.to_string(),
            self.log_format.origin
        ));
        output.push_str(&format!(
            "log_file        {:<24} ({})\n",
            file, self.log_file.origin
        ));
        output.push_str(&format!(
            "display_format  {:<24} ({})\n",
            self.display_format.value.to_string(),
            self.display_format.origin
        ));
        output.push_str(&format!(
            "wrap_width      {:<24} ({})\n",
            self.wrap_width.value, self.wrap_width.origin
        ));
        output
    }
}

/// `$XDG_CONFIG_HOME/ferr/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ferr").join("config.toml"))
}

#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}
