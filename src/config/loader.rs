//! Configuration file loading.

use crate::config::defaults::default_config;
use crate::config::parser::{resolve_parser, ConfigParser, SourceFormat};
use crate::config::paths::{home_dir, user_config_path};
use crate::config::Config;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file does not exist: {}", path.display())]
    DoesNotExist { path: PathBuf },

    #[error("failed to read configuration file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid {format} file: line {line}: {problem}", path.display())]
    InvalidConfiguration {
        path: PathBuf,
        format: SourceFormat,
        line: usize,
        column: usize,
        problem: String,
    },

    #[error("{} must contain a mapping at the top level, found {found}", path.display())]
    NotAMapping { path: PathBuf, found: &'static str },
}

/// Loads config files and merges them over the default settings.
pub struct ConfigLoader {
    parser: Box<dyn ConfigParser>,
    home: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader using the best available parser and the current
    /// user's home directory.
    pub fn new() -> Self {
        Self {
            parser: resolve_parser(),
            home: home_dir(),
        }
    }

    /// Use a specific parser instead of looking one up.
    pub fn with_parser(mut self, parser: impl ConfigParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Root defaults and the user config lookup at `home`.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn format(&self) -> SourceFormat {
        self.parser.format()
    }

    /// Home directory used for the defaults, the rc path and `~` expansion.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// A fresh copy of the default settings.
    pub fn defaults(&self) -> Config {
        default_config(self.home.as_deref())
    }

    /// Path of the user config file, if a home directory is known.
    pub fn user_config_path(&self) -> Option<PathBuf> {
        self.home.as_deref().map(user_config_path)
    }

    /// Load the config file at `path` and overlay it on the defaults.
    ///
    /// Keys in the file replace default keys of the same name; default keys
    /// the file omits are kept. A blank or empty document yields the
    /// defaults unchanged.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The defaults overlaid with the file's top-level keys, or
    /// `DoesNotExist`, `ReadError`, `InvalidConfiguration` or `NotAMapping`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::DoesNotExist {
                path: path.to_path_buf(),
            });
        }

        debug!(
            config_path = %path.display(),
            parser = self.parser.name(),
            "reading config"
        );

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let document = if contents.trim().is_empty() {
            Value::Null
        } else {
            self.parser
                .parse(&contents)
                .map_err(|failure| ConfigError::InvalidConfiguration {
                    path: path.to_path_buf(),
                    format: self.parser.format(),
                    line: failure.line,
                    column: failure.column,
                    problem: failure.problem,
                })?
        };

        let mut config = self.defaults();
        match document {
            Value::Object(map) => config.overlay(map),
            Value::Null => {}
            other => {
                return Err(ConfigError::NotAMapping {
                    path: path.to_path_buf(),
                    found: value_kind(&other),
                });
            }
        }

        Ok(config)
    }

    /// Load `~/.cookiecutterrc` if it exists, otherwise return the defaults.
    pub fn load_user_config(&self) -> Result<Config, ConfigError> {
        match self.user_config_path() {
            Some(path) if path.exists() => self.load(path),
            _ => {
                debug!("no user config file, using defaults");
                Ok(self.defaults())
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the config file at `path` over the defaults.
pub fn get_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    ConfigLoader::new().load(path)
}

/// Load the current user's `~/.cookiecutterrc`, or the defaults if absent.
pub fn get_user_config() -> Result<Config, ConfigError> {
    ConfigLoader::new().load_user_config()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
