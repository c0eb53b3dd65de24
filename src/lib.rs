//! cookiecutter-config - user configuration for the cookiecutter scaffolding tool
//!
//! Reads `~/.cookiecutterrc` and merges it over built-in defaults:
//! - `cookiecutters_dir`: where cloned templates are kept
//! - `replay_dir`: where replay data is stored
//! - `default_context`: default template-variable overrides
//!
//! Files are parsed as YAML when the `yaml` feature is enabled (the default)
//! and as strict JSON otherwise.

pub mod config;
pub mod util;

pub use config::{get_config, get_user_config, Config, ConfigError, ConfigLoader};
