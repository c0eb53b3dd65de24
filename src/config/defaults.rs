//! Built-in default settings.

use crate::config::types::{Config, COOKIECUTTERS_DIR, DEFAULT_CONTEXT, REPLAY_DIR};
use serde_json::{Map, Value};
use std::path::Path;

const COOKIECUTTERS_SUBDIR: &str = ".cookiecutters/";
const REPLAY_SUBDIR: &str = ".cookiecutter_replay/";

/// Build the default settings rooted at `home`.
///
/// Returns a new value on every call. Without a home directory the
/// directories are left in their unexpanded `~/` form.
///
/// # Arguments
///
/// * `home` - Home directory the default directories live under
///
/// # Returns
///
/// A config holding `cookiecutters_dir`, `replay_dir` and an empty
/// `default_context`.
pub fn default_config(home: Option<&Path>) -> Config {
    let mut config = Config::new();
    config.insert(COOKIECUTTERS_DIR, Value::String(home_relative(home, COOKIECUTTERS_SUBDIR)));
    config.insert(REPLAY_DIR, Value::String(home_relative(home, REPLAY_SUBDIR)));
    config.insert(DEFAULT_CONTEXT, Value::Object(Map::new()));
    config
}

fn home_relative(home: Option<&Path>, subdir: &str) -> String {
    match home {
        Some(home) => home.join(subdir).to_string_lossy().into_owned(),
        None => format!("~/{subdir}"),
    }
}
