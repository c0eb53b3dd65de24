//! Configuration data types.

use crate::config::paths::expand_user;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Key holding the directory where cloned templates are stored.
pub const COOKIECUTTERS_DIR: &str = "cookiecutters_dir";

/// Key holding the directory where replay data is stored.
pub const REPLAY_DIR: &str = "replay_dir";

/// Key holding default template-variable overrides.
pub const DEFAULT_CONTEXT: &str = "default_context";

/// Resolved user configuration.
///
/// A flat mapping of top-level keys. The three well-known keys are always
/// present after loading; any other keys from the user file pass through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Config(Map<String, Value>);

impl Config {
    /// Create an empty config.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Overlay `other` onto this config.
    ///
    /// Top-level keys from `other` replace existing ones wholesale; nested
    /// mappings are not merged.
    pub fn overlay(&mut self, other: Map<String, Value>) {
        for (key, value) in other {
            self.0.insert(key, value);
        }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a top-level key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Template storage directory, with a leading `~` expanded to `home`.
    ///
    /// Pass the same home the config was loaded with (see
    /// `ConfigLoader::home`) so user values and defaults agree.
    pub fn cookiecutters_dir(&self, home: Option<&Path>) -> Option<PathBuf> {
        self.dir(COOKIECUTTERS_DIR, home)
    }

    /// Replay data directory, with a leading `~` expanded to `home`.
    pub fn replay_dir(&self, home: Option<&Path>) -> Option<PathBuf> {
        self.dir(REPLAY_DIR, home)
    }

    /// Default template-variable overrides.
    ///
    /// `None` when the key is missing or the user replaced it with something
    /// that isn't a mapping.
    pub fn default_context(&self) -> Option<&Map<String, Value>> {
        self.0.get(DEFAULT_CONTEXT).and_then(Value::as_object)
    }

    fn dir(&self, key: &str, home: Option<&Path>) -> Option<PathBuf> {
        let raw = self.0.get(key)?.as_str()?;
        Some(expand_user(Path::new(raw), home))
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }

    /// Render as a YAML document.
    #[cfg(feature = "yaml")]
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.0)
    }
}

impl From<Map<String, Value>> for Config {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_overlay_replaces_top_level_keys() {
        let mut config = Config::from(object(json!({
            "cookiecutters_dir": "/a",
            "replay_dir": "/b",
            "default_context": {},
        })));

        config.overlay(object(json!({ "cookiecutters_dir": "/tmp/cc", "extra": 1 })));

        assert_eq!(config.get(COOKIECUTTERS_DIR), Some(&json!("/tmp/cc")));
        assert_eq!(config.get(REPLAY_DIR), Some(&json!("/b")));
        assert_eq!(config.get("extra"), Some(&json!(1)));
        assert!(config.contains_key(DEFAULT_CONTEXT));
    }

    #[test]
    fn test_overlay_is_shallow() {
        let mut config = Config::from(object(json!({
            "default_context": { "full_name": "Alice", "email": "alice@example.com" },
        })));

        config.overlay(object(json!({ "default_context": { "full_name": "Bob" } })));

        let context = config.default_context().unwrap();
        assert_eq!(context.len(), 1);
        assert_eq!(context.get("full_name"), Some(&json!("Bob")));
    }

    #[test]
    fn test_default_context_not_a_mapping() {
        let config = Config::from(object(json!({ "default_context": "oops" })));
        assert!(config.default_context().is_none());
    }

    #[test]
    fn test_absolute_dirs_are_not_rewritten() {
        let config = Config::from(object(json!({
            "cookiecutters_dir": "/srv/templates",
            "replay_dir": 42,
        })));

        let home = Path::new("/home/alice");
        assert_eq!(
            config.cookiecutters_dir(Some(home)),
            Some(PathBuf::from("/srv/templates"))
        );
        assert_eq!(config.replay_dir(Some(home)), None);
    }

    #[test]
    fn test_tilde_dirs_expand_against_given_home() {
        let config = Config::from(object(json!({
            "cookiecutters_dir": "~/templates",
            "replay_dir": "~/.cookiecutter_replay/",
        })));

        let home = Path::new("/home/alice");
        assert_eq!(
            config.cookiecutters_dir(Some(home)),
            Some(PathBuf::from("/home/alice/templates"))
        );
        assert_eq!(
            config.replay_dir(Some(home)),
            Some(PathBuf::from("/home/alice/.cookiecutter_replay"))
        );
        assert_eq!(config.replay_dir(None), Some(PathBuf::from("~/.cookiecutter_replay/")));
    }

    #[test]
    fn test_json_rendering_is_transparent() {
        let config = Config::from(object(json!({ "replay_dir": "/r" })));
        let rendered = config.to_json_string().unwrap();
        let parsed: Config = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
        assert!(rendered.contains("\"replay_dir\": \"/r\""));
    }
}
