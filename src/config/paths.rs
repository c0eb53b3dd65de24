//! Home directory and user config path resolution.

use std::path::{Component, Path, PathBuf};

/// File name of the user configuration file, relative to the home directory.
pub const USER_CONFIG_FILE: &str = ".cookiecutterrc";

/// Resolve the current user's home directory.
///
/// `HOME` wins, then `USERPROFILE`, then whatever the platform reports.
pub fn home_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return Some(PathBuf::from(home));
    }

    if let Some(profile) = std::env::var_os("USERPROFILE").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(profile));
    }

    dirs::home_dir()
}

/// Location of `~/.cookiecutterrc` under the given home directory.
pub fn user_config_path(home: &Path) -> PathBuf {
    home.join(USER_CONFIG_FILE)
}

/// Expand a leading `~` component to `home`.
///
/// Paths that don't start with `~`, or `~user` forms, are returned unchanged,
/// as is everything when no home directory is known.
pub fn expand_user(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => home.join(components.as_path()),
        _ => path.to_path_buf(),
    }
}
