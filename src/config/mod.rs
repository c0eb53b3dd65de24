//! User configuration loading, parsing, and default settings.

mod defaults;
mod loader;
mod parser;
mod paths;
mod types;

pub use defaults::default_config;
pub use loader::{get_config, get_user_config, ConfigError, ConfigLoader};
pub use parser::{
    get_yaml_parser, resolve_parser, ConfigParser, JsonParser, ParseFailure, ParserUnavailable,
    SourceFormat,
};
#[cfg(feature = "yaml-norway")]
pub use parser::NorwayYamlParser;
#[cfg(feature = "yaml")]
pub use parser::YamlParser;
pub use paths::{expand_user, home_dir, user_config_path, USER_CONFIG_FILE};
pub use types::*;
