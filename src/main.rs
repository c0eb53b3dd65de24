//! cookiecutter-config - print the resolved cookiecutter user configuration
//!
//! Usage:
//!     cookiecutter-config [--config <path>] [--format yaml|json]
//!
//! See --help for more options.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use cookiecutter_config::config::{get_user_config, Config, ConfigLoader};
use cookiecutter_config::util::{init_logging, LogFormat};

/// Print the cookiecutter configuration after merging it over the defaults.
#[derive(Parser, Debug)]
#[command(name = "cookiecutter-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to load instead of ~/.cookiecutterrc
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the built-in defaults without reading any file
    #[arg(long, conflicts_with = "config")]
    defaults: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.log_format);

    let loader = ConfigLoader::new();
    info!(format = %loader.format(), home = ?loader.home(), "config loader ready");

    let config = if cli.defaults {
        loader.defaults()
    } else if let Some(path) = &cli.config {
        loader
            .load(path)
            .with_context(|| format!("failed to load configuration from '{}'", path.display()))?
    } else {
        get_user_config().context("failed to load user configuration")?
    };

    print!("{}", render(&config, cli.format)?);
    Ok(())
}

fn render(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = config.to_json_string().context("failed to render JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => render_yaml(config),
    }
}

#[cfg(feature = "yaml")]
fn render_yaml(config: &Config) -> Result<String> {
    config.to_yaml_string().context("failed to render YAML")
}

#[cfg(not(feature = "yaml"))]
fn render_yaml(_config: &Config) -> Result<String> {
    anyhow::bail!("YAML output requires the `yaml` feature; use --format json")
}
