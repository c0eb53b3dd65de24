//! Structured-data parsers for the user config file.
//!
//! YAML is preferred: serde_yaml first, serde_norway as the alternate. When
//! the crate is built with neither YAML feature the loader falls back to
//! strict JSON. Parsers sit behind [`ConfigParser`] so callers (and tests)
//! can force any one of them.

use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Document format understood by a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Yaml => f.write_str("YAML"),
            SourceFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Where and why a document failed to parse.
///
/// Line and column are 1-based; both are 0 when the backend reports no
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub column: usize,
    pub problem: String,
}

/// No YAML backend is compiled into this build.
#[derive(Debug, Error)]
#[error("no YAML parser available (built without the `yaml` feature)")]
pub struct ParserUnavailable;

/// A parser turning config file text into a document tree.
pub trait ConfigParser: Send + Sync {
    /// Backend crate name, for logs.
    fn name(&self) -> &'static str;

    /// Format this parser reads.
    fn format(&self) -> SourceFormat;

    /// Parse the whole document.
    fn parse(&self, contents: &str) -> Result<Value, ParseFailure>;
}

// serde_yaml and serde_norway share one API, so both backends parse the same
// way: build a YAML value, resolve `<<` merge keys, then convert.
#[cfg(any(feature = "yaml", feature = "yaml-norway"))]
macro_rules! parse_yaml_with {
    ($yaml:ident, $contents:expr) => {{
        let located = |e: $yaml::Error| {
            let (line, column) = e
                .location()
                .map(|loc| (loc.line(), loc.column()))
                .unwrap_or((0, 0));
            ParseFailure {
                line,
                column,
                problem: strip_location(&e.to_string()),
            }
        };

        let mut document: $yaml::Value = $yaml::from_str($contents).map_err(located)?;
        document.apply_merge().map_err(located)?;

        serde_json::to_value(document).map_err(|e| ParseFailure {
            line: 0,
            column: 0,
            problem: e.to_string(),
        })
    }};
}

/// YAML parser backed by `serde_yaml`.
#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

#[cfg(feature = "yaml")]
impl ConfigParser for YamlParser {
    fn name(&self) -> &'static str {
        "serde_yaml"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Yaml
    }

    fn parse(&self, contents: &str) -> Result<Value, ParseFailure> {
        parse_yaml_with!(serde_yaml, contents)
    }
}

/// Alternate YAML parser backed by `serde_norway`.
#[cfg(feature = "yaml-norway")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NorwayYamlParser;

#[cfg(feature = "yaml-norway")]
impl ConfigParser for NorwayYamlParser {
    fn name(&self) -> &'static str {
        "serde_norway"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Yaml
    }

    fn parse(&self, contents: &str) -> Result<Value, ParseFailure> {
        parse_yaml_with!(serde_norway, contents)
    }
}

/// Strict JSON parser backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl ConfigParser for JsonParser {
    fn name(&self) -> &'static str {
        "serde_json"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn parse(&self, contents: &str) -> Result<Value, ParseFailure> {
        serde_json::from_str(contents).map_err(|e| ParseFailure {
            line: e.line(),
            column: e.column(),
            problem: strip_location(&e.to_string()),
        })
    }
}

/// Look up a YAML parser.
///
/// Tries serde_yaml (`yaml` feature), then serde_norway (`yaml-norway`
/// feature). Fails when neither is compiled in.
pub fn get_yaml_parser() -> Result<Box<dyn ConfigParser>, ParserUnavailable> {
    primary_yaml()
        .or_else(|| {
            let parser = alternate_yaml();
            if parser.is_some() {
                debug!("serde_yaml not built in, using serde_norway");
            }
            parser
        })
        .ok_or(ParserUnavailable)
}

fn primary_yaml() -> Option<Box<dyn ConfigParser>> {
    #[cfg(feature = "yaml")]
    {
        Some(Box::new(YamlParser))
    }
    #[cfg(not(feature = "yaml"))]
    {
        None
    }
}

fn alternate_yaml() -> Option<Box<dyn ConfigParser>> {
    #[cfg(feature = "yaml-norway")]
    {
        Some(Box::new(NorwayYamlParser))
    }
    #[cfg(not(feature = "yaml-norway"))]
    {
        None
    }
}

/// Pick the parser for config files: YAML if available, else JSON.
pub fn resolve_parser() -> Box<dyn ConfigParser> {
    match get_yaml_parser() {
        Ok(parser) => parser,
        Err(e) => {
            debug!(reason = %e, "falling back to JSON config parser");
            Box::new(JsonParser)
        }
    }
}

const POSITION_MARKER: &str = " at line ";

/// Drop every " at line L column C" the backends embed in their messages.
///
/// The position is reported separately; scanner errors also carry a
/// second, context position that would contradict it.
fn strip_location(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(idx) = rest.find(POSITION_MARKER) {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + POSITION_MARKER.len()..];
        match skip_position(after) {
            Some(remaining) => rest = remaining,
            None => {
                out.push_str(POSITION_MARKER);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// "L column C" at the start of `s`; returns what follows it.
fn skip_position(s: &str) -> Option<&str> {
    let s = skip_digits(s)?;
    let s = s.strip_prefix(" column ")?;
    skip_digits(s)
}

fn skip_digits(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then_some(&s[end..])
}
