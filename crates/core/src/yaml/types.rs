//! Parsed YAML values and parse options.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A parsed YAML value.
///
/// Mappings are an ordered list of pairs: keys may be composite and may
/// repeat.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Null,
    Scalar(Scalar),
    Date(DateTime<FixedOffset>),
    Sequence(Vec<ParsedValue>),
    Mapping(Vec<(ParsedValue, ParsedValue)>),
}

impl ParsedValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Str(value.into()))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

/// A resolved scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Generic string coercion, matching how a JavaScript host prints the value.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => f.write_str(&format_float(*x)),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            format!("{mantissa}e+{power}")
        }
        _ => exp,
    }
}

/// Which YAML type repository resolves plain scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum YamlVersion {
    /// YAML 1.1, as GitHub uses it.
    #[default]
    #[serde(rename = "1.1")]
    V1_1,
    /// YAML 1.2 core schema.
    #[serde(rename = "1.2")]
    V1_2,
}

impl fmt::Display for YamlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlVersion::V1_1 => f.write_str("1.1"),
            YamlVersion::V1_2 => f.write_str("1.2"),
        }
    }
}

impl std::str::FromStr for YamlVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.1" => Ok(YamlVersion::V1_1),
            "1.2" => Ok(YamlVersion::V1_2),
            other => Err(format!("unsupported YAML version '{other}' (expected 1.1 or 1.2)")),
        }
    }
}

/// Options forwarded to the YAML parser.
///
/// The defaults follow GitHub: YAML 1.1 and duplicate keys allowed.
///
/// The limits are `Option`s so library callers can lift them. The config
/// file can only change a limit, since TOML has no null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub version: YamlVersion,
    /// Reject mappings that repeat a key.
    pub unique_keys: bool,
    /// Maximum nesting of collections.
    pub max_depth: Option<usize>,
    /// Budget for alias expansion; nested aliases count multiplicatively.
    pub max_alias_count: Option<usize>,
}

pub const DEFAULT_MAX_DEPTH: usize = 512;
pub const DEFAULT_MAX_ALIAS_COUNT: usize = 100;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            version: YamlVersion::V1_1,
            unique_keys: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_alias_count: Some(DEFAULT_MAX_ALIAS_COUNT),
        }
    }
}

/// A 1-based position in the YAML source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}
