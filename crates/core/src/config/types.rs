use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

use crate::config::loader::parse_date_zone;
use crate::render::{DateZone, RenderOptions};
use crate::yaml::ParseOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub parse: ParseOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Root policy and date display for metadata tables.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub allow_array_at_root: bool,
    pub allow_primitive_at_root: bool,
    /// `"local"`, `"utc"` or a fixed offset such as `"+02:00"`.
    #[serde(deserialize_with = "deserialize_date_zone")]
    pub date_zone: DateZone,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The file the settings came from, if one was read.
    pub source: Option<PathBuf>,
    pub render: RenderConfig,
    pub parse: ParseOptions,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    pub fn defaults() -> Self {
        Self {
            source: None,
            render: RenderConfig::default(),
            parse: ParseOptions::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Build renderer options, keeping the default error formatter.
    pub fn to_render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .allow_array_at_root(self.render.allow_array_at_root)
            .allow_primitive_at_root(self.render.allow_primitive_at_root)
            .parse_options(self.parse.clone())
            .date_zone(self.render.date_zone)
    }
}

fn deserialize_date_zone<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateZone, D::Error> {
    let zone = String::deserialize(deserializer)?;
    parse_date_zone(&zone).map_err(serde::de::Error::custom)
}
