//! Configuration for the frontmatter table renderer.

use std::fmt;
use std::sync::Arc;

use chrono::FixedOffset;

use crate::fragment::Fragment;
use crate::yaml::{ParseOptions, Point};

/// Info on a YAML document that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Human readable parse error.
    pub message: String,
    /// Where the error happened in the YAML.
    pub point: Option<Point>,
    /// Codeframe showing where the error happened.
    pub summary: Option<String>,
    /// The original YAML, including its `---` fences.
    pub yaml: String,
}

/// What an error formatter produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterOutput {
    /// A single node; elements are used as-is.
    Single(Fragment),
    /// Several nodes; wrapped in a `div`.
    List(Vec<Fragment>),
}

impl From<Fragment> for FormatterOutput {
    fn from(fragment: Fragment) -> Self {
        Self::Single(fragment)
    }
}

impl From<Vec<Fragment>> for FormatterOutput {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self::List(fragments)
    }
}

/// Builds the content shown for a YAML parse error.
pub type ErrorFormatter = Arc<dyn Fn(&ErrorInfo) -> FormatterOutput + Send + Sync>;

/// Wall-clock zone used to print dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateZone {
    /// The zone of the machine doing the rendering.
    #[default]
    Local,
    Fixed(FixedOffset),
}

/// `local`, or the offset as `+HH:MM`.
impl fmt::Display for DateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateZone::Local => f.write_str("local"),
            DateZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Renderer configuration.
#[derive(Clone)]
pub struct RenderOptions {
    /// Render a sequence at the root instead of suppressing it.
    pub allow_array_at_root: bool,
    /// Render scalars, dates and null at the root instead of suppressing them.
    pub allow_primitive_at_root: bool,
    pub parse_options: ParseOptions,
    pub error_formatter: ErrorFormatter,
    pub date_zone: DateZone,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            allow_array_at_root: false,
            allow_primitive_at_root: false,
            parse_options: ParseOptions::default(),
            error_formatter: Arc::new(super::formatter::default_error_formatter),
            date_zone: DateZone::Local,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_array_at_root(mut self, value: bool) -> Self {
        self.allow_array_at_root = value;
        self
    }

    pub fn allow_primitive_at_root(mut self, value: bool) -> Self {
        self.allow_primitive_at_root = value;
        self
    }

    pub fn parse_options(mut self, value: ParseOptions) -> Self {
        self.parse_options = value;
        self
    }

    pub fn date_zone(mut self, value: DateZone) -> Self {
        self.date_zone = value;
        self
    }

    pub fn error_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&ErrorInfo) -> FormatterOutput + Send + Sync + 'static,
    {
        self.error_formatter = Arc::new(formatter);
        self
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("allow_array_at_root", &self.allow_array_at_root)
            .field("allow_primitive_at_root", &self.allow_primitive_at_root)
            .field("parse_options", &self.parse_options)
            .field("error_formatter", &"<fn>")
            .field("date_zone", &self.date_zone)
            .finish()
    }
}
