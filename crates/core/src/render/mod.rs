//! Frontmatter table rendering.
//!
//! [`render`] parses raw frontmatter YAML and produces one of three
//! outcomes: a table-shaped [`Fragment`](crate::fragment::Fragment), an
//! error fragment built by the configured formatter, or a signal that the
//! block should be rendered as plain markdown instead.

pub mod formatter;
pub mod options;
pub mod renderer;
pub mod table;

pub use formatter::default_error_formatter;
pub use options::{DateZone, ErrorFormatter, ErrorInfo, FormatterOutput, RenderOptions};
pub use renderer::{RenderOutcome, error_info, render};
pub use table::{format_date, transform_value};
