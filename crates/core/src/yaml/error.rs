//! Structured YAML parse failures.
//!
//! This is the only place that knows how the underlying parser reports
//! errors; everything downstream works with [`ParseFailure`].

use thiserror::Error;
use yaml_rust2::ScanError;
use yaml_rust2::scanner::Marker;

use super::types::Point;

/// A YAML document that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseFailure {
    /// Human readable reason, without location.
    pub message: String,
    /// Where the error happened.
    pub point: Option<Point>,
    /// Codeframe: the offending source line and a caret under the column.
    pub summary: Option<String>,
}

impl ParseFailure {
    /// Build a failure pointing at `point` in `source`.
    pub fn at(message: impl Into<String>, source: &str, point: Point) -> Self {
        Self { message: message.into(), point: Some(point), summary: codeframe(source, point) }
    }

    pub(crate) fn at_marker(message: impl Into<String>, source: &str, marker: &Marker) -> Self {
        Self::at(message, source, point_from_marker(marker))
    }

    /// Convert a scanner error into a failure.
    pub fn from_scan_error(err: &ScanError, source: &str) -> Self {
        Self::at_marker(err.info(), source, err.marker())
    }
}

fn point_from_marker(marker: &Marker) -> Point {
    // Lines are already 1-based; columns are 0-based.
    Point { line: marker.line().max(1), column: marker.col() + 1 }
}

fn codeframe(source: &str, point: Point) -> Option<String> {
    let line = source.split('\n').nth(point.line.checked_sub(1)?)?;
    let line = line.strip_suffix('\r').unwrap_or(line);
    let width = line.chars().count() + 1;
    let caret = " ".repeat(point.column.clamp(1, width) - 1);
    Some(format!("{line}\n{caret}^"))
}
