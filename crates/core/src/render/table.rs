//! Conversion of parsed YAML values into nested tables.

use chrono::{DateTime, FixedOffset, Local};

use super::options::DateZone;
use crate::fragment::Fragment;
use crate::yaml::ParsedValue;

/// Turn a value into a fragment. `Null` renders as nothing.
pub fn transform_value(value: &ParsedValue, zone: DateZone) -> Option<Fragment> {
    match value {
        ParsedValue::Null => None,
        ParsedValue::Date(date) => Some(Fragment::text(format_date(date, zone))),
        ParsedValue::Scalar(scalar) => Some(Fragment::text(scalar.to_string())),
        ParsedValue::Sequence(items) => Some(transform_sequence(items, zone)),
        ParsedValue::Mapping(entries) => Some(transform_mapping(entries, zone)),
    }
}

fn transform_mapping(entries: &[(ParsedValue, ParsedValue)], zone: DateZone) -> Fragment {
    let mut head = Vec::with_capacity(entries.len());
    let mut body = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        head.push(create_cell(CellKind::Header, as_children(transform_value(key, zone))));
        body.push(create_cell(CellKind::Data, as_children(transform_value(value, zone))));
    }

    create_table(vec![create_section("thead", head), create_section("tbody", body)])
}

fn transform_sequence(items: &[ParsedValue], zone: DateZone) -> Fragment {
    let body = items
        .iter()
        .map(|item| create_cell(CellKind::Data, as_children(transform_value(item, zone))))
        .collect();

    create_table(vec![create_section("tbody", body)])
}

/// Format a date as `YYYY-MM-DD HH:MM:SS ±HHMM` in the given zone.
///
/// GitHub prints dates in its own server zone; we use the renderer's zone
/// instead.
pub fn format_date(date: &DateTime<FixedOffset>, zone: DateZone) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
    match zone {
        DateZone::Local => date.with_timezone(&Local).format(FORMAT).to_string(),
        DateZone::Fixed(offset) => date.with_timezone(&offset).format(FORMAT).to_string(),
    }
}

/// Wrap a rendered child for insertion into a cell.
///
/// Elements are followed by a newline text node, as GitHub emits them.
pub fn as_children(child: Option<Fragment>) -> Vec<Fragment> {
    match child {
        Some(element @ Fragment::Element(_)) => vec![element, Fragment::text("\n")],
        Some(text) => vec![text],
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `th`: children go in directly.
    Header,
    /// `td`: children are wrapped in a `div`.
    Data,
}

pub fn create_table(children: Vec<Fragment>) -> Fragment {
    Fragment::element("table", children)
}

/// A `thead` or `tbody` holding a single row.
pub fn create_section(tag_name: &str, cells: Vec<Fragment>) -> Fragment {
    Fragment::element(tag_name, vec![Fragment::element("tr", cells)])
}

pub fn create_cell(kind: CellKind, children: Vec<Fragment>) -> Fragment {
    match kind {
        CellKind::Header => Fragment::element("th", children),
        CellKind::Data => Fragment::element("td", vec![Fragment::element("div", children)]),
    }
}
