//! Event-driven construction of [`ParsedValue`] trees.

use std::collections::HashMap;

use tracing::trace;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use super::error::ParseFailure;
use super::schema::{resolve_plain, resolve_tagged};
use super::types::{ParseOptions, ParsedValue, YamlVersion};

const EXCESSIVE_ALIASES: &str = "Excessive alias count indicates a resource exhaustion attack";

/// Parse a single YAML document from `source`.
///
/// An empty document is [`ParsedValue::Null`]. A second document is an
/// error.
pub fn parse(source: &str, options: &ParseOptions) -> Result<ParsedValue, ParseFailure> {
    let mut parser = Parser::new_from_str(source);
    let mut builder = ValueBuilder::new(source, options);

    // A problem found before the scanner gave up sits earlier in the source.
    if let Err(e) = parser.load(&mut builder, true)
        && builder.failure.is_none()
    {
        return Err(ParseFailure::from_scan_error(&e, source));
    }

    builder.finish()
}

struct ValueBuilder<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    stack: Vec<Frame>,
    /// Alias weight of each open frame's contents, parallel to `stack`.
    weights: Vec<usize>,
    anchors: HashMap<usize, Anchored>,
    documents: usize,
    root: Option<ParsedValue>,
    /// First semantic error; later events are ignored once set.
    failure: Option<ParseFailure>,
}

enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<ParsedValue>,
    },
    Mapping {
        anchor: usize,
        entries: Vec<(ParsedValue, ParsedValue)>,
        /// Parallel to `entries`: whether the entry came from a merge key.
        merged: Vec<bool>,
        pending_key: Option<PendingKey>,
    },
}

/// An anchored value and how much expanding it has cost so far.
///
/// `alias_count` is 1 for a value without aliases, else the largest weight
/// of an alias inside it. Each reference weighs `count * alias_count`, so
/// nested aliases multiply.
struct Anchored {
    value: ParsedValue,
    alias_count: usize,
    count: usize,
}

struct PendingKey {
    key: ParsedValue,
    is_merge: bool,
    marker: Marker,
}

impl<'a> ValueBuilder<'a> {
    fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            source,
            options,
            stack: Vec::new(),
            weights: Vec::new(),
            anchors: HashMap::new(),
            documents: 0,
            root: None,
            failure: None,
        }
    }

    fn finish(self) -> Result<ParsedValue, ParseFailure> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.root.unwrap_or(ParsedValue::Null)),
        }
    }

    fn fail(&mut self, message: impl Into<String>, marker: &Marker) {
        if self.failure.is_none() {
            self.failure = Some(ParseFailure::at_marker(message, self.source, marker));
        }
    }

    fn open(&mut self, frame: Frame, marker: &Marker) {
        if let Some(max) = self.options.max_depth
            && self.stack.len() >= max
        {
            self.fail(format!("Nesting exceeds the maximum depth of {max}"), marker);
            return;
        }
        self.stack.push(frame);
        self.weights.push(0);
    }

    fn scalar(&self, value: String, style: TScalarStyle, tag: Option<&Tag>) -> ParsedValue {
        match tag {
            Some(tag) => resolve_tagged(&value, &tag.handle, &tag.suffix, self.options.version),
            None if style == TScalarStyle::Plain => resolve_plain(&value, self.options.version),
            None => ParsedValue::string(value),
        }
    }

    fn alias(&mut self, id: usize, marker: Marker) {
        let Some(anchored) = self.anchors.get_mut(&id) else {
            self.push_node(ParsedValue::Null, 0, marker, false, 1);
            return;
        };

        anchored.count += 1;
        let weight = anchored.count.saturating_mul(anchored.alias_count);
        if let Some(max) = self.options.max_alias_count
            && weight > max
        {
            self.fail(EXCESSIVE_ALIASES, &marker);
            return;
        }

        let value = anchored.value.clone();
        self.push_node(value, 0, marker, false, weight);
    }

    fn push_node(
        &mut self,
        value: ParsedValue,
        anchor: usize,
        marker: Marker,
        is_merge: bool,
        weight: usize,
    ) {
        if anchor > 0 {
            let anchored = Anchored { value: value.clone(), alias_count: weight, count: 0 };
            self.anchors.insert(anchor, anchored);
        }
        if let Some(parent) = self.weights.last_mut() {
            *parent = (*parent).max(weight);
        }

        let unique_keys = self.options.unique_keys;
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => {
                if self.root.is_none() {
                    self.root = Some(value);
                }
                return;
            }
        };

        let error = match frame {
            Frame::Sequence { items, .. } => {
                items.push(value);
                None
            }
            Frame::Mapping { entries, merged, pending_key, .. } => match pending_key.take() {
                None => {
                    *pending_key = Some(PendingKey { key: value, is_merge, marker });
                    None
                }
                Some(pending) if pending.is_merge => {
                    merge_into(entries, merged, value).err().map(|m| (m, pending.marker))
                }
                Some(pending) => {
                    insert_entry(entries, merged, pending.key, value, unique_keys)
                        .err()
                        .map(|m| (m, pending.marker))
                }
            },
        };

        if let Some((message, marker)) = error {
            self.fail(message, &marker);
        }
    }
}

fn insert_entry(
    entries: &mut Vec<(ParsedValue, ParsedValue)>,
    merged: &mut Vec<bool>,
    key: ParsedValue,
    value: ParsedValue,
    unique_keys: bool,
) -> Result<(), &'static str> {
    if let Some(index) = entries.iter().position(|(k, _)| *k == key) {
        if merged[index] {
            // Explicit keys override merged ones in place.
            entries[index].1 = value;
            merged[index] = false;
            return Ok(());
        }
        if unique_keys {
            return Err("Map keys must be unique");
        }
    }
    entries.push((key, value));
    merged.push(false);
    Ok(())
}

fn merge_into(
    entries: &mut Vec<(ParsedValue, ParsedValue)>,
    merged: &mut Vec<bool>,
    source: ParsedValue,
) -> Result<(), &'static str> {
    let sources = match source {
        ParsedValue::Mapping(pairs) => vec![pairs],
        ParsedValue::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                ParsedValue::Mapping(pairs) => Ok(pairs),
                _ => Err("Merge sources must be mappings"),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err("Merge sources must be mappings"),
    };

    for (key, value) in sources.into_iter().flatten() {
        if !entries.iter().any(|(k, _)| *k == key) {
            entries.push((key, value));
            merged.push(true);
        }
    }
    Ok(())
}

impl MarkedEventReceiver for ValueBuilder<'_> {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.failure.is_some() {
            return;
        }
        trace!(?ev, line = marker.line(), col = marker.col(), "yaml event");

        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let is_merge = self.options.version == YamlVersion::V1_1
                    && style == TScalarStyle::Plain
                    && tag.is_none()
                    && value == "<<";
                let resolved = self.scalar(value, style, tag.as_ref());
                self.push_node(resolved, anchor, marker, is_merge, 1);
            }
            Event::SequenceStart(anchor, _tag) => {
                self.open(Frame::Sequence { anchor, items: Vec::new() }, &marker);
            }
            Event::MappingStart(anchor, _tag) => {
                self.open(
                    Frame::Mapping {
                        anchor,
                        entries: Vec::new(),
                        merged: Vec::new(),
                        pending_key: None,
                    },
                    &marker,
                );
            }
            Event::SequenceEnd | Event::MappingEnd => {
                let Some(frame) = self.stack.pop() else {
                    return;
                };
                let weight = self.weights.pop().unwrap_or_default();
                let (value, anchor) = match frame {
                    Frame::Sequence { anchor, items } => (ParsedValue::Sequence(items), anchor),
                    Frame::Mapping { anchor, mut entries, pending_key, .. } => {
                        if let Some(pending) = pending_key {
                            entries.push((pending.key, ParsedValue::Null));
                        }
                        (ParsedValue::Mapping(entries), anchor)
                    }
                };
                self.push_node(value, anchor, marker, false, weight);
            }
            Event::Alias(id) => self.alias(id, marker),
            Event::DocumentStart => {
                self.documents += 1;
                if self.documents > 1 {
                    self.fail("Source contains multiple documents", &marker);
                }
            }
            _ => {}
        }
    }
}
