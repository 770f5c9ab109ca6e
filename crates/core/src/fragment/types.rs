//! Library-agnostic element and text nodes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A rendered node: either an element or a run of text.
///
/// Serializes as a hast-like object (`{"type": "element", "tagName": ...}`
/// or `{"type": "text", "value": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fragment {
    Element(Element),
    Text(Text),
}

/// An element with ordered properties and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    pub properties: Properties,
    pub children: Vec<Fragment>,
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
}

/// Value of a single property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    /// Space-separated token list, e.g. `className`.
    List(Vec<String>),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Ordered mapping from property name to value.
///
/// Setting an existing name replaces its value in place, so insertion order
/// is the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<(String, PropertyValue)>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Fragment {
    /// Create an element with no properties.
    pub fn element(tag_name: impl Into<String>, children: Vec<Fragment>) -> Self {
        Self::Element(Element {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children,
        })
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text { value: value.into() })
    }

    /// Set a property on an element. Text nodes are returned unchanged.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        if let Self::Element(ref mut element) = self {
            element.properties.set(name, value);
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&text.value),
            Self::Element(_) => None,
        }
    }
}
