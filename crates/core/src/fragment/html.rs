//! Compact HTML serialization of fragments.

use super::types::{Element, Fragment, PropertyValue};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "wbr"];

/// Serialize a fragment to HTML without adding any whitespace.
pub fn to_html(fragment: &Fragment) -> String {
    let mut out = String::new();
    write_fragment(&mut out, fragment);
    out
}

/// Serialize a list of sibling fragments.
pub fn to_html_all(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        write_fragment(&mut out, fragment);
    }
    out
}

fn write_fragment(out: &mut String, fragment: &Fragment) {
    match fragment {
        Fragment::Element(element) => write_element(out, element),
        Fragment::Text(text) => escape_into(out, &text.value, false),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag_name);

    for (name, value) in element.properties.iter() {
        out.push(' ');
        out.push_str(attribute_name(name));
        out.push_str("=\"");
        match value {
            PropertyValue::String(s) => escape_into(out, s, true),
            PropertyValue::List(items) => escape_into(out, &items.join(" "), true),
        }
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag_name.as_str()) {
        return;
    }

    for child in &element.children {
        write_fragment(out, child);
    }

    out.push_str("</");
    out.push_str(&element.tag_name);
    out.push('>');
}

fn attribute_name(property: &str) -> &str {
    match property {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    }
}

fn escape_into(out: &mut String, value: &str, attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
