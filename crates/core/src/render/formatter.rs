//! Default error content, modelled on GitHub's YAML error banner.

use super::options::{ErrorInfo, FormatterOutput};
use crate::fragment::Fragment;

/// Build a flash error banner followed by the offending YAML in a `pre`.
pub fn default_error_formatter(info: &ErrorInfo) -> FormatterOutput {
    let location = info
        .point
        .map(|p| format!(" at line {} column {}", p.line, p.column))
        .unwrap_or_default();

    let banner = Fragment::element(
        "div",
        vec![Fragment::text(format!(
            "Error in user YAML: (<unknown>): {}{location}",
            info.message
        ))],
    )
    .with_property("className", classes(&["flash", "flash-error", "mb-3"]));

    let source = Fragment::element(
        "div",
        vec![Fragment::element("pre", vec![Fragment::text(info.yaml.clone())])],
    )
    .with_property("className", classes(&["highlight", "highlight-source-yaml"]));

    FormatterOutput::List(vec![banner, source])
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::to_html_all;
    use crate::yaml::Point;

    #[test]
    fn banner_includes_location_when_known() {
        let info = ErrorInfo {
            message: "Missing closing \"quote".into(),
            point: Some(Point { line: 2, column: 5 }),
            summary: None,
            yaml: "---\na:\n  \"b\n---".into(),
        };

        let FormatterOutput::List(nodes) = default_error_formatter(&info) else {
            panic!("expected a list");
        };
        assert_eq!(
            to_html_all(&nodes),
            "<div class=\"flash flash-error mb-3\">Error in user YAML: (&lt;unknown&gt;): \
             Missing closing \"quote at line 2 column 5</div>\
             <div class=\"highlight highlight-source-yaml\"><pre>---\na:\n  \"b\n---</pre></div>"
        );
    }

    #[test]
    fn banner_omits_location_when_unknown() {
        let info = ErrorInfo {
            message: "bad".into(),
            point: None,
            summary: None,
            yaml: "---\nx\n---".into(),
        };

        let FormatterOutput::List(nodes) = default_error_formatter(&info) else {
            panic!("expected a list");
        };
        assert_eq!(nodes[0].as_element().unwrap().children, vec![Fragment::text(
            "Error in user YAML: (<unknown>): bad"
        )]);
    }
}
