//! Frontmatter table rendering: parse, transform, apply root policy.

use tracing::{debug, warn};

use super::options::{ErrorInfo, FormatterOutput, RenderOptions};
use super::table::{
    CellKind, as_children, create_cell, create_section, create_table, transform_value,
};
use crate::fragment::Fragment;
use crate::frontmatter::fence;
use crate::yaml::{self, ParseFailure, ParsedValue};

/// Result of rendering one frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A table-shaped tree representing the YAML.
    Rendered(Fragment),
    /// The root value is not rendered under the current options; the
    /// caller should treat the fenced block as ordinary markdown.
    Suppressed,
    /// The YAML did not parse; holds the error formatter's output.
    Failed(Fragment),
}

impl RenderOutcome {
    /// The fragment to splice into the document, if any.
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Self::Rendered(fragment) | Self::Failed(fragment) => Some(fragment),
            Self::Suppressed => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rendered(_) => "rendered",
            Self::Suppressed => "suppressed",
            Self::Failed(_) => "failed",
        }
    }
}

/// Render raw frontmatter YAML (without its `---` fences).
///
/// YAML errors never escape: they become [`RenderOutcome::Failed`].
pub fn render(raw: &str, options: &RenderOptions) -> RenderOutcome {
    let outcome = match yaml::parse(raw, &options.parse_options) {
        Ok(value) => apply_root_policy(&value, options),
        Err(failure) => {
            warn!(
                message = %failure.message,
                line = failure.point.map(|p| p.line),
                column = failure.point.map(|p| p.column),
                "frontmatter is not valid YAML"
            );
            let info = error_info(failure, raw);
            RenderOutcome::Failed(wrap_formatter_output((options.error_formatter)(&info)))
        }
    };

    debug!(outcome = outcome.kind(), "rendered frontmatter");
    outcome
}

fn apply_root_policy(value: &ParsedValue, options: &RenderOptions) -> RenderOutcome {
    if value.is_sequence() && !options.allow_array_at_root {
        return RenderOutcome::Suppressed;
    }

    let result = transform_value(value, options.date_zone);

    if options.allow_primitive_at_root {
        return match result {
            Some(element @ Fragment::Element(_)) => RenderOutcome::Rendered(element),
            other => RenderOutcome::Rendered(create_table(vec![create_section(
                "tbody",
                vec![create_cell(CellKind::Data, as_children(other))],
            )])),
        };
    }

    match result {
        Some(element @ Fragment::Element(_)) => RenderOutcome::Rendered(element),
        Some(Fragment::Text(_)) | None => RenderOutcome::Suppressed,
    }
}

/// Build the info handed to the error formatter.
pub fn error_info(failure: ParseFailure, raw: &str) -> ErrorInfo {
    ErrorInfo {
        message: failure.message,
        point: failure.point,
        summary: failure.summary,
        yaml: fence(raw),
    }
}

fn wrap_formatter_output(output: FormatterOutput) -> Fragment {
    match output {
        FormatterOutput::Single(element @ Fragment::Element(_)) => element,
        FormatterOutput::Single(text) => Fragment::element("div", vec![text]),
        FormatterOutput::List(children) => Fragment::element("div", children),
    }
}
