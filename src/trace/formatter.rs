use crate::resolve::{NodeResolution, SubstitutionRecord, SubstitutionResult, ValueOrigin};
use crate::transform::Transform;
use itertools::Itertools;

/// Formats resolution output into human-readable previews.
pub struct PreviewFormatter;

impl PreviewFormatter {
    /// Format a full node resolution: resolved text, per-variable
    /// provenance, unresolved placeholders, and validation findings.
    pub fn format(resolution: &NodeResolution) -> String {
        let mut lines = Vec::new();
        lines.push(Self::format_result(&resolution.substitution));

        for issue in &resolution.report.errors {
            lines.push(format!("error: {}", issue));
        }
        for issue in &resolution.report.warnings {
            lines.push(format!("warning: {}", issue));
        }
        lines.join("\n")
    }

    /// Format a substitution result and its log.
    pub fn format_result(result: &SubstitutionResult) -> String {
        let mut lines = vec![format!("Resolved: {:?}", result.result)];

        for record in &result.log {
            lines.push(format!("  {}", Self::format_record(record)));
        }
        if !result.unmapped_variables.is_empty() {
            lines.push(format!(
                "Unmapped: {}",
                result.unmapped_variables.iter().join(", ")
            ));
        }
        lines.join("\n")
    }

    /// One log line: where the value came from and what touched it.
    fn format_record(record: &SubstitutionRecord) -> String {
        let source = match &record.origin {
            ValueOrigin::ConnectedField { node, field } => format!("'{}'.{}", node, field),
            ValueOrigin::DirectInput => "direct input".to_string(),
            ValueOrigin::DefaultValue => "default value".to_string(),
        };
        let mut line = format!("{} <- {}", record.variable, source);
        if record.transform != Transform::None {
            line.push_str(&format!(" ({})", record.transform));
        }
        line
    }
}
