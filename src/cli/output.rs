//! Output formatting utilities

use crate::application::ScalarReport;
use crate::domain::TagAlias;

/// Format resolution reports as `input<TAB>tag<TAB>value` lines.
///
/// The value column is `-` when values were not decoded.
pub fn format_reports(reports: &[ScalarReport]) -> String {
    let mut output = String::new();
    for report in reports {
        let value = report
            .resolved
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{}\t{}\t{}\n",
            report.input, report.resolved.tag, value
        ));
    }
    output
}

/// Format a list of tag aliases for display.
pub fn format_tag_list(aliases: &[TagAlias]) -> String {
    if aliases.is_empty() {
        return "No tags registered".to_string();
    }

    let width = aliases.iter().map(|a| a.short.len()).max().unwrap_or(0);
    let mut output = String::new();
    for alias in aliases {
        output.push_str(&format!("{:<width$}  {}\n", alias.short, alias.long, width = width));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResolvedScalar, ScalarValue};

    #[test]
    fn test_format_reports() {
        let reports = vec![
            ScalarReport {
                input: "42".to_string(),
                resolved: ResolvedScalar::new("tag:yaml.org,2002:int", Some(ScalarValue::Int(42))),
            },
            ScalarReport {
                input: "x".to_string(),
                resolved: ResolvedScalar::new("tag:yaml.org,2002:str", None),
            },
        ];

        let output = format_reports(&reports);
        assert_eq!(
            output,
            "42\ttag:yaml.org,2002:int\t42\nx\ttag:yaml.org,2002:str\t-\n"
        );
    }

    #[test]
    fn test_format_empty_tag_list() {
        let output = format_tag_list(&[]);
        assert_eq!(output, "No tags registered");
    }

    #[test]
    fn test_format_tag_list_aligns_columns() {
        let aliases = vec![TagAlias::yaml("map"), TagAlias::yaml("timestamp")];
        let output = format_tag_list(&aliases);
        assert_eq!(
            output,
            "!!map        tag:yaml.org,2002:map\n!!timestamp  tag:yaml.org,2002:timestamp\n"
        );
    }
}
