//! Markdown report generator
//!
//! Fills an embedded Markdown template by `{{placeholder}}` substitution.

use crate::core::get_version;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let snapshot = ctx.snapshot;
        let values = [
            ("{{name}}", ctx.display_name().to_string()),
            ("{{height_cm}}", ReportContext::input_or_na(ctx.height_cm).to_string()),
            ("{{weight_kg}}", ReportContext::input_or_na(ctx.weight_kg).to_string()),
            ("{{bmi_value}}", ctx.bmi_value()),
            ("{{category}}", ctx.category_label().to_string()),
            ("{{ideal_weight}}", ctx.ideal_weight()),
            ("{{hydration_ml}}", snapshot.hydration_ml.to_string()),
            ("{{exercise_minutes}}", snapshot.exercise_minutes.to_string()),
            ("{{calorie_band}}", snapshot.calories.to_string()),
            ("{{version}}", get_version().to_string()),
        ];
        fill_template(MARKDOWN_TEMPLATE, &values)
    }
}

/// Substitute `{{key}}` placeholders in a single left-to-right pass.
///
/// Substituted text is never scanned again, so values containing `{{...}}`
/// come out literally. Unknown placeholders are kept as written.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find("}}") else {
            rest = tail;
            break;
        };
        let placeholder = &tail[..end + 2];
        match values.iter().find(|(key, _)| *key == placeholder) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(placeholder),
        }
        rest = &tail[end + 2..];
    }
    out.push_str(rest);
    out
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::MetricsSnapshot;

    #[test]
    fn renders_all_placeholders() {
        let snapshot = MetricsSnapshot::compute("180", "70");
        let ctx = ReportContext::new("Alex", "180", "70", &snapshot);
        let md = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(md.contains("# Body Metrics for Alex"));
        assert!(md.contains("**Your BMI:** 21.6 (Normal weight)"));
        assert!(md.contains("60 - 81 kg"));
        assert!(md.contains("2450ml"));
        assert!(md.contains("1750-2100 calories"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn placeholder_text_in_values_stays_literal() {
        let snapshot = MetricsSnapshot::compute("180", "70");
        let ctx = ReportContext::new("{{bmi_value}}", "180", "{{version}}", &snapshot);
        let md = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(md.contains("# Body Metrics for {{bmi_value}}"));
        assert!(md.contains("| Weight (kg) | {{version}} |"));
        assert!(md.contains("**Your BMI:** 21.6 (Normal weight)"));
    }

    #[test]
    fn fill_template_keeps_unknown_and_unclosed_markers() {
        let values = [("{{a}}", "1".to_string())];
        assert_eq!(fill_template("{{a}} {{b}} {{a", &values), "1 {{b}} {{a");
        assert_eq!(fill_template("no markers", &values), "no markers");
    }

    #[test]
    fn withheld_values_render_as_not_available() {
        let snapshot = MetricsSnapshot::compute("", "");
        let ctx = ReportContext::new("", "", "", &snapshot);
        let md = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(md.contains("**Your BMI:** N/A (N/A)"));
        assert!(md.contains("**Ideal Weight Range:** N/A"));
        assert!(md.contains("2500ml"));
        assert!(md.contains("2000-2400 calories"));
    }
}
