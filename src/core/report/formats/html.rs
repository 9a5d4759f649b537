//! HTML report generator
//!
//! Renders a self-contained page (inline CSS, no scripts) through the askama
//! template `templates/wellness_report.html`. Values are HTML-escaped by
//! askama.

use crate::core::get_version;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "wellness_report.html")]
struct WellnessReportPage<'a> {
    name: &'a str,
    height_cm: &'a str,
    weight_kg: &'a str,
    has_bmi: bool,
    bmi_value: String,
    category: &'a str,
    color: &'a str,
    has_ideal_weight: bool,
    ideal_weight: String,
    hydration_ml: u32,
    exercise_minutes: u32,
    calorie_band: String,
    version: &'a str,
}

impl<'a> WellnessReportPage<'a> {
    fn from_context(ctx: &ReportContext<'a>) -> Self {
        let snapshot = ctx.snapshot;
        Self {
            name: ctx.display_name(),
            height_cm: ReportContext::input_or_na(ctx.height_cm),
            weight_kg: ReportContext::input_or_na(ctx.weight_kg),
            has_bmi: snapshot.bmi.is_some(),
            bmi_value: ctx.bmi_value(),
            category: ctx.category_label(),
            color: ctx.category_color(),
            has_ideal_weight: snapshot.ideal_weight.is_some(),
            ideal_weight: ctx.ideal_weight(),
            hydration_ml: snapshot.hydration_ml,
            exercise_minutes: snapshot.exercise_minutes,
            calorie_band: snapshot.calories.to_string(),
            version: get_version(),
        }
    }
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(WellnessReportPage::from_context(ctx).render()?)
    }
}
