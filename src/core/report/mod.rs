//! Report generation for body metrics
//!
//! Renders a [`MetricsSnapshot`] to Markdown or HTML. Values the calculator
//! withheld are shown as "not available" rather than omitted, so a report
//! always has the same shape.

pub mod formats;

use crate::core::metrics::{bmi_color, MetricsSnapshot};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Text shown in place of a withheld value
pub const NOT_AVAILABLE: &str = "N/A";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Person the report is for
    pub name: &'a str,
    /// Raw height input (cm)
    pub height_cm: &'a str,
    /// Raw weight input (kg)
    pub weight_kg: &'a str,
    /// Derived values
    pub snapshot: &'a MetricsSnapshot,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        name: &'a str,
        height_cm: &'a str,
        weight_kg: &'a str,
        snapshot: &'a MetricsSnapshot,
    ) -> Self {
        Self {
            name,
            height_cm,
            weight_kg,
            snapshot,
        }
    }

    /// Name to print, falling back to a generic label
    #[must_use]
    pub fn display_name(&self) -> &'a str {
        let name = self.name.trim();
        if name.is_empty() {
            "you"
        } else {
            name
        }
    }

    /// Input value or `N/A` when blank
    #[must_use]
    pub fn input_or_na(value: &str) -> &str {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            NOT_AVAILABLE
        } else {
            trimmed
        }
    }

    /// BMI value with one decimal, or `N/A`
    #[must_use]
    pub fn bmi_value(&self) -> String {
        self.snapshot
            .bmi
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| format!("{:.1}", r.value))
    }

    /// Category label, or `N/A`
    #[must_use]
    pub fn category_label(&self) -> &'static str {
        self.snapshot
            .bmi
            .map_or(NOT_AVAILABLE, |r| r.category.label())
    }

    /// Category colour (`gray` when no BMI)
    #[must_use]
    pub fn category_color(&self) -> &'static str {
        bmi_color(self.snapshot.bmi.as_ref())
    }

    /// Ideal weight range text, or `N/A`
    #[must_use]
    pub fn ideal_weight(&self) -> String {
        self.snapshot
            .ideal_weight
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
