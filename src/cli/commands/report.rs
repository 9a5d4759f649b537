//! Report command handler
//!
//! Writes a body metrics report in Markdown or HTML.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use zenflow::config::Config;
use zenflow::core::calculator::MetricsCalculator;
use zenflow::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use zenflow::{error, info};

/// Run the report command.
///
/// # Arguments
/// * `config` - Configuration with profile inputs and the default reports directory
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
pub fn run(config: &Config, output_file: Option<&Path>, format_str: &str) {
    match generate_report(config, output_file, format_str) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
        }
    }
}

/// File name for a report: `<name>_wellness.<ext>`, lowercased with
/// non-alphanumerics replaced.
fn report_file_name(name: &str, format: ReportFormat) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "profile" } else { &stem };
    format!("{stem}_wellness.{}", format.extension())
}

fn generate_report(
    config: &Config,
    output_file: Option<&Path>,
    format_str: &str,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let profile = &config.profile;
    let mut calculator =
        MetricsCalculator::with_inputs(profile.height_cm.as_str(), profile.weight_kg.as_str());
    calculator.calculate();
    let snapshot = calculator.snapshot();
    let ctx = ReportContext::new(
        &profile.name,
        calculator.height(),
        calculator.weight(),
        &snapshot,
    );

    let output_path = output_file.map_or_else(
        || {
            config
                .reports_dir_path()
                .join(report_file_name(&profile.name, format))
        },
        Path::to_path_buf,
    );

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };
    result.map_err(|e| {
        format!(
            "✗ Failed to write {format} report to {}: {e}",
            output_path.display()
        )
    })?;

    Ok(output_path)
}
