//! BMI command handler

use std::io::{self, Write};

use zenflow::config::Config;
use zenflow::core::calculator::MetricsCalculator;
use zenflow::core::metrics::MetricsSnapshot;
use zenflow::{error, info, verbose};

/// Run the calculator over the profile inputs and print what it derives.
///
/// Values the calculator withholds are left out of the output.
pub fn run(config: &Config, verbose: bool) {
    let profile = &config.profile;
    let mut calculator =
        MetricsCalculator::with_inputs(profile.height_cm.as_str(), profile.weight_kg.as_str());

    verbose!(
        "Inputs: height={:?} cm, weight={:?} kg",
        calculator.height(),
        calculator.weight()
    );

    if calculator.calculate().is_none() {
        info!("No BMI: height and weight must both be positive numbers");
    }

    let mut out = io::stdout().lock();
    if let Err(e) = print_snapshot(&mut out, &calculator.snapshot(), verbose) {
        error!("Failed to write metrics: {e}");
    }
}

fn print_snapshot(
    out: &mut impl Write,
    snapshot: &MetricsSnapshot,
    verbose: bool,
) -> io::Result<()> {
    if let Some(bmi) = &snapshot.bmi {
        writeln!(out, "Your BMI: {:.1}", bmi.value)?;
        writeln!(out, "Category: {}", bmi.category)?;
        if verbose {
            writeln!(out, "Badge: {}", bmi.category.color())?;
        }
    }
    if let Some(range) = &snapshot.ideal_weight {
        writeln!(out, "Ideal Weight Range: {range}")?;
    }
    writeln!(out, "Hydration: {}ml of water daily", snapshot.hydration_ml)?;
    writeln!(out, "Nutrition: {}", snapshot.calories)?;
    writeln!(
        out,
        "Exercise: {} minutes of moderate exercise per week",
        snapshot.exercise_minutes
    )
}
