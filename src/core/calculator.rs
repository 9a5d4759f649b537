//! Stateful calculator holding the current inputs and the last BMI result

use crate::core::metrics::{
    self, BmiResult, CalorieBand, IdealWeightRange, MetricsSnapshot,
};
use crate::{debug, info};

/// Owned input state of the body metrics view.
///
/// Height and weight are kept as the raw strings entered by the user. The BMI
/// result only changes on [`calculate`](Self::calculate); everything else is
/// derived from the live inputs on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsCalculator {
    height_cm: String,
    weight_kg: String,
    result: Option<BmiResult>,
}

impl MetricsCalculator {
    /// Create an empty calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator pre-filled with inputs (no result yet)
    #[must_use]
    pub fn with_inputs(height_cm: impl Into<String>, weight_kg: impl Into<String>) -> Self {
        Self {
            height_cm: height_cm.into(),
            weight_kg: weight_kg.into(),
            result: None,
        }
    }

    /// Replace the height input
    pub fn set_height(&mut self, height_cm: impl Into<String>) {
        self.height_cm = height_cm.into();
    }

    /// Replace the weight input
    pub fn set_weight(&mut self, weight_kg: impl Into<String>) {
        self.weight_kg = weight_kg.into();
    }

    /// Current raw height input
    #[must_use]
    pub fn height(&self) -> &str {
        &self.height_cm
    }

    /// Current raw weight input
    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight_kg
    }

    /// Recompute BMI from the current inputs.
    ///
    /// A calculation over unusable inputs clears any earlier result so the
    /// displayed BMI never disagrees with the inputs beside it.
    pub fn calculate(&mut self) -> Option<&BmiResult> {
        self.result = metrics::compute_bmi(&self.height_cm, &self.weight_kg);
        match &self.result {
            Some(r) => info!("BMI {:.1} ({})", r.value, r.category),
            None => debug!(
                "BMI withheld for height={:?} weight={:?}",
                self.height_cm, self.weight_kg
            ),
        }
        self.result.as_ref()
    }

    /// Last calculated BMI, if any
    #[must_use]
    pub const fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Ideal weight range for the current height input
    #[must_use]
    pub fn ideal_weight_range(&self) -> Option<IdealWeightRange> {
        metrics::ideal_weight_range(&self.height_cm)
    }

    /// Daily water target for the current weight input
    #[must_use]
    pub fn hydration_target(&self) -> u32 {
        metrics::daily_hydration_target(&self.weight_kg)
    }

    /// Daily calorie band for the current weight input
    #[must_use]
    pub fn calorie_band(&self) -> CalorieBand {
        metrics::daily_calorie_band(&self.weight_kg)
    }

    /// Everything currently on display
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::with_bmi(self.result, &self.height_cm, &self.weight_kg)
    }
}
