//! Body metrics: BMI, weight category, ideal weight range and daily targets
//!
//! Every operation here is a pure function of its inputs. Inputs arrive as the
//! raw strings typed by the user; anything that is not a strictly positive,
//! finite number is treated as "no input" and the corresponding output is
//! withheld (`None`) or replaced by its documented default.

use std::fmt;

/// Lower BMI bound (inclusive) of the normal weight band.
pub const NORMAL_BMI_MIN: f64 = 18.5;
/// Exclusive upper BMI bound of the normal weight band.
pub const OVERWEIGHT_BMI_MIN: f64 = 25.0;
/// Exclusive upper BMI bound of the overweight band.
pub const OBESE_BMI_MIN: f64 = 30.0;
/// BMI used for the top of the ideal weight range.
pub const IDEAL_BMI_MAX: f64 = 24.9;

/// Millilitres of water per kilogram of body weight.
pub const HYDRATION_ML_PER_KG: f64 = 35.0;
/// Hydration target when no weight is known.
pub const DEFAULT_HYDRATION_ML: u32 = 2500;
/// Lower calorie multiplier (kcal per kg).
pub const CALORIES_MIN_PER_KG: f64 = 25.0;
/// Upper calorie multiplier (kcal per kg).
pub const CALORIES_MAX_PER_KG: f64 = 30.0;
/// Calorie band when no weight is known.
pub const DEFAULT_CALORIE_BAND: CalorieBand = CalorieBand {
    min_kcal: 2000,
    max_kcal: 2400,
};
/// Recommended minutes of moderate exercise per week.
pub const WEEKLY_EXERCISE_MINUTES: u32 = 150;

/// A validated height/weight pair. Both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Measurement {
    /// Build a measurement from raw input strings.
    ///
    /// Returns `None` unless both inputs parse to strictly positive numbers.
    #[must_use]
    pub fn parse(height_cm: &str, weight_kg: &str) -> Option<Self> {
        Some(Self {
            height_cm: parse_positive(height_cm)?,
            weight_kg: parse_positive(weight_kg)?,
        })
    }

    /// Height converted to metres.
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// BMI for this measurement.
    ///
    /// `None` when the quotient is not finite (a height so small its square
    /// underflows to zero).
    #[must_use]
    pub fn bmi(&self) -> Option<BmiResult> {
        let height_m = self.height_m();
        let bmi = self.weight_kg / (height_m * height_m);
        bmi.is_finite().then(|| BmiResult::from_raw(bmi))
    }
}

/// Weight-status category derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Upper bounds are exclusive.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_BMI_MIN {
            Self::Underweight
        } else if bmi < OVERWEIGHT_BMI_MIN {
            Self::Normal
        } else if bmi < OBESE_BMI_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Badge colour shown next to the category.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Underweight => "blue",
            Self::Normal => "green",
            Self::Overweight => "yellow",
            Self::Obese => "red",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour for an optional result; `gray` while nothing has been calculated.
#[must_use]
pub fn bmi_color(result: Option<&BmiResult>) -> &'static str {
    result.map_or("gray", |r| r.category.color())
}

/// A computed BMI with its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    /// Category, classified on the unrounded BMI
    pub category: BmiCategory,
}

impl BmiResult {
    fn from_raw(bmi: f64) -> Self {
        Self {
            value: (bmi * 10.0).round() / 10.0,
            category: BmiCategory::from_bmi(bmi),
        }
    }
}

/// Healthy weight band (BMI 18.5 to 24.9) for a given height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdealWeightRange {
    /// Lower bound in kilograms
    pub min_kg: u32,
    /// Upper bound in kilograms
    pub max_kg: u32,
}

impl fmt::Display for IdealWeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} kg", self.min_kg, self.max_kg)
    }
}

/// Daily calorie intake band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieBand {
    /// Lower bound in kcal
    pub min_kcal: u32,
    /// Upper bound in kcal
    pub max_kcal: u32,
}

impl fmt::Display for CalorieBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} calories", self.min_kcal, self.max_kcal)
    }
}

/// Parse a numeric input, keeping only strictly positive finite values.
#[must_use]
pub fn parse_positive(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Round a quantity to the nearest whole unit.
///
/// Anything that rounds outside `1..=u32::MAX` (including non-finite values)
/// is unusable and yields `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_whole(value: f64) -> Option<u32> {
    let rounded = value.round();
    (1.0..=f64::from(u32::MAX))
        .contains(&rounded)
        .then(|| rounded as u32)
}

/// Compute BMI from raw height (cm) and weight (kg) inputs.
///
/// Returns `None` when either input is missing, unparseable or not strictly
/// positive, or when the BMI itself is not finite.
#[must_use]
pub fn compute_bmi(height_cm: &str, weight_kg: &str) -> Option<BmiResult> {
    Measurement::parse(height_cm, weight_kg)?.bmi()
}

/// Ideal weight range for a height in centimetres.
///
/// Depends on height alone; `None` for an empty, unparseable or
/// non-positive height, or one whose bounds round outside `1..=u32::MAX` kg.
#[must_use]
pub fn ideal_weight_range(height_cm: &str) -> Option<IdealWeightRange> {
    let height_m = parse_positive(height_cm)? / 100.0;
    let squared = height_m * height_m;
    Some(IdealWeightRange {
        min_kg: round_whole(NORMAL_BMI_MIN * squared)?,
        max_kg: round_whole(IDEAL_BMI_MAX * squared)?,
    })
}

/// Daily water target in millilitres.
///
/// Falls back to [`DEFAULT_HYDRATION_ML`] when the weight is unusable or the
/// target would not fit in a `u32`.
#[must_use]
pub fn daily_hydration_target(weight_kg: &str) -> u32 {
    parse_positive(weight_kg)
        .and_then(|w| round_whole(w * HYDRATION_ML_PER_KG))
        .unwrap_or(DEFAULT_HYDRATION_ML)
}

/// Daily calorie band.
///
/// Falls back to [`DEFAULT_CALORIE_BAND`] under the same conditions as
/// [`daily_hydration_target`].
#[must_use]
pub fn daily_calorie_band(weight_kg: &str) -> CalorieBand {
    parse_positive(weight_kg)
        .and_then(|w| {
            Some(CalorieBand {
                min_kcal: round_whole(w * CALORIES_MIN_PER_KG)?,
                max_kcal: round_whole(w * CALORIES_MAX_PER_KG)?,
            })
        })
        .unwrap_or(DEFAULT_CALORIE_BAND)
}

/// Everything the metrics display shows for one pair of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    /// BMI result, absent until a successful calculation
    pub bmi: Option<BmiResult>,
    /// Ideal weight range, absent without a usable height
    pub ideal_weight: Option<IdealWeightRange>,
    /// Daily water target in millilitres
    pub hydration_ml: u32,
    /// Daily calorie band
    pub calories: CalorieBand,
    /// Weekly exercise recommendation in minutes
    pub exercise_minutes: u32,
}

impl MetricsSnapshot {
    /// Compute every derived value for the given inputs in one go.
    #[must_use]
    pub fn compute(height_cm: &str, weight_kg: &str) -> Self {
        Self::with_bmi(compute_bmi(height_cm, weight_kg), height_cm, weight_kg)
    }

    /// Build a snapshot around an already computed (or withheld) BMI.
    #[must_use]
    pub fn with_bmi(bmi: Option<BmiResult>, height_cm: &str, weight_kg: &str) -> Self {
        Self {
            bmi,
            ideal_weight: ideal_weight_range(height_cm),
            hydration_ml: daily_hydration_target(weight_kg),
            calories: daily_calorie_band(weight_kg),
            exercise_minutes: WEEKLY_EXERCISE_MINUTES,
        }
    }
}
