//! Fixed-weight cost estimator.

use super::input::{Categorical, InputRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const AGE_WEIGHT: f64 = 200.0;
pub const BMI_WEIGHT: f64 = 100.0;
pub const CHILDREN_WEIGHT: f64 = 500.0;
pub const SMOKER_WEIGHT: f64 = 1000.0;
pub const REGION_WEIGHT: f64 = 300.0;

/// Estimated medical cost for one input record.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimateResult(f64);

impl EstimateResult {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Currency rendering, e.g. `$8,500.00`.
    pub fn display_currency(self) -> String {
        format_currency(self.0)
    }
}

impl fmt::Display for EstimateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_currency())
    }
}

/// Weighted sum over the record. Sex carries no weight.
pub fn estimate(record: &InputRecord) -> EstimateResult {
    let value = record.age() as f64 * AGE_WEIGHT
        + record.bmi() * BMI_WEIGHT
        + record.children() as f64 * CHILDREN_WEIGHT
        + record.smoker().code() as f64 * SMOKER_WEIGHT
        + record.region().code() as f64 * REGION_WEIGHT;
    EstimateResult(value)
}

/// Format with thousands separators and two decimals.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, frac)
}
