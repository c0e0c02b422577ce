//! Health recommendations shown next to an estimate.

use super::input::{InputRecord, Smoker};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OBESITY_BMI_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    ReduceSmokingRisk,
    Obesity,
}

impl Advice {
    pub fn message(self) -> &'static str {
        match self {
            Advice::ReduceSmokingRisk => "Reduce late nights to lower your health risk.",
            Advice::Obesity => "Your BMI indicates obesity. Start exercising regularly.",
        }
    }
}

/// Advice for a record. A BMI strictly above `obesity_threshold` counts as obese.
pub fn advise(record: &InputRecord, obesity_threshold: f64) -> Vec<Advice> {
    let mut advice = Vec::new();
    if record.smoker() == Smoker::Yes {
        advice.push(Advice::ReduceSmokingRisk);
    }
    if record.bmi() > obesity_threshold {
        advice.push(Advice::Obesity);
    }
    advice
}
