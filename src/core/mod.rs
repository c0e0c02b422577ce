pub mod advice;
pub mod estimate;
pub mod features;
pub mod input;

pub use advice::{advise, Advice, DEFAULT_OBESITY_BMI_THRESHOLD};
pub use estimate::{estimate, format_currency, EstimateResult};
pub use features::{feature_vector, Feature};
pub use input::{Categorical, InputRecord, Region, Sex, Smoker};

use serde::Serialize;

/// An input record together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub input: InputRecord,
    pub estimate: EstimateResult,
    pub advice: Vec<Advice>,
}

impl Submission {
    /// Evaluate a record: estimate plus advice.
    pub fn evaluate(input: InputRecord, obesity_threshold: f64) -> Self {
        Self {
            estimate: estimate(&input),
            advice: advise(&input, obesity_threshold),
            input,
        }
    }

    pub fn features(&self) -> Vec<Feature> {
        feature_vector(&self.input)
    }
}
