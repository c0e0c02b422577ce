//! Labelled feature values charted next to an estimate.

use super::input::{Categorical, InputRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub label: &'static str,
    pub value: f64,
}

/// Features in chart order: Age, Children, BMI, Smoker, Region, Sex.
pub fn feature_vector(record: &InputRecord) -> Vec<Feature> {
    vec![
        Feature {
            label: "Age",
            value: record.age() as f64,
        },
        Feature {
            label: "Children",
            value: record.children() as f64,
        },
        Feature {
            label: "BMI",
            value: record.bmi(),
        },
        Feature {
            label: "Smoker",
            value: record.smoker().code() as f64,
        },
        Feature {
            label: "Region",
            value: record.region().code() as f64,
        },
        Feature {
            label: "Sex",
            value: record.sex().code() as f64,
        },
    ]
}
