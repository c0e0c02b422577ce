//! Input record and categorical attribute types.
//!
//! Every categorical attribute maps to exactly one integer code and back.
//! The codes are what the estimator and the feature chart consume.

use crate::errors::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const AGE_MIN: u32 = 0;
pub const AGE_MAX: u32 = 120;
pub const BMI_MIN: f64 = 0.0;
pub const BMI_MAX: f64 = 100.0;
pub const CHILDREN_MIN: u32 = 0;
pub const CHILDREN_MAX: u32 = 10;

/// Biological sex as selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Smoking history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

/// Region of residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[value(alias = "a")]
    Java,
    #[value(alias = "b")]
    Kalimantan,
    #[value(alias = "c")]
    Sulawesi,
    #[value(alias = "d")]
    Papua,
}

/// Shared behaviour of the categorical form inputs.
pub trait Categorical: Sized + Copy + PartialEq + 'static {
    /// All variants in option order.
    fn all() -> &'static [Self];

    /// Integer code fed to the estimator.
    fn code(self) -> u32;

    /// Human readable option label.
    fn label(self) -> &'static str;

    fn from_code(code: u32) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }

    /// Next option, wrapping around.
    fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|v| *v == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous option, wrapping around.
    fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|v| *v == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl Categorical for Sex {
    fn all() -> &'static [Self] {
        &[Sex::Male, Sex::Female]
    }

    fn code(self) -> u32 {
        match self {
            Sex::Male => 1,
            Sex::Female => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl Categorical for Smoker {
    fn all() -> &'static [Self] {
        &[Smoker::Yes, Smoker::No]
    }

    fn code(self) -> u32 {
        match self {
            Smoker::Yes => 1,
            Smoker::No => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Smoker::Yes => "Yes",
            Smoker::No => "No",
        }
    }
}

impl Categorical for Region {
    fn all() -> &'static [Self] {
        &[Region::Java, Region::Kalimantan, Region::Sulawesi, Region::Papua]
    }

    fn code(self) -> u32 {
        match self {
            Region::Java => 0,
            Region::Kalimantan => 1,
            Region::Sulawesi => 2,
            Region::Papua => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Region::Java => "Java",
            Region::Kalimantan => "Kalimantan",
            Region::Sulawesi => "Sulawesi",
            Region::Papua => "Papua",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Sex, Smoker, Region);

/// One form submission.
///
/// Fields are private so a record can only exist with in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRecord {
    age: u32,
    bmi: f64,
    children: u32,
    sex: Sex,
    smoker: Smoker,
    region: Region,
}

impl InputRecord {
    /// Build a record, rejecting values outside the form ranges.
    pub fn new(
        age: u32,
        bmi: f64,
        children: u32,
        sex: Sex,
        smoker: Smoker,
        region: Region,
    ) -> Result<Self> {
        if age > AGE_MAX {
            return Err(Error::out_of_range("age", age as f64, AGE_MIN as f64, AGE_MAX as f64));
        }
        if !bmi.is_finite() || !(BMI_MIN..=BMI_MAX).contains(&bmi) {
            return Err(Error::out_of_range("bmi", bmi, BMI_MIN, BMI_MAX));
        }
        if children > CHILDREN_MAX {
            return Err(Error::out_of_range(
                "children",
                children as f64,
                CHILDREN_MIN as f64,
                CHILDREN_MAX as f64,
            ));
        }

        Ok(Self {
            age,
            bmi,
            children,
            sex,
            smoker,
            region,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn smoker(&self) -> Smoker {
        self.smoker
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl Default for InputRecord {
    /// Initial form values: first option of every select.
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 25.0,
            children: 0,
            sex: Sex::Male,
            smoker: Smoker::Yes,
            region: Region::Java,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_bijection<T: Categorical + std::fmt::Debug>() {
        let codes: HashSet<u32> = T::all().iter().map(|v| v.code()).collect();
        assert_eq!(codes.len(), T::all().len(), "codes must be distinct");
        for v in T::all() {
            assert_eq!(T::from_code(v.code()), Some(*v));
        }
        assert_eq!(T::from_code(99), None);
    }

    #[test]
    fn test_categorical_mappings_are_bijections() {
        assert_bijection::<Sex>();
        assert_bijection::<Smoker>();
        assert_bijection::<Region>();
    }

    #[test]
    fn test_fixed_codes() {
        assert_eq!(Sex::Male.code(), 1);
        assert_eq!(Sex::Female.code(), 0);
        assert_eq!(Smoker::Yes.code(), 1);
        assert_eq!(Smoker::No.code(), 0);
        let regions: Vec<u32> = Region::all().iter().map(|r| r.code()).collect();
        assert_eq!(regions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Region::Papua.next(), Region::Java);
        assert_eq!(Region::Java.prev(), Region::Papua);
        assert_eq!(Smoker::Yes.next().next(), Smoker::Yes);
    }

    #[test]
    fn test_record_rejects_out_of_range() {
        assert!(InputRecord::new(121, 25.0, 0, Sex::Male, Smoker::No, Region::Java).is_err());
        assert!(InputRecord::new(30, 100.1, 0, Sex::Male, Smoker::No, Region::Java).is_err());
        assert!(InputRecord::new(30, -0.1, 0, Sex::Male, Smoker::No, Region::Java).is_err());
        assert!(InputRecord::new(30, f64::NAN, 0, Sex::Male, Smoker::No, Region::Java).is_err());
        assert!(InputRecord::new(30, 25.0, 11, Sex::Male, Smoker::No, Region::Java).is_err());
    }

    #[test]
    fn test_record_accepts_bounds() {
        assert!(InputRecord::new(0, 0.0, 0, Sex::Female, Smoker::No, Region::Java).is_ok());
        assert!(InputRecord::new(120, 100.0, 10, Sex::Male, Smoker::Yes, Region::Papua).is_ok());
    }

    #[test]
    fn test_default_matches_initial_form() {
        let record = InputRecord::default();
        assert_eq!(record.age(), 30);
        assert_eq!(record.bmi(), 25.0);
        assert_eq!(record.children(), 0);
        assert_eq!(record.sex(), Sex::Male);
        assert_eq!(record.smoker(), Smoker::Yes);
        assert_eq!(record.region(), Region::Java);
    }
}
