use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::DEFAULT_OBESITY_BMI_THRESHOLD;
use crate::errors::{Error, Result};

pub const DEFAULT_DATA_FILE: &str = "Regression.csv";
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

/// Root configuration structure for medcost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedcostConfig {
    /// Historical data CSV shown in the data page
    pub data_file: PathBuf,

    /// Cosmetic delay before an estimate is shown
    pub processing_delay_ms: u64,

    /// Simulated cost distribution
    pub simulation: SimulationConfig,

    /// Recommendation thresholds
    pub advice: AdviceConfig,
}

impl Default for MedcostConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            simulation: SimulationConfig::default(),
            advice: AdviceConfig::default(),
        }
    }
}

/// Parameters of the simulated medical cost distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
    pub bins: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mean: 5000.0,
            std_dev: 2000.0,
            samples: 1000,
            bins: 30,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(Error::Config("mean must be finite".to_string()));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(Error::Config(format!(
                "std_dev must be positive, got {}",
                self.std_dev
            )));
        }
        if self.samples == 0 {
            return Err(Error::Config("samples must be at least 1".to_string()));
        }
        if self.bins == 0 {
            return Err(Error::Config("bins must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    /// BMI above which the obesity warning is shown
    pub obesity_bmi_threshold: f64,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            obesity_bmi_threshold: DEFAULT_OBESITY_BMI_THRESHOLD,
        }
    }
}

impl AdviceConfig {
    pub fn validate(&self) -> Result<()> {
        let threshold = self.obesity_bmi_threshold;
        if !(threshold.is_finite() && threshold > 0.0 && threshold <= 100.0) {
            return Err(Error::Config(format!(
                "obesity_bmi_threshold must be positive and at most 100, got {}",
                threshold
            )));
        }
        Ok(())
    }
}
