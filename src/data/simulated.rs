//! Seeded simulation of a medical cost distribution.

use super::distribution::{density_curve, Histogram};
use crate::config::SimulationConfig;
use crate::errors::{Error, Result};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;

const DENSITY_POINTS: usize = 120;

/// Samples, their histogram and a density curve overlaying it.
#[derive(Debug, Clone)]
pub struct SimulatedDistribution {
    pub samples: Vec<f64>,
    pub histogram: Histogram,
    pub density: Vec<(f64, f64)>,
}

impl SimulatedDistribution {
    pub fn generate(config: &SimulationConfig) -> Result<Self> {
        let samples = normal_samples(config.seed, config.mean, config.std_dev, config.samples)?;
        let histogram = Histogram::from_samples(&samples, config.bins);
        let density = density_curve(&samples, &histogram, DENSITY_POINTS);
        Ok(Self {
            samples,
            histogram,
            density,
        })
    }
}

/// `count` draws from N(mean, std_dev) using a generator seeded with `seed`.
pub fn normal_samples(seed: u64, mean: f64, std_dev: f64, count: usize) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev).map_err(|e| {
        Error::Config(format!(
            "invalid normal distribution (mean {}, std_dev {}): {}",
            mean, std_dev, e
        ))
    })?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(normal.sample_iter(&mut rng).take(count).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_samples() {
        assert_eq!(
            normal_samples(42, 5000.0, 2000.0, 50).unwrap(),
            normal_samples(42, 5000.0, 2000.0, 50).unwrap()
        );
        assert_ne!(
            normal_samples(42, 5000.0, 2000.0, 50).unwrap(),
            normal_samples(7, 5000.0, 2000.0, 50).unwrap()
        );
    }

    #[test]
    fn test_odd_count() {
        assert_eq!(normal_samples(1, 0.0, 1.0, 7).unwrap().len(), 7);
    }

    #[test]
    fn test_invalid_std_dev_is_config_error() {
        let err = normal_samples(42, 5000.0, -1.0, 10).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: "));
    }

    #[test]
    fn test_sample_moments_are_close() {
        let samples = normal_samples(42, 5000.0, 2000.0, 5000).unwrap();
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let sd = (samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!((mean - 5000.0).abs() < 150.0, "mean was {}", mean);
        assert!((sd - 2000.0).abs() < 150.0, "sd was {}", sd);
    }

    #[test]
    fn test_generate_uses_config() {
        let config = SimulationConfig::default();
        let dist = SimulatedDistribution::generate(&config).unwrap();
        assert_eq!(dist.samples.len(), 1000);
        assert_eq!(dist.histogram.counts.len(), 30);
        assert_eq!(dist.histogram.total(), 1000);
        assert_eq!(dist.density.len(), DENSITY_POINTS);
    }
}
