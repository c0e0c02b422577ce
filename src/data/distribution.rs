//! Histogram binning and kernel density estimation.

use std::f64::consts::PI;

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `samples` into `bins` equal-width buckets spanning their range.
    ///
    /// The last bucket is closed on the right so the maximum is counted.
    pub fn from_samples(samples: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut min, mut max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if samples.is_empty() {
            min = 0.0;
            max = 1.0;
        } else if max <= min {
            max = min + 1.0;
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0; bins];
        for &v in samples {
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { min, max, counts }
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// (left edge, right edge, count) per bucket.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let left = self.min + i as f64 * width;
            (left, left + width, count)
        })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Scott's rule bandwidth for a one dimensional sample.
pub fn scott_bandwidth(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    if n < 2.0 {
        return 1.0;
    }
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let bw = variance.sqrt() * n.powf(-0.2);
    if bw > 0.0 {
        bw
    } else {
        1.0
    }
}

/// Gaussian KDE evaluated at `points` evenly spaced positions over the
/// histogram range, scaled so the curve overlays bucket counts.
pub fn density_curve(samples: &[f64], histogram: &Histogram, points: usize) -> Vec<(f64, f64)> {
    if samples.is_empty() || points < 2 {
        return Vec::new();
    }

    let bandwidth = scott_bandwidth(samples);
    let n = samples.len() as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());
    let scale = n * histogram.bin_width();
    let step = (histogram.max - histogram.min) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = histogram.min + i as f64 * step;
            let density: f64 = samples
                .iter()
                .map(|s| (-0.5 * ((x - s) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_sample_count() {
        let samples: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let hist = Histogram::from_samples(&samples, 10);
        assert_eq!(hist.total(), 100);
        assert_eq!(hist.counts, vec![10; 10]);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let hist = Histogram::from_samples(&[0.0, 5.0, 10.0], 2);
        assert_eq!(hist.counts, vec![1, 2]);
    }

    #[test]
    fn test_constant_samples() {
        let hist = Histogram::from_samples(&[3.0, 3.0, 3.0], 4);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.counts[0], 3);
    }

    #[test]
    fn test_bins_cover_range() {
        let hist = Histogram::from_samples(&[0.0, 30.0], 3);
        let edges: Vec<(f64, f64)> = hist.bins().map(|(l, r, _)| (l, r)).collect();
        assert_eq!(edges, vec![(0.0, 10.0), (10.0, 20.0), (20.0, 30.0)]);
    }

    #[test]
    fn test_density_curve_is_positive_and_peaks_near_center() {
        let mut samples = vec![0.0; 100];
        samples.extend((-10..=10).map(|i| i as f64));
        let hist = Histogram::from_samples(&samples, 20);
        let curve = density_curve(&samples, &hist, 21);
        assert_eq!(curve.len(), 21);
        assert!(curve.iter().all(|(_, y)| *y > 0.0));
        let peak = curve
            .iter()
            .cloned()
            .fold((0.0, f64::MIN), |a, b| if b.1 > a.1 { b } else { a });
        assert!(peak.0.abs() < 1.5);
    }
}
