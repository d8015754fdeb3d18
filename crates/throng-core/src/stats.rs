use crate::consts::ACCEPTABLE_ENERGY_EXPONENT;

/// Summary statistics of one energy distribution.
///
/// Skewness and kurtosis are `None` when their sample estimators are
/// undefined: fewer than 3 (resp. 4) samples, or zero variance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub acceptable_energy: u64,
}

impl DistributionStats {
    /// Compute all statistics for one distribution of energy samples.
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let values: Vec<f64> = samples.iter().map(|&energy| energy as f64).collect();
        let mean = mean(&values);
        Some(Self {
            count: values.len(),
            mean,
            std_dev: population_std(&values),
            skewness: skewness(&values),
            kurtosis: kurtosis(&values),
            acceptable_energy: acceptable_energy_level(mean),
        })
    }
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// k-th central moment, normalized by n.
fn central_moment(values: &[f64], mean: f64, k: u32) -> f64 {
    values
        .iter()
        .map(|value| (value - mean).powi(k as i32))
        .sum::<f64>()
        / values.len() as f64
}

/// Population standard deviation (divide by n).
pub fn population_std(values: &[f64]) -> f64 {
    let mean = mean(values);
    central_moment(values, mean, 2).sqrt()
}

/// Adjusted Fisher-Pearson sample skewness:
/// `G1 = sqrt(n(n-1)) / (n-2) * m3 / m2^(3/2)`.
///
/// `None` for n < 3 or a zero-variance distribution.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let mean = mean(values);
    let m2 = central_moment(values, mean, 2);
    if m2 == 0.0 {
        return None;
    }
    let m3 = central_moment(values, mean, 3);
    let n = n as f64;
    Some((n * (n - 1.0)).sqrt() / (n - 2.0) * m3 / m2.powf(1.5))
}

/// Sample excess kurtosis (Fisher):
/// `G2 = (n-1) / ((n-2)(n-3)) * ((n+1)(m4/m2^2 - 3) + 6)`.
///
/// `None` for n < 4 or a zero-variance distribution.
pub fn kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let mean = mean(values);
    let m2 = central_moment(values, mean, 2);
    if m2 == 0.0 {
        return None;
    }
    let m4 = central_moment(values, mean, 4);
    let n = n as f64;
    let excess = m4 / (m2 * m2) - 3.0;
    Some((n - 1.0) / ((n - 2.0) * (n - 3.0)) * ((n + 1.0) * excess + 6.0))
}

/// Acceptable energy level: `floor(mean^1.05)`. Energies above this level
/// flag abnormal motion downstream.
pub fn acceptable_energy_level(mean: f64) -> u64 {
    mean.powf(ACCEPTABLE_ENERGY_EXPONENT) as u64
}
