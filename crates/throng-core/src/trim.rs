use std::path::Path;

use tracing::{info, warn};

use crate::consts::{MAX_TRIM_PASSES, OUTLIER_SIGMA_MULTIPLIER, SKEWNESS_TRIGGER};
use crate::error::Result;
use crate::plot;
use crate::report::log_summary;
use crate::stats::DistributionStats;

/// Result of the outlier-trimming loop.
#[derive(Clone, Debug)]
pub struct TrimOutcome {
    /// Samples surviving every pass.
    pub samples: Vec<u64>,
    /// Number of trimming passes that ran.
    pub passes: usize,
}

/// Iteratively remove extreme samples while the distribution stays skewed.
///
/// While skewness exceeds [`SKEWNESS_TRIGGER`], every sample at least
/// [`OUTLIER_SIGMA_MULTIPLIER`] population standard deviations from the mean
/// is dropped, the statistics are recomputed and logged, and the cleaned
/// histogram at `artifact` is rewritten. The loop stops as soon as any of
/// these hold: skewness falls to the trigger or below, skewness becomes
/// undefined (fewer than 3 samples left, or zero variance), a pass removes
/// nothing, or [`MAX_TRIM_PASSES`] passes have run.
pub fn trim_outliers(
    mut samples: Vec<u64>,
    stats: &DistributionStats,
    artifact: &Path,
) -> Result<TrimOutcome> {
    let mut current = Some(*stats);
    let mut passes = 0usize;

    loop {
        let Some(stats) = current else { break };
        let Some(skew) = stats.skewness else { break };
        if skew <= SKEWNESS_TRIGGER {
            break;
        }
        if passes >= MAX_TRIM_PASSES {
            warn!(passes, skewness = skew, "trim pass cap reached, distribution still skewed");
            break;
        }

        let threshold = OUTLIER_SIGMA_MULTIPLIER * stats.std_dev;
        let before = samples.len();
        samples.retain(|&energy| (energy as f64 - stats.mean).abs() < threshold);
        let removed = before - samples.len();
        passes += 1;
        info!(pass = passes, removed, remaining = samples.len(), "outliers removed");

        if removed == 0 {
            warn!("trim pass removed nothing, stopping");
            break;
        }

        current = DistributionStats::from_samples(&samples);
        if let Some(ref stats) = current {
            log_summary(stats);
        }
        if !samples.is_empty() {
            plot::render_histogram(&samples, artifact)?;
            info!(path = %artifact.display(), "cleaned histogram saved");
        }
    }

    Ok(TrimOutcome { samples, passes })
}
