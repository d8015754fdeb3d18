use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::plot;
use crate::stats::DistributionStats;

/// Presentation tier, selected exhaustively by distribution size.
#[derive(Clone, Debug, PartialEq)]
pub enum Tier {
    /// No energy samples at all; a placeholder artifact is emitted.
    Empty,
    /// Fewer than 3 samples: per-sample bars, no moment statistics.
    Sparse { samples: Vec<u64> },
    /// Enough samples for the full statistical summary and histogram.
    Full {
        samples: Vec<u64>,
        stats: DistributionStats,
    },
}

/// Select the presentation tier for one energy distribution.
pub fn classify(samples: Vec<u64>) -> Tier {
    if samples.is_empty() {
        return Tier::Empty;
    }
    match DistributionStats::from_samples(&samples) {
        Some(stats) if stats.count >= 3 => Tier::Full { samples, stats },
        _ => Tier::Sparse { samples },
    }
}

/// Emit the tier's artifact at `artifact` and the matching log lines.
pub fn report(tier: &Tier, artifact: &Path) -> Result<()> {
    match tier {
        Tier::Empty => {
            info!("no energy data available, insufficient movement data for analysis");
            plot::render_placeholder(artifact)?;
            info!(path = %artifact.display(), "placeholder artifact saved");
        }
        Tier::Sparse { samples } => {
            info!(samples = samples.len(), "limited energy data, plotting raw levels");
            plot::render_bars(samples, artifact)?;
            info!(path = %artifact.display(), "bar artifact saved");
        }
        Tier::Full { samples, stats } => {
            log_summary(stats);
            plot::render_histogram(samples, artifact)?;
            info!(path = %artifact.display(), "histogram artifact saved");
        }
    }
    Ok(())
}

/// Log the full statistical summary of a distribution.
pub fn log_summary(stats: &DistributionStats) {
    info!(
        count = stats.count,
        mean = stats.mean,
        std_dev = stats.std_dev,
        skewness = stats.skewness,
        kurtosis = stats.kurtosis,
        acceptable_energy = stats.acceptable_energy,
        "energy distribution summary"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(Vec::new()), Tier::Empty);
    }

    #[test]
    fn test_classify_sparse_boundaries() {
        assert!(matches!(classify(vec![4]), Tier::Sparse { .. }));
        assert!(matches!(classify(vec![4, 9]), Tier::Sparse { .. }));
    }

    #[test]
    fn test_classify_full_at_three_samples() {
        match classify(vec![1, 1, 100]) {
            Tier::Full { samples, stats } => {
                assert_eq!(samples.len(), 3);
                assert!(stats.skewness.unwrap() > 1.7);
            }
            other => panic!("expected full tier, got {other:?}"),
        }
    }
}
