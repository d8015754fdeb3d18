use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{self, RecordingConfig};
use crate::consts::{CLEANED_PLOT_FILE, DISTRIBUTION_PLOT_FILE};
use crate::energy::energy_distribution;
use crate::error::Result;
use crate::report::{self, Tier};
use crate::segment::segment_tracks;
use crate::track::load_tracks;
use crate::trim::trim_outliers;

/// Per-request isolation: one analysis run owns one directory, reading its
/// inputs and writing its artifacts there.
#[derive(Clone, Debug)]
pub struct RunContext {
    dir: PathBuf,
}

impl RunContext {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn distribution_plot(&self) -> PathBuf {
        self.dir.join(DISTRIBUTION_PLOT_FILE)
    }

    pub fn cleaned_plot(&self) -> PathBuf {
        self.dir.join(CLEANED_PLOT_FILE)
    }
}

/// Which presentation tier a run ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierKind {
    Empty,
    Sparse,
    Full,
}

/// End-of-run accounting returned to the caller.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub tracks: usize,
    pub segments: usize,
    pub samples: usize,
    pub tier: TierKind,
    pub trim_passes: usize,
    pub retained_samples: usize,
    pub artifact: PathBuf,
}

/// Run the full analysis pipeline once, strictly forward:
/// resolve config, load and filter tracks, segment, compute the energy
/// distribution, report the tier artifact, then trim outliers if the
/// distribution is excessively skewed.
pub fn run(ctx: &RunContext) -> Result<RunSummary> {
    let config = RecordingConfig::load(ctx.dir())?;
    let params = config::resolve(&config)?;
    info!(
        time_steps = params.time_steps,
        stationary_time = params.stationary_time,
        stationary_distance = params.stationary_distance,
        "derived motion parameters"
    );

    let tracks = load_tracks(ctx.dir(), &params)?;
    let segments = segment_tracks(&tracks, &params);
    let samples = energy_distribution(&segments, params.time_steps);
    info!(
        segments = segments.len(),
        samples = samples.len(),
        "useful movement data"
    );

    let track_count = tracks.len();
    let segment_count = segments.len();
    let sample_count = samples.len();

    let artifact = ctx.distribution_plot();
    let tier = report::classify(samples);
    report::report(&tier, &artifact)?;

    let (kind, trim_passes, retained_samples) = match tier {
        Tier::Empty => (TierKind::Empty, 0, 0),
        Tier::Sparse { samples } => (TierKind::Sparse, 0, samples.len()),
        Tier::Full { samples, stats } => {
            let outcome = trim_outliers(samples, &stats, &ctx.cleaned_plot())?;
            (TierKind::Full, outcome.passes, outcome.samples.len())
        }
    };

    Ok(RunSummary {
        tracks: track_count,
        segments: segment_count,
        samples: sample_count,
        tier: kind,
        trim_passes,
        retained_samples,
        artifact,
    })
}
