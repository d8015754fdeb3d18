/// Recording metadata document written by the capture stage.
pub const VIDEO_DATA_FILE: &str = "video_data.json";

/// Raw per-track coordinate rows written by the tracking stage.
pub const MOVEMENT_DATA_FILE: &str = "movement_data.csv";

/// Primary artifact, written by every presentation tier.
pub const DISTRIBUTION_PLOT_FILE: &str = "energy_distribution.png";

/// Post-trimming artifact, overwritten on each trimming pass.
pub const CLEANED_PLOT_FILE: &str = "energy_distribution_cleaned.png";

/// Working directory used when the caller does not name one.
pub const DEFAULT_RUN_DIR: &str = "processed_data";

/// Number of leading per-row metadata fields before the coordinate run.
pub const ROW_METADATA_FIELDS: usize = 3;

/// Floor on the trailing-field admission threshold. A row must carry strictly
/// more than `max(MIN_TRAILING_FIELDS, stationary_time)` coordinate fields.
pub const MIN_TRAILING_FIELDS: usize = 4;

/// Fraction of the frame linear size below which a displacement is treated as
/// noise rather than motion.
pub const STATIONARY_DISTANCE_FRACTION: f64 = 0.01;

/// Sample skewness above which the energy distribution is considered
/// long-tailed and outlier trimming is triggered.
pub const SKEWNESS_TRIGGER: f64 = 7.5;

/// Deviation multiplier for outlier removal: samples at least this many
/// population standard deviations from the mean are dropped.
pub const OUTLIER_SIGMA_MULTIPLIER: f64 = 3.0;

/// Hard cap on trimming passes. The trigger-and-trim loop has no natural
/// bound when the distribution stops shrinking while still skewed.
pub const MAX_TRIM_PASSES: usize = 16;

/// Exponent applied to the mean to derive the acceptable energy level.
pub const ACCEPTABLE_ENERGY_EXPONENT: f64 = 1.05;

/// Number of histogram bin edges spanning [min, max] of the distribution.
/// 100 edges give 99 equal-width bins.
pub const HISTOGRAM_BIN_EDGES: usize = 100;

/// Padding added on both sides of the histogram x-axis, in energy units.
pub const HISTOGRAM_X_PADDING: f64 = 5.0;

/// Artifact dimensions in pixels.
pub const PLOT_WIDTH: u32 = 1500;
pub const PLOT_HEIGHT: u32 = 900;
