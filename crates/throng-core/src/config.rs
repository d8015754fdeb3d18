use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{STATIONARY_DISTANCE_FRACTION, VIDEO_DATA_FILE};
use crate::error::{Result, ThrongError};

/// Recording metadata as written by the capture stage into `video_data.json`.
///
/// `is_cam` and `start_time` are carried for the sibling crowd-count
/// visualization and are not consumed by this pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Frames between recorded samples.
    #[serde(rename = "DATA_RECORD_FRAME")]
    pub data_record_frame: f64,

    /// Frame linear size in pixels after preprocessing.
    #[serde(rename = "PROCESSED_FRAME_SIZE")]
    pub frame_size: f64,

    /// Source video frame rate.
    #[serde(rename = "VID_FPS")]
    pub vid_fps: f64,

    /// Maximum tracked-object age, in seconds.
    #[serde(rename = "TRACK_MAX_AGE")]
    pub track_max_age: f64,

    #[serde(rename = "IS_CAM", default)]
    pub is_cam: bool,

    #[serde(rename = "START_TIME", default)]
    pub start_time: String,
}

impl RecordingConfig {
    /// Load the recording config from a run directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(VIDEO_DATA_FILE);
        if !path.is_file() {
            return Err(ThrongError::MissingInput(path));
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Timing and threshold constants derived from the recording config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Seconds between recorded samples.
    pub time_steps: f64,
    /// Minimum sample count before a track is eligible for segmentation.
    pub stationary_time: usize,
    /// Displacement threshold (pixels) separating motion from noise.
    pub stationary_distance: f64,
}

/// Derive [`MotionParams`] from a recording config.
///
/// Fails when the frame rate or the sample interval is zero or negative:
/// `time_steps` must be strictly positive.
pub fn resolve(config: &RecordingConfig) -> Result<MotionParams> {
    if config.vid_fps <= 0.0 {
        return Err(ThrongError::InvalidConfig(format!(
            "VID_FPS must be positive, got {}",
            config.vid_fps
        )));
    }
    if config.data_record_frame <= 0.0 {
        return Err(ThrongError::InvalidConfig(format!(
            "DATA_RECORD_FRAME must be positive, got {}",
            config.data_record_frame
        )));
    }

    let time_steps = config.data_record_frame / config.vid_fps;
    // Clamp keeps the stationary window at least one sample wide for
    // degenerate TRACK_MAX_AGE values.
    let stationary_time = ((config.track_max_age / time_steps).ceil() as usize).max(1);
    let stationary_distance = config.frame_size * STATIONARY_DISTANCE_FRACTION;

    Ok(MotionParams {
        time_steps,
        stationary_time,
        stationary_distance,
    })
}
