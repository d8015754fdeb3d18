use std::path::Path;

use tracing::{debug, info};

use crate::config::MotionParams;
use crate::consts::{MIN_TRAILING_FIELDS, MOVEMENT_DATA_FILE, ROW_METADATA_FIELDS};
use crate::error::{Result, ThrongError};

/// One recorded sample position, in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// The full recorded trajectory of one tracked object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub points: Vec<Point>,
}

impl Track {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Minimum trailing-field count a row must strictly exceed to be admitted.
pub fn admission_threshold(params: &MotionParams) -> usize {
    MIN_TRAILING_FIELDS.max(params.stationary_time)
}

/// Load candidate tracks from `movement_data.csv` in the run directory.
///
/// Each row carries [`ROW_METADATA_FIELDS`] leading metadata fields followed
/// by alternating integer x/y values. Rows with too few coordinate fields are
/// dropped silently; a non-integer coordinate or an unpairable odd field
/// count aborts the run.
pub fn load_tracks(dir: &Path, params: &MotionParams) -> Result<Vec<Track>> {
    let path = dir.join(MOVEMENT_DATA_FILE);
    if !path.is_file() {
        return Err(ThrongError::MissingInput(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;

    let min_fields = admission_threshold(params);
    let mut tracks = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 1;
        match parse_row(&record, line, min_fields)? {
            Some(track) => tracks.push(track),
            None => debug!(line, "row below admission threshold, dropped"),
        }
    }

    info!(tracks = tracks.len(), "tracks recorded");
    Ok(tracks)
}

/// Parse one raw row into a track, or `None` if it is too short to admit.
fn parse_row(record: &csv::StringRecord, line: usize, min_fields: usize) -> Result<Option<Track>> {
    let trailing = record.len().saturating_sub(ROW_METADATA_FIELDS);
    if trailing <= min_fields {
        return Ok(None);
    }
    if trailing % 2 != 0 {
        return Err(ThrongError::RaggedRow {
            line,
            count: trailing,
        });
    }

    let mut coords = Vec::with_capacity(trailing);
    for (offset, field) in record.iter().skip(ROW_METADATA_FIELDS).enumerate() {
        let value: i32 = field.trim().parse().map_err(|_| ThrongError::Parse {
            line,
            field: ROW_METADATA_FIELDS + offset,
            value: field.to_string(),
        })?;
        coords.push(value);
    }

    let points = coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();
    Ok(Some(Track { points }))
}
