use std::fs;
use std::path::Path;

use tempfile::tempdir;
use throng_core::config::MotionParams;
use throng_core::error::ThrongError;
use throng_core::track::{admission_threshold, load_tracks};

fn params(stationary_time: usize) -> MotionParams {
    MotionParams {
        time_steps: 0.2,
        stationary_time,
        stationary_distance: 10.0,
    }
}

fn write_movement_data(dir: &Path, rows: &[String]) {
    fs::write(dir.join("movement_data.csv"), rows.join("\n")).unwrap();
}

/// One raw row: 3 metadata fields then `coords` trailing fields counting up.
fn row_with_trailing(coords: usize) -> String {
    let mut fields = vec!["0".to_string(), "person_1".to_string(), "tracked".to_string()];
    fields.extend((0..coords).map(|value| value.to_string()));
    fields.join(",")
}

#[test]
fn test_admission_threshold_tracks_stationary_time() {
    assert_eq!(admission_threshold(&params(15)), 15);
    // The floor applies when the stationary window is narrow.
    assert_eq!(admission_threshold(&params(2)), 4);
}

#[test]
fn test_row_at_threshold_dropped_longer_admitted() {
    let dir = tempdir().unwrap();
    // Threshold is max(4, 15) = 15 trailing fields: 14 and 15 are dropped,
    // 16 (8 points) is admitted.
    write_movement_data(
        dir.path(),
        &[
            row_with_trailing(14),
            row_with_trailing(15),
            row_with_trailing(16),
        ],
    );

    let tracks = load_tracks(dir.path(), &params(15)).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].len(), 8);
}

#[test]
fn test_rows_without_coordinates_dropped_silently() {
    let dir = tempdir().unwrap();
    write_movement_data(
        dir.path(),
        &["0,person_1,tracked".to_string(), row_with_trailing(2)],
    );

    let tracks = load_tracks(dir.path(), &params(2)).unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn test_non_integer_coordinate_aborts() {
    let dir = tempdir().unwrap();
    write_movement_data(
        dir.path(),
        &["0,person_1,tracked,1,2,3,4,oops,6".to_string()],
    );

    let err = load_tracks(dir.path(), &params(2)).unwrap_err();
    assert!(matches!(err, ThrongError::Parse { line: 1, .. }));
}

#[test]
fn test_odd_coordinate_count_aborts() {
    let dir = tempdir().unwrap();
    write_movement_data(
        dir.path(),
        &["0,person_1,tracked,1,2,3,4,5,6,7".to_string()],
    );

    let err = load_tracks(dir.path(), &params(2)).unwrap_err();
    assert!(matches!(err, ThrongError::RaggedRow { count: 7, .. }));
}

#[test]
fn test_missing_movement_file_is_distinct() {
    let dir = tempdir().unwrap();
    let err = load_tracks(dir.path(), &params(2)).unwrap_err();
    assert!(matches!(err, ThrongError::MissingInput(_)));
}
