use throng_core::config::MotionParams;
use throng_core::energy::{energy_distribution, segment_energies};
use throng_core::segment::{segment_track, segment_tracks};
use throng_core::track::{Point, Track};

fn params(stationary_time: usize, stationary_distance: f64) -> MotionParams {
    MotionParams {
        time_steps: 0.2,
        stationary_time,
        stationary_distance,
    }
}

fn track(points: Vec<(i32, i32)>) -> Track {
    Track {
        points: points.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
    }
}

/// Reference fixture: a still prefix of `stationary_time` points, then
/// sustained motion stepping (100, 100) per sample.
fn prefix_then_motion(stationary_time: usize, moving: usize) -> Track {
    let mut points = vec![(0, 0); stationary_time];
    for step in 1..=moving {
        points.push((step as i32 * 100, step as i32 * 100));
    }
    track(points)
}

#[test]
fn test_prefix_then_motion_yields_one_segment() {
    let params = params(15, 10.0);
    let fixture = prefix_then_motion(15, 5);

    let segments = segment_track(&fixture, &params);
    assert_eq!(segments.len(), 1);
    // The working segment is seeded with the still prefix, so the single
    // emitted segment carries the whole track.
    assert_eq!(segments[0].len(), fixture.len());

    let energies = segment_energies(&segments[0], params.time_steps);
    assert_eq!(energies.len(), fixture.len() - 1);
    // Still-prefix pairs contribute zero energy; every motion pair is
    // strictly positive.
    assert!(energies[..14].iter().all(|&energy| energy == 0));
    assert!(energies[14..].iter().all(|&energy| energy > 0));
}

#[test]
fn test_fully_stationary_track_emits_window_segments() {
    let params = params(15, 10.0);
    let fixture = track(vec![(50, 50); 20]);

    let segments = segment_track(&fixture, &params);
    // One point is consumed per outer pass, so a still track of n points
    // emits n - stationary_time windows, each stationary_time long.
    assert_eq!(segments.len(), 5);
    assert!(segments.iter().all(|segment| segment.len() == 15));

    let energies = energy_distribution(&segments, params.time_steps);
    assert_eq!(energies.len(), 5 * 14);
    assert!(energies.iter().all(|&energy| energy == 0));
}

#[test]
fn test_sliding_anchor_boundaries() {
    // After the prefix [a, a], point c moves away from anchor a; by the time
    // d is examined the anchor has slid to the second a, so d at (5, 0) is
    // judged stationary and closes the first segment. The rebuilt segment
    // starts at c, and the remaining motion extends it to the end.
    let params = params(2, 10.0);
    let fixture = track(vec![(0, 0), (0, 0), (100, 0), (5, 0), (200, 0), (300, 0)]);

    let segments = segment_track(&fixture, &params);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].len(), 3);
    assert_eq!(segments[1].len(), 4);
    // The closing scan advanced past c before the first emission, so c heads
    // the rebuilt segment as well.
    assert_eq!(segments[0].points[2], Point::new(100, 0));
    assert_eq!(segments[1].points[0], Point::new(100, 0));
}

#[test]
fn test_motion_to_exhaustion_emits_trailing_segment() {
    let params = params(3, 10.0);
    let fixture = track(vec![(0, 0), (0, 0), (0, 0), (100, 0), (200, 0), (300, 0)]);

    let segments = segment_track(&fixture, &params);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 6);
}

#[test]
fn test_track_not_longer_than_window_yields_nothing() {
    let params = params(5, 10.0);
    let fixture = track(vec![(0, 0), (10, 10), (20, 20)]);
    assert!(segment_track(&fixture, &params).is_empty());

    // Exactly stationary_time long is still too short.
    let boundary = track(vec![(0, 0); 5]);
    assert!(segment_track(&boundary, &params).is_empty());
}

#[test]
fn test_distribution_size_matches_segment_lengths() {
    let params = params(2, 10.0);
    let tracks = vec![
        prefix_then_motion(2, 4),
        track(vec![(0, 0), (0, 0), (100, 0), (5, 0), (200, 0), (300, 0)]),
    ];

    let segments = segment_tracks(&tracks, &params);
    let expected: usize = segments.iter().map(|segment| segment.len() - 1).sum();
    let distribution = energy_distribution(&segments, params.time_steps);
    assert_eq!(distribution.len(), expected);
}
