use crate::config::MotionParams;
use crate::track::{Point, Track};

/// A contiguous run of one track judged to represent continuous motion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub points: Vec<Point>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Split a track into motion segments with a two-pointer stationary scan.
///
/// The scan compares each candidate point against a sliding anchor
/// (`start_point`): a displacement above `stationary_distance` extends the
/// working segment, a displacement at or below it closes the segment.
/// Both pointers advance on every comparison, so the anchor slides even
/// during sustained motion and the emitted boundaries drift accordingly.
/// That drift is part of the measured behavior downstream statistics are
/// calibrated against; keep it when touching this function.
///
/// The working segment is seeded with the first `stationary_time` points,
/// and one segment is emitted per outer pass; a span with no qualifying
/// motion is still emitted and contributes zero-energy samples. `check_index`
/// advances on every comparison, so the scan terminates within `n` steps.
///
/// A track no longer than `stationary_time` yields no segments.
pub fn segment_track(track: &Track, params: &MotionParams) -> Vec<Segment> {
    let points = &track.points;
    let n = points.len();
    let mut check_index = params.stationary_time;
    if check_index >= n {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start_point = 0usize;
    let mut segment: Vec<Point> = points[..check_index].to_vec();

    while check_index < n {
        while check_index < n {
            let candidate = points[check_index];
            let moving = points[start_point].distance_to(&candidate) > params.stationary_distance;
            start_point += 1;
            check_index += 1;
            if moving {
                segment.push(candidate);
            } else {
                break;
            }
        }
        segments.push(Segment { points: segment });
        segment = points[start_point..check_index].to_vec();
    }

    segments
}

/// Segment every track, concatenating the emitted segments in track order.
pub fn segment_tracks(tracks: &[Track], params: &MotionParams) -> Vec<Segment> {
    tracks
        .iter()
        .flat_map(|track| segment_track(track, params))
        .collect()
}
