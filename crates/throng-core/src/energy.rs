use crate::segment::Segment;

/// Kinetic-energy proxy for one consecutive point pair: `floor(0.5 * v^2)`
/// with unit mass, where `v` is the displacement per second rounded to two
/// decimals.
fn pair_energy(distance: f64, time_steps: f64) -> u64 {
    let speed = round2(distance / time_steps);
    (0.5 * speed * speed) as u64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Energy samples for one segment, one per consecutive point pair.
pub fn segment_energies(segment: &Segment, time_steps: f64) -> Vec<u64> {
    segment
        .points
        .windows(2)
        .map(|pair| pair_energy(pair[0].distance_to(&pair[1]), time_steps))
        .collect()
}

/// Concatenate all segments' energy samples into one distribution.
///
/// The distribution size equals the sum of `segment length - 1` over all
/// segments; ordering carries no meaning downstream.
pub fn energy_distribution(segments: &[Segment], time_steps: f64) -> Vec<u64> {
    segments
        .iter()
        .flat_map(|segment| segment_energies(segment, time_steps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Point;

    #[test]
    fn test_pair_energy_rounds_speed_before_squaring() {
        // distance 1, time_steps 0.3: speed 3.3333.. rounds to 3.33,
        // energy floor(0.5 * 3.33^2) = floor(5.54445) = 5.
        assert_eq!(pair_energy(1.0, 0.3), 5);
    }

    #[test]
    fn test_stationary_pair_has_zero_energy() {
        assert_eq!(pair_energy(0.0, 0.2), 0);
    }

    #[test]
    fn test_segment_energies_count_and_sign() {
        let segment = Segment {
            points: vec![
                Point::new(0, 0),
                Point::new(0, 0),
                Point::new(100, 100),
                Point::new(200, 200),
            ],
        };
        let energies = segment_energies(&segment, 0.2);
        assert_eq!(energies.len(), segment.len() - 1);
        assert_eq!(energies[0], 0);
        assert!(energies[1] > 0);
        assert!(energies[2] > 0);
    }

    #[test]
    fn test_distribution_size_is_sum_of_segment_pairs() {
        let a = Segment {
            points: vec![Point::new(0, 0), Point::new(10, 0), Point::new(20, 0)],
        };
        let b = Segment {
            points: vec![Point::new(0, 0), Point::new(0, 10)],
        };
        let distribution = energy_distribution(&[a.clone(), b.clone()], 0.2);
        assert_eq!(distribution.len(), (a.len() - 1) + (b.len() - 1));
    }
}
