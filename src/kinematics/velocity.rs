//! Displacement and velocity transforms
//!
//! Converts a position track into per-frame displacement and velocity, plus
//! the triangular moving-window smoother used before peak detection.

use crate::tracking::PointTrack;

/// Per-transition Euclidean displacement, in the track's native units.
///
/// Element `i` covers the `i -> i+1` transition, so the output has one fewer
/// element than the track has frames.
pub fn displacement_series(track: &PointTrack) -> Vec<f64> {
    track
        .samples()
        .windows(2)
        .map(|w| (w[1].x - w[0].x).hypot(w[1].y - w[0].y))
        .collect()
}

/// Per-transition velocity in units per second: displacement scaled by the
/// frame rate. Same indexing as [`displacement_series`].
pub fn velocity_series(track: &PointTrack, fps: f64) -> Vec<f64> {
    displacement_series(track)
        .into_iter()
        .map(|d| d * fps)
        .collect()
}

/// Smooth a series with a symmetric triangular window of width `2 * degree + 1`.
///
/// Interior samples are the weighted average of their window, weights falling
/// off linearly from the center. Edge samples where the window does not fit
/// repeat the first/last interior value, so the output length always equals
/// the input length. Inputs shorter than one full window are returned
/// unchanged.
pub fn smooth_triangular(data: &[f64], degree: usize) -> Vec<f64> {
    let n = data.len();
    if degree == 0 || n < 2 * degree + 1 {
        return data.to_vec();
    }

    // Sum of the triangle weights (degree - |offset|) over the full window.
    let weight_sum = (degree * degree) as f64;
    let mut smoothed = vec![0.0; n];
    for i in degree..n - degree {
        let mut acc = 0.0;
        for offset in 0..=2 * degree {
            let weight = degree as f64 - (offset as f64 - degree as f64).abs();
            acc += data[i + offset - degree] * weight;
        }
        smoothed[i] = acc / weight_sum;
    }

    let first = smoothed[degree];
    for value in smoothed.iter_mut().take(degree) {
        *value = first;
    }
    let last = smoothed[n - degree - 1];
    for value in smoothed.iter_mut().skip(n - degree) {
        *value = last;
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_is_euclidean() {
        let track = PointTrack::from_positions(&[(0.0, 0.0), (3.0, 4.0)], 1.0).unwrap();
        let displacement = displacement_series(&track);
        assert_eq!(displacement, vec![5.0]);
    }

    #[test]
    fn test_velocity_scales_by_fps() {
        let track =
            PointTrack::from_positions(&[(0.0, 0.0), (3.0, 4.0), (3.0, 4.0)], 1.0).unwrap();
        let velocity = velocity_series(&track, 25.0);
        assert_eq!(velocity.len(), 2);
        assert!((velocity[0] - 125.0).abs() < 1e-9);
        assert_eq!(velocity[1], 0.0);
    }

    #[test]
    fn test_velocity_of_short_tracks_is_empty() {
        let empty = PointTrack::from_positions(&[], 1.0).unwrap();
        assert!(velocity_series(&empty, 25.0).is_empty());

        let single = PointTrack::from_positions(&[(1.0, 1.0)], 1.0).unwrap();
        assert!(velocity_series(&single, 25.0).is_empty());
    }

    #[test]
    fn test_smoothing_preserves_length() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin()).collect();
        let smoothed = smooth_triangular(&data, 3);
        assert_eq!(smoothed.len(), data.len());
    }

    #[test]
    fn test_smoothing_constant_series_is_identity() {
        let data = vec![2.5; 20];
        let smoothed = smooth_triangular(&data, 3);
        for value in smoothed {
            assert!((value - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_smoothing_short_input_unchanged() {
        let data = vec![1.0, 5.0, 1.0];
        assert_eq!(smooth_triangular(&data, 3), data);
    }

    #[test]
    fn test_smoothing_degree_zero_unchanged() {
        let data = vec![1.0, 5.0, 1.0, 5.0];
        assert_eq!(smooth_triangular(&data, 0), data);
    }

    #[test]
    fn test_smoothing_attenuates_spike() {
        let mut data = vec![0.0; 21];
        data[10] = 1.0;
        let smoothed = smooth_triangular(&data, 3);
        // The spike spreads into its neighbors and shrinks at the center.
        assert!(smoothed[10] < 1.0);
        assert!(smoothed[10] > smoothed[9]);
        assert!(smoothed[9] > 0.0);
    }

    #[test]
    fn test_smoothing_edges_repeat_first_computed_value() {
        let data: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let smoothed = smooth_triangular(&data, 3);
        assert_eq!(smoothed[0], smoothed[3]);
        assert_eq!(smoothed[1], smoothed[3]);
        assert_eq!(smoothed[2], smoothed[3]);
        assert_eq!(smoothed[11], smoothed[8]);
    }
}
