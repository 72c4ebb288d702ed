//! Summary kinematic features
//!
//! Coarse per-hand descriptors reported alongside the segment list: peak
//! velocity of the smoothed profile and the visual area swept by the
//! fingertip. Both are defined (as zero) for degenerate inputs.

use serde::{Deserialize, Serialize};

use super::velocity::smooth_triangular;
use crate::tracking::PointTrack;

/// Smoothing degree used when extracting peak velocity.
pub const PEAK_VELOCITY_SMOOTHING: usize = 3;

/// Per-side summary features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SideFeatures {
    /// Maximum of the smoothed velocity profile, units/s.
    pub peak_velocity: f64,
    /// Bounding-box area swept by the fingertip, native units squared.
    pub sweep_area: f64,
}

/// Maximum of the triangular-smoothed velocity series; 0 when empty.
pub fn peak_velocity(velocity: &[f64]) -> f64 {
    smooth_triangular(velocity, PEAK_VELOCITY_SMOOTHING)
        .into_iter()
        .fold(0.0, f64::max)
}

/// Area of the axis-aligned bounding box covered by the track's positions.
pub fn sweep_area(track: &PointTrack) -> f64 {
    let samples = track.samples();
    let Some(first) = samples.first() else {
        return 0.0;
    };
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
    for s in &samples[1..] {
        x_min = x_min.min(s.x);
        x_max = x_max.max(s.x);
        y_min = y_min.min(s.y);
        y_max = y_max.max(s.y);
    }
    (x_max - x_min) * (y_max - y_min)
}
