//! Submovement peak detection
//!
//! Finds the velocity peaks that mark individual submovements within a
//! gesture. The raw velocity series is smoothed with a triangular window,
//! then local maxima are filtered by height, mutual spacing, and prominence,
//! in that order.

use serde::{Deserialize, Serialize};

use super::velocity::smooth_triangular;

/// Minimum smoothed velocity a peak must reach, in units per second.
pub const MIN_PEAK_HEIGHT: f64 = 0.2;
/// Minimum prominence above the higher flanking minimum, in units per second.
pub const MIN_PEAK_PROMINENCE: f64 = 0.2;
/// Minimum spacing between accepted peaks, in frames.
pub const MIN_PEAK_SPACING: usize = 5;
/// Default triangular smoothing degree applied before peak picking.
pub const DEFAULT_SMOOTHING_DEGREE: usize = 3;

/// Velocity-peak detector with the tuned acceptance thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmovementDetector {
    /// Triangular smoothing degree (window width `2 * degree + 1`).
    pub smoothing_degree: usize,
    /// Minimum peak height (units/s).
    pub min_height: f64,
    /// Minimum peak prominence (units/s).
    pub min_prominence: f64,
    /// Minimum spacing between peaks (frames); of two closer candidates the
    /// lower one is discarded.
    pub min_spacing: usize,
}

impl Default for SubmovementDetector {
    fn default() -> Self {
        Self {
            smoothing_degree: DEFAULT_SMOOTHING_DEGREE,
            min_height: MIN_PEAK_HEIGHT,
            min_prominence: MIN_PEAK_PROMINENCE,
            min_spacing: MIN_PEAK_SPACING,
        }
    }
}

impl SubmovementDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect submovement peaks in a velocity series.
    ///
    /// Returns the accepted peak indices in ascending order. Indices refer to
    /// the velocity series (element `i` covers the `i -> i+1` frame
    /// transition).
    pub fn detect(&self, velocity: &[f64]) -> Vec<usize> {
        let smoothed = smooth_triangular(velocity, self.smoothing_degree);
        let candidates = local_maxima(&smoothed);
        let tall: Vec<usize> = candidates
            .into_iter()
            .filter(|&i| smoothed[i] >= self.min_height)
            .collect();
        let spaced = enforce_spacing(&tall, &smoothed, self.min_spacing);
        spaced
            .into_iter()
            .filter(|&i| prominence(&smoothed, i) >= self.min_prominence)
            .collect()
    }

    /// Number of submovements in a velocity series.
    pub fn count(&self, velocity: &[f64]) -> usize {
        self.detect(velocity).len()
    }
}

/// Strict local maxima; a flat-topped peak resolves to its plateau midpoint.
fn local_maxima(data: &[f64]) -> Vec<usize> {
    let n = data.len();
    let mut peaks = Vec::new();
    let mut i = 1;
    while i + 1 < n {
        if data[i - 1] < data[i] {
            // Extend across a possible plateau.
            let mut ahead = i + 1;
            while ahead < n && data[ahead] == data[i] {
                ahead += 1;
            }
            if ahead < n && data[ahead] < data[i] {
                peaks.push((i + ahead - 1) / 2);
            }
            i = ahead;
        } else {
            i += 1;
        }
    }
    peaks
}

/// Drop peaks closer than `min_spacing` to a higher accepted peak.
///
/// Peaks are considered in descending height; each accepted peak suppresses
/// its too-close neighbors. Ties resolve toward the later peak.
fn enforce_spacing(peaks: &[usize], data: &[f64], min_spacing: usize) -> Vec<usize> {
    if min_spacing <= 1 || peaks.len() < 2 {
        return peaks.to_vec();
    }
    let mut keep = vec![true; peaks.len()];
    let mut order: Vec<usize> = (0..peaks.len()).collect();
    order.sort_by(|&a, &b| {
        data[peaks[a]]
            .partial_cmp(&data[peaks[b]])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for &idx in order.iter().rev() {
        if !keep[idx] {
            continue;
        }
        let mut k = idx;
        while k > 0 {
            k -= 1;
            if peaks[idx] - peaks[k] < min_spacing {
                keep[k] = false;
            } else {
                break;
            }
        }
        let mut k = idx + 1;
        while k < peaks.len() && peaks[k] - peaks[idx] < min_spacing {
            keep[k] = false;
            k += 1;
        }
    }

    peaks
        .iter()
        .zip(&keep)
        .filter_map(|(&p, &kept)| kept.then_some(p))
        .collect()
}

/// Peak prominence: height above the higher of the two flanking minima, each
/// taken between the peak and the nearest taller sample (or the signal edge).
fn prominence(data: &[f64], peak: usize) -> f64 {
    let height = data[peak];

    let mut left_min = height;
    let mut j = peak;
    while j > 0 {
        j -= 1;
        if data[j] > height {
            break;
        }
        left_min = left_min.min(data[j]);
    }

    let mut right_min = height;
    let mut j = peak;
    while j + 1 < data.len() {
        j += 1;
        if data[j] > height {
            break;
        }
        right_min = right_min.min(data[j]);
    }

    height - left_min.max(right_min)
}
