//! Hold clustering and summary statistics
//!
//! Groups bimanual-hold frames into maximal consecutive runs, trims runs
//! lying outside the span of detected movement, and summarizes the
//! survivors. A hold only counts once it lasts at least three frames.

use serde::{Deserialize, Serialize};

/// Minimum cluster length, in frames, for a run to count as a hold.
pub const MIN_HOLD_FRAMES: usize = 3;

/// One maximal run of consecutive hold frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldCluster {
    /// First frame of the run.
    pub start: usize,
    /// Run length in frames, always >= 1.
    pub len: usize,
}

impl HoldCluster {
    /// Last frame of the run, inclusive.
    pub fn end(&self) -> usize {
        self.start + self.len - 1
    }
}

/// Summary over the surviving hold clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldStats {
    /// Number of holds.
    pub count: usize,
    /// Total time spent holding, in seconds.
    pub total_secs: f64,
    /// Mean hold duration, in frames. Zero when no hold survives.
    pub mean_frames: f64,
}

/// Cluster ascending frame indices into maximal consecutive runs.
pub fn cluster_consecutive(frames: &[usize]) -> Vec<HoldCluster> {
    let mut clusters: Vec<HoldCluster> = Vec::new();
    for &frame in frames {
        match clusters.last_mut() {
            Some(last) if frame == last.end() + 1 => last.len += 1,
            _ => clusters.push(HoldCluster {
                start: frame,
                len: 1,
            }),
        }
    }
    clusters
}

/// Drop clusters outside the span of detected movement: any cluster starting
/// before the earliest submovement peak or after the latest one. With no
/// peaks at all there is no span to trim against and the clusters pass
/// through unchanged.
pub fn trim_to_movement_span(clusters: Vec<HoldCluster>, peaks: &[usize]) -> Vec<HoldCluster> {
    let (Some(&first), Some(&last)) = (peaks.iter().min(), peaks.iter().max()) else {
        return clusters;
    };
    clusters
        .into_iter()
        .filter(|c| c.start >= first && c.start <= last)
        .collect()
}

/// Summarize clusters of at least `min_len` frames. Defined (all zero) for
/// the empty case.
pub fn hold_stats(clusters: &[HoldCluster], min_len: usize, fps: f64) -> HoldStats {
    let surviving: Vec<&HoldCluster> = clusters.iter().filter(|c| c.len >= min_len).collect();
    if surviving.is_empty() {
        return HoldStats::default();
    }
    let total_frames: usize = surviving.iter().map(|c| c.len).sum();
    HoldStats {
        count: surviving.len(),
        total_secs: total_frames as f64 / fps,
        mean_frames: total_frames as f64 / surviving.len() as f64,
    }
}
