//! Hold detection
//!
//! Finds stretches where an arm (hand + elbow + fingertip) pauses as a
//! whole, per side and bimanually, and summarizes the bimanual holds that
//! fall inside the span of detected movement.
//!
//! Side-level and bimanual detection are deliberately separate operations:
//! "one side holds" and "both sides hold simultaneously" answer different
//! questions and must not be conflated at call sites.

pub mod cluster;
pub mod pause;

use serde::{Deserialize, Serialize};

use crate::kinematics::velocity_series;
use crate::tracking::SideTracks;
use crate::Result;

pub use cluster::{
    cluster_consecutive, hold_stats, trim_to_movement_span, HoldCluster, HoldStats,
    MIN_HOLD_FRAMES,
};
pub use pause::{bimanual_hold_frames, pause_frames, side_hold_frames, PAUSE_VELOCITY};

/// Frame-aligned velocity series for one side's three joints.
#[derive(Debug, Clone)]
pub struct SideVelocities {
    pub hand: Vec<f64>,
    pub elbow: Vec<f64>,
    pub finger: Vec<f64>,
}

impl SideVelocities {
    /// Derive the three velocity profiles from one side's tracks.
    pub fn from_tracks(tracks: &SideTracks<'_>, fps: f64) -> Self {
        Self {
            hand: velocity_series(tracks.hand, fps),
            elbow: velocity_series(tracks.elbow, fps),
            finger: velocity_series(tracks.finger, fps),
        }
    }
}

/// Clustered bimanual holds plus their summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldReport {
    /// Surviving clusters after movement-span trimming.
    pub clusters: Vec<HoldCluster>,
    /// Summary over clusters of at least the minimum length.
    pub stats: HoldStats,
}

/// Hold detector with the tuned pause threshold and cluster length floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldDetector {
    /// Velocity below which a joint counts as paused (units/s).
    pub pause_velocity: f64,
    /// Minimum cluster length for a hold to count (frames).
    pub min_cluster_frames: usize,
}

impl Default for HoldDetector {
    fn default() -> Self {
        Self {
            pause_velocity: PAUSE_VELOCITY,
            min_cluster_frames: MIN_HOLD_FRAMES,
        }
    }
}

impl HoldDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames where one side's hand, elbow, and fingertip all pause.
    pub fn per_side_holds(&self, side: &SideVelocities) -> Result<Vec<usize>> {
        side_hold_frames(&side.hand, &side.elbow, &side.finger, self.pause_velocity)
    }

    /// Frames where both sides hold simultaneously.
    pub fn bimanual_holds(&self, left: &SideVelocities, right: &SideVelocities) -> Result<Vec<usize>> {
        let left_holds = self.per_side_holds(left)?;
        let right_holds = self.per_side_holds(right)?;
        Ok(bimanual_hold_frames(&left_holds, &right_holds))
    }

    /// Full bimanual hold analysis: cluster, trim against the submovement
    /// span, and summarize. `submovement_peaks` are the accepted peak frames
    /// across both hands; with none detected, no trimming is applied.
    pub fn analyze(
        &self,
        left: &SideVelocities,
        right: &SideVelocities,
        submovement_peaks: &[usize],
        fps: f64,
    ) -> Result<HoldReport> {
        let frames = self.bimanual_holds(left, right)?;
        let clusters = trim_to_movement_span(cluster_consecutive(&frames), submovement_peaks);
        let stats = hold_stats(&clusters, self.min_cluster_frames, fps);
        Ok(HoldReport { clusters, stats })
    }
}
