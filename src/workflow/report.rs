//! Analysis report
//!
//! The complete output of one analysis run: the cleaned movement segments
//! with their annotation rows, per-hand submovement peaks, bimanual hold
//! summary, and the coarse kinematic features.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::export::AnnotationRow;
use crate::holds::HoldReport;
use crate::kinematics::features::SideFeatures;
use crate::segmentation::Segment;

/// Per-hand submovement peak locations and counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmovementSummary {
    /// Accepted peak frames of the left hand's velocity profile.
    pub left_peaks: Vec<usize>,
    /// Accepted peak frames of the right hand's velocity profile.
    pub right_peaks: Vec<usize>,
}

impl SubmovementSummary {
    pub fn left_count(&self) -> usize {
        self.left_peaks.len()
    }

    pub fn right_count(&self) -> usize {
        self.right_peaks.len()
    }

    /// Peak frames of both hands merged and sorted; the reference span used
    /// for hold trimming.
    pub fn combined(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self
            .left_peaks
            .iter()
            .chain(&self.right_peaks)
            .copied()
            .collect();
        all.sort_unstable();
        all
    }
}

/// Per-hand kinematic features.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub left: SideFeatures,
    pub right: SideFeatures,
}

/// Full result of analyzing one recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique id of this analysis run.
    pub id: Uuid,
    /// Frame rate of the analyzed recording.
    pub fps: f64,
    /// Number of frames in the recording.
    pub frame_count: usize,
    /// Cleaned movement segments, in frame order.
    pub segments: Vec<Segment>,
    /// Time-coded annotation rows for the segments.
    pub annotations: Vec<AnnotationRow>,
    /// Submovement peaks per hand.
    pub submovements: SubmovementSummary,
    /// Bimanual hold clusters and summary.
    pub holds: HoldReport,
    /// Coarse kinematic features per hand.
    pub features: FeatureSummary,
}

impl AnalysisReport {
    /// Empty report for a zero-frame recording.
    pub fn empty(fps: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            fps,
            frame_count: 0,
            segments: Vec::new(),
            annotations: Vec::new(),
            submovements: SubmovementSummary::default(),
            holds: HoldReport::default(),
            features: FeatureSummary::default(),
        }
    }

    /// Total time spent gesturing, in seconds.
    pub fn movement_secs(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.duration_secs(self.fps))
            .sum()
    }
}
