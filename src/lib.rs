//! # Gesture Segmenter
//!
//! Converts per-frame 2D keypoint trajectories from an external
//! pose-estimation engine into discrete, labeled movement intervals: gesture
//! on/off segments, submovement velocity peaks, and synchronized holds.
//!
//! ## Overview
//!
//! The input is one fully materialized recording: a set of frame-aligned
//! `(x, y, confidence)` tracks plus the frame rate. Each tracked point runs
//! through a gesture state machine built on rest detection, sustained-movement
//! confirmation, and lookahead return-to-rest scanning. Per-point signals are
//! OR-merged into a channel-level signal and cleaned by a hysteresis filter.
//! Independently, hand velocity profiles yield submovement peaks and the
//! three-joint arm velocities yield bimanual hold clusters.
//!
//! ## Quick Start
//!
//! ```
//! use gesture_segmenter::tracking::{PointTrack, Recording};
//! use gesture_segmenter::workflow::GestureAnalyzer;
//!
//! // Build a 100-frame recording: rest, a hand movement, rest again.
//! let mut positions = vec![(0.0, 0.0); 20];
//! for k in 1..=20 {
//!     positions.push((k as f64 * 5.0, k as f64 * 5.0));
//! }
//! positions.extend(vec![(100.0, 100.0); 60]);
//!
//! let mut recording = Recording::new(25.0);
//! recording
//!     .insert_track("R_Hand", PointTrack::from_positions(&positions, 1.0).unwrap())
//!     .unwrap();
//!
//! let report = GestureAnalyzer::new().analyze(&recording).unwrap();
//! assert_eq!(report.segments.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - [`tracking`]: input data model (samples, tracks, recordings, keypoint selection)
//! - [`kinematics`]: velocity/displacement transforms, stability checks, peak detection
//! - [`segmentation`]: gesture state machine, channel merge, hysteresis post-filter
//! - [`holds`]: per-side and bimanual hold detection with clustering
//! - [`export`]: timecode conversion and annotation rows
//! - [`workflow`]: the analyzer driving one recording end to end
//! - [`app`]: CLI and configuration management
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌───────────┐   ┌────────────┐
//! │ Recording  │──▶│ Gesture FSM │──▶│ OR-Merge  │──▶│ Hysteresis │──▶ segments
//! │ (tracks)   │   │ (per point) │   │ (channel) │   │ post-filter│
//! └────────────┘   └─────────────┘   └───────────┘   └────────────┘
//!        │
//!        ├────────▶ velocity ──▶ submovement peaks ──┐
//!        │                                           ▼
//!        └────────▶ 3-joint velocities ──▶ bimanual holds (trimmed to the
//!                                          span of detected movement)
//! ```

pub mod app;
pub mod export;
pub mod holds;
pub mod kinematics;
pub mod segmentation;
pub mod tracking;
pub mod workflow;

// Re-export commonly used types
pub use segmentation::{BinarySignal, Segment};
pub use tracking::{KeypointSample, PointTrack, Recording, Side};
pub use workflow::{AnalysisReport, GestureAnalyzer};

/// Result type alias for the gesture segmenter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gesture segmenter
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Frame counts of signals or tracks that must be aligned disagree.
    /// Indicates an upstream data-alignment bug, not a recoverable state.
    #[error("frame count mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A sample failed validation before entering the state machine.
    #[error("malformed sample at frame {frame}: {reason}")]
    MalformedSample { frame: usize, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
