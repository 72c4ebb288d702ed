//! Keypoint tracking input model
//!
//! Types for the per-frame keypoint trajectories consumed by the analysis
//! pipeline, plus the recording container and hand keypoint selection.

pub mod recording;
pub mod selection;
pub mod types;

pub use recording::Recording;
pub use selection::most_reliable_keypoints;
pub use types::{KeypointSample, PointTrack, Side, SideTracks};
