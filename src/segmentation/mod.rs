//! Movement segmentation
//!
//! Converts per-point position/confidence tracks into a cleaned channel-level
//! activity signal: per-point gesture classification, multi-channel merge,
//! and hysteresis post-filtering.

pub mod gesture;
pub mod hysteresis;
pub mod merge;
pub mod signal;

pub use gesture::GestureStateMachine;
pub use hysteresis::HysteresisFilter;
pub use merge::{merge, merge_all};
pub use signal::{BinarySignal, Segment};
