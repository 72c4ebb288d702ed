//! Hand keypoint selection
//!
//! The pose engine reports a full 21-point hand model, but only the most
//! reliably tracked fingertip and palm points are worth segmenting. Selection
//! is by mean tracking confidence over the whole recording.

use super::types::PointTrack;

/// Indices of finger keypoints in the engine's 21-point hand model.
/// Everything else (wrist and knuckle bases) counts as palm.
pub const FINGER_KEYPOINTS: [usize; 15] = [2, 3, 4, 6, 7, 8, 10, 11, 12, 14, 15, 16, 18, 19, 20];

/// Pick the finger keypoint and the palm keypoint with the highest mean
/// confidence from one hand's keypoint tracks, indexed by model position.
///
/// Returns `(finger_index, palm_index)`, or `None` when the slice contains no
/// keypoint of either class.
pub fn most_reliable_keypoints(tracks: &[PointTrack]) -> Option<(usize, usize)> {
    let mut ranked: Vec<(usize, f64)> = tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| (idx, track.mean_confidence()))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let finger = ranked
        .iter()
        .map(|&(idx, _)| idx)
        .find(|idx| FINGER_KEYPOINTS.contains(idx))?;
    let palm = ranked
        .iter()
        .map(|&(idx, _)| idx)
        .find(|idx| !FINGER_KEYPOINTS.contains(idx))?;
    Some((finger, palm))
}
