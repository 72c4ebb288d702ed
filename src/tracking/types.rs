//! Core tracking types
//!
//! A recording is a set of frame-aligned keypoint tracks produced by an
//! external pose-estimation engine. Every sample carries the engine's
//! tracking confidence; segmentation decisions gate on it.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One keypoint observation at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeypointSample {
    /// Horizontal position in the engine's native units (typically pixels)
    pub x: f64,
    /// Vertical position in the engine's native units
    pub y: f64,
    /// Tracking confidence reported by the pose engine, in [0, 1]
    pub confidence: f64,
}

impl KeypointSample {
    pub fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// Check that the sample is usable: finite coordinates and an in-range
    /// confidence. Out-of-range samples indicate an upstream parsing bug and
    /// must not reach the state machine.
    pub fn check(&self, frame: usize) -> Result<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(Error::MalformedSample {
                frame,
                reason: format!("non-finite coordinates ({}, {})", self.x, self.y),
            });
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(Error::MalformedSample {
                frame,
                reason: format!("confidence {} outside [0, 1]", self.confidence),
            });
        }
        Ok(())
    }
}

/// The per-frame trajectory of one named tracked point.
///
/// Frames are contiguous and 0-indexed; all tracks of one recording have the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTrack {
    samples: Vec<KeypointSample>,
}

impl PointTrack {
    /// Build a track from raw samples, rejecting malformed ones.
    pub fn new(samples: Vec<KeypointSample>) -> Result<Self> {
        let track = Self { samples };
        track.validate()?;
        Ok(track)
    }

    /// Convenience constructor for positions sharing one confidence value.
    pub fn from_positions(positions: &[(f64, f64)], confidence: f64) -> Result<Self> {
        Self::new(
            positions
                .iter()
                .map(|&(x, y)| KeypointSample::new(x, y, confidence))
                .collect(),
        )
    }

    /// Re-check every sample. Needed after deserializing, which bypasses
    /// [`PointTrack::new`].
    pub fn validate(&self) -> Result<()> {
        for (frame, sample) in self.samples.iter().enumerate() {
            sample.check(frame)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample(&self, frame: usize) -> &KeypointSample {
        &self.samples[frame]
    }

    pub fn samples(&self) -> &[KeypointSample] {
        &self.samples
    }

    pub fn position(&self, frame: usize) -> (f64, f64) {
        let s = &self.samples[frame];
        (s.x, s.y)
    }

    pub fn confidence(&self, frame: usize) -> f64 {
        self.samples[frame].confidence
    }

    /// Mean tracking confidence across all frames; 0 for an empty track.
    pub fn mean_confidence(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|s| s.confidence).sum::<f64>() / self.samples.len() as f64
    }
}

/// Body side, used to address the hand/elbow/fingertip track triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Canonical track name for the wrist/palm point of this side.
    pub fn hand(&self) -> &'static str {
        match self {
            Side::Left => "L_Hand",
            Side::Right => "R_Hand",
        }
    }

    /// Canonical track name for the elbow of this side.
    pub fn elbow(&self) -> &'static str {
        match self {
            Side::Left => "LElb",
            Side::Right => "RElb",
        }
    }

    /// Canonical track name for the extended-finger tip of this side.
    pub fn finger(&self) -> &'static str {
        match self {
            Side::Left => "L_finger",
            Side::Right => "R_finger",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Borrowed view of one side's hand/elbow/fingertip tracks.
#[derive(Debug, Clone, Copy)]
pub struct SideTracks<'a> {
    pub hand: &'a PointTrack,
    pub elbow: &'a PointTrack,
    pub finger: &'a PointTrack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_check_valid() {
        let sample = KeypointSample::new(120.0, 80.5, 0.9);
        assert!(sample.check(0).is_ok());
    }

    #[test]
    fn test_sample_check_rejects_out_of_range_confidence() {
        let sample = KeypointSample::new(120.0, 80.5, 1.5);
        let err = sample.check(7).unwrap_err();
        assert!(matches!(err, Error::MalformedSample { frame: 7, .. }));
    }

    #[test]
    fn test_sample_check_rejects_negative_confidence() {
        let sample = KeypointSample::new(0.0, 0.0, -0.1);
        assert!(sample.check(0).is_err());
    }

    #[test]
    fn test_sample_check_rejects_nan_coordinates() {
        let sample = KeypointSample::new(f64::NAN, 0.0, 0.5);
        assert!(sample.check(0).is_err());
    }

    #[test]
    fn test_track_construction_validates() {
        let samples = vec![
            KeypointSample::new(0.0, 0.0, 1.0),
            KeypointSample::new(1.0, 1.0, 2.0),
        ];
        let err = PointTrack::new(samples).unwrap_err();
        assert!(matches!(err, Error::MalformedSample { frame: 1, .. }));
    }

    #[test]
    fn test_track_accessors() {
        let track =
            PointTrack::from_positions(&[(1.0, 2.0), (3.0, 4.0)], 0.8).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track.position(1), (3.0, 4.0));
        assert_eq!(track.confidence(0), 0.8);
    }

    #[test]
    fn test_mean_confidence() {
        let track = PointTrack::new(vec![
            KeypointSample::new(0.0, 0.0, 0.4),
            KeypointSample::new(0.0, 0.0, 0.8),
        ])
        .unwrap();
        assert!((track.mean_confidence() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_mean_confidence_empty_track() {
        let track = PointTrack::new(vec![]).unwrap();
        assert_eq!(track.mean_confidence(), 0.0);
    }

    #[test]
    fn test_side_track_names() {
        assert_eq!(Side::Right.hand(), "R_Hand");
        assert_eq!(Side::Right.elbow(), "RElb");
        assert_eq!(Side::Right.finger(), "R_finger");
        assert_eq!(Side::Left.hand(), "L_Hand");
        assert_eq!(Side::Left.label(), "left");
    }

    #[test]
    fn test_sample_serde_roundtrip() {
        let sample = KeypointSample::new(12.5, -3.0, 0.75);
        let json = serde_json::to_string(&sample).unwrap();
        let back: KeypointSample = serde_json::from_str(&json).unwrap();
        assert_eq!(sample, back);
    }

    #[test]
    fn test_track_serializes_as_array() {
        let track = PointTrack::from_positions(&[(1.0, 2.0)], 1.0).unwrap();
        let json = serde_json::to_string(&track).unwrap();
        assert!(json.starts_with('['));
    }
}
