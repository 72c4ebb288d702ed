//! Recording container
//!
//! Holds one fully materialized recording: frame rate plus the frame-aligned
//! tracks keyed by the pose engine's point names. All analysis runs over a
//! validated `Recording`; the core never touches files itself, the thin
//! load/save helpers here exist for the CLI shell.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{PointTrack, Side, SideTracks};
use crate::{Error, Result};

/// One recording's worth of aligned keypoint tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Sampling rate in frames per second. Always positive.
    pub fps: f64,
    /// Tracks keyed by point name (e.g. "R_Hand", "LElb").
    pub tracks: BTreeMap<String, PointTrack>,
}

impl Recording {
    /// Create an empty recording at the given frame rate.
    pub fn new(fps: f64) -> Self {
        Self {
            fps,
            tracks: BTreeMap::new(),
        }
    }

    /// Add a track, enforcing frame alignment with the tracks already present.
    pub fn insert_track(&mut self, name: impl Into<String>, track: PointTrack) -> Result<()> {
        if let Some(existing) = self.tracks.values().next() {
            if existing.len() != track.len() {
                return Err(Error::LengthMismatch {
                    expected: existing.len(),
                    actual: track.len(),
                });
            }
        }
        self.tracks.insert(name.into(), track);
        Ok(())
    }

    /// Number of frames shared by every track; 0 for an empty recording.
    pub fn frame_count(&self) -> usize {
        self.tracks.values().next().map_or(0, PointTrack::len)
    }

    pub fn track(&self, name: &str) -> Option<&PointTrack> {
        self.tracks.get(name)
    }

    /// The hand/elbow/fingertip triple of one side, if all three are tracked.
    pub fn side_tracks(&self, side: Side) -> Option<SideTracks<'_>> {
        Some(SideTracks {
            hand: self.track(side.hand())?,
            elbow: self.track(side.elbow())?,
            finger: self.track(side.finger())?,
        })
    }

    /// Check the full recording invariant: positive frame rate, aligned track
    /// lengths, well-formed samples. Deserialized recordings must pass through
    /// here before analysis.
    pub fn validate(&self) -> Result<()> {
        if !(self.fps > 0.0) || !self.fps.is_finite() {
            return Err(Error::Config(format!(
                "frame rate must be a positive number, got {}",
                self.fps
            )));
        }
        let expected = self.frame_count();
        for (name, track) in &self.tracks {
            if track.len() != expected {
                debug!(track = %name, len = track.len(), expected, "track length mismatch");
                return Err(Error::LengthMismatch {
                    expected,
                    actual: track.len(),
                });
            }
            track.validate()?;
        }
        Ok(())
    }

    /// Load and validate a recording from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let recording: Self = serde_json::from_str(&content)?;
        recording.validate()?;
        Ok(recording)
    }

    /// Save the recording as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
