//! Binary activity signals and segments
//!
//! A `BinarySignal` marks, per frame, whether a channel is active (moving).
//! Maximal runs of active frames become `Segment`s with inclusive bounds.

use serde::{Deserialize, Serialize};

/// Frame-aligned binary activity signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySignal {
    frames: Vec<bool>,
}

impl BinarySignal {
    pub fn new(frames: Vec<bool>) -> Self {
        Self { frames }
    }

    /// All-inactive signal of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            frames: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_active(&self, frame: usize) -> bool {
        self.frames[frame]
    }

    pub fn frames(&self) -> &[bool] {
        &self.frames
    }

    pub fn active_count(&self) -> usize {
        self.frames.iter().filter(|&&f| f).count()
    }

    /// Extract the maximal active runs as segments, in frame order.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut start = None;
        for (frame, &active) in self.frames.iter().enumerate() {
            match (active, start) {
                (true, None) => start = Some(frame),
                (false, Some(s)) => {
                    segments.push(Segment::new(s, frame - 1));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            segments.push(Segment::new(s, self.frames.len() - 1));
        }
        segments
    }
}

impl From<Vec<bool>> for BinarySignal {
    fn from(frames: Vec<bool>) -> Self {
        Self::new(frames)
    }
}

/// One maximal run of active frames, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start_frame: usize,
    pub end_frame: usize,
}

impl Segment {
    pub fn new(start_frame: usize, end_frame: usize) -> Self {
        debug_assert!(start_frame <= end_frame);
        Self {
            start_frame,
            end_frame,
        }
    }

    /// Number of frames covered, inclusive of both bounds.
    pub fn frame_len(&self) -> usize {
        self.end_frame - self.start_frame + 1
    }

    /// Duration in seconds at the given frame rate.
    pub fn duration_secs(&self, fps: f64) -> f64 {
        self.frame_len() as f64 / fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(bits: &[u8]) -> BinarySignal {
        BinarySignal::new(bits.iter().map(|&b| b != 0).collect())
    }

    #[test]
    fn test_empty_signal_has_no_segments() {
        assert!(BinarySignal::zeros(0).segments().is_empty());
        assert!(BinarySignal::zeros(10).segments().is_empty());
    }

    #[test]
    fn test_single_run() {
        let s = signal(&[0, 0, 1, 1, 1, 0, 0]);
        assert_eq!(s.segments(), vec![Segment::new(2, 4)]);
    }

    #[test]
    fn test_run_touching_both_ends() {
        let s = signal(&[1, 1, 0, 1]);
        assert_eq!(s.segments(), vec![Segment::new(0, 1), Segment::new(3, 3)]);
    }

    #[test]
    fn test_all_active() {
        let s = signal(&[1, 1, 1]);
        assert_eq!(s.segments(), vec![Segment::new(0, 2)]);
        assert_eq!(s.active_count(), 3);
    }

    #[test]
    fn test_segment_len_and_duration() {
        let seg = Segment::new(10, 14);
        assert_eq!(seg.frame_len(), 5);
        assert!((seg.duration_secs(25.0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_single_frame_segment() {
        let seg = Segment::new(7, 7);
        assert_eq!(seg.frame_len(), 1);
    }
}
