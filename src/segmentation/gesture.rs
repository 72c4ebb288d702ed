//! Gesture state machine
//!
//! Classifies each frame of one tracked point as gesturing or at rest. The
//! machine moves between three phases: resting (tracking a rest reference),
//! candidate movement (a departure from the reference that still needs
//! confirmation), and confirmed movement (emitting active frames until the
//! point provably settles again).
//!
//! A departure only becomes a gesture once a return to rest is found within
//! the lookahead horizon; without one the machine conservatively declines to
//! mark the span and advances a single frame. That bias toward
//! under-segmentation is intentional and must not be "fixed" by widening the
//! horizon.

use tracing::trace;

use super::signal::BinarySignal;
use crate::kinematics::stability::{is_locally_static, REST_WINDOW, STILL_WINDOW};
use crate::tracking::PointTrack;

/// Per-axis departure from the rest reference that starts a movement
/// candidate, in native units.
pub const MOVE_TOLERANCE: f64 = 5.0;
/// Number of frames inspected when confirming a sustained departure.
pub const SUSTAIN_WINDOW: usize = 5;
/// How many of those frames must also deviate for the movement to count.
pub const SUSTAIN_MIN_FRAMES: usize = 3;
/// Forward-scan horizon for the return to rest, in frames.
pub const RETURN_HORIZON: usize = 300;

/// Per-point gesture classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStateMachine {
    /// Frames whose tracking confidence falls below this are treated as
    /// untracked and never gesture.
    pub confidence_threshold: f64,
}

impl GestureStateMachine {
    pub fn new(confidence_threshold: f64) -> Self {
        Self {
            confidence_threshold,
        }
    }

    /// Classify every frame of the track into a binary gesture signal.
    ///
    /// Deterministic, pure, and single-pass: decided frame ranges are never
    /// revisited, only the rest reference is re-anchored. Frame 0 always
    /// emits inactive (no prior reference exists); tracks too short to
    /// confirm a sustained movement come out all inactive.
    pub fn classify(&self, track: &PointTrack) -> BinarySignal {
        let n = track.len();
        let mut frames = Vec::with_capacity(n);
        if n == 0 {
            return BinarySignal::new(frames);
        }
        frames.push(false);

        // The reference starts at the origin and is re-anchored by every
        // successful rest check.
        let (mut rest_x, mut rest_y) = (0.0_f64, 0.0_f64);

        let mut i = 1;
        while i < n {
            let (x, y) = track.position(i);

            if track.confidence(i) < self.confidence_threshold {
                // Untracked this frame.
                frames.push(false);
            } else if is_locally_static(track, i, REST_WINDOW) {
                rest_x = x;
                rest_y = y;
                frames.push(false);
            } else if (x - rest_x).abs() > MOVE_TOLERANCE || (y - rest_y).abs() > MOVE_TOLERANCE {
                if !self.sustained_departure(track, i, rest_x, rest_y) {
                    // A few stray frames, not a movement onset.
                    frames.push(false);
                } else if let Some(ret) = self.find_return(track, i) {
                    trace!(onset = i, settled = ret, "gesture span confirmed");
                    for _ in i..=ret {
                        frames.push(true);
                    }
                    let (rx, ry) = track.position(ret);
                    rest_x = rx;
                    rest_y = ry;
                    i = ret;
                } else {
                    // No confirmed return within the horizon: decline.
                    frames.push(false);
                }
            } else {
                frames.push(false);
            }

            i += 1;
        }

        BinarySignal::new(frames)
    }

    /// Does the departure at `onset` persist? At least [`SUSTAIN_MIN_FRAMES`]
    /// of the next [`SUSTAIN_WINDOW`] frames must also deviate from the rest
    /// reference.
    fn sustained_departure(
        &self,
        track: &PointTrack,
        onset: usize,
        rest_x: f64,
        rest_y: f64,
    ) -> bool {
        let end = (onset + 1 + SUSTAIN_WINDOW).min(track.len());
        let deviating = (onset + 1..end)
            .filter(|&j| {
                let (x, y) = track.position(j);
                (x - rest_x).abs() > MOVE_TOLERANCE || (y - rest_y).abs() > MOVE_TOLERANCE
            })
            .count();
        deviating >= SUSTAIN_MIN_FRAMES
    }

    /// Scan forward from `onset` for the first frame where the point has
    /// settled: either the tighter is-still check or a fresh rest check
    /// passes, whichever occurs first. Bounded by [`RETURN_HORIZON`].
    fn find_return(&self, track: &PointTrack, onset: usize) -> Option<usize> {
        let end = (onset + RETURN_HORIZON).min(track.len());
        (onset + 1..end).find(|&t| {
            is_locally_static(track, t, STILL_WINDOW) || is_locally_static(track, t, REST_WINDOW)
        })
    }
}
