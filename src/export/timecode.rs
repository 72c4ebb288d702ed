//! Frame-to-timecode conversion
//!
//! Annotation tools expect time-coded rows; frames convert through total
//! milliseconds (`round(frame * 1000 / fps)`) decomposed into
//! hours/minutes/seconds/milliseconds.

use std::fmt;

use serde::{Deserialize, Serialize};

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// A decomposed timestamp, rendered `h:m:s.mmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl Timecode {
    /// Timecode of a frame index at the given frame rate.
    pub fn from_frame(frame: usize, fps: f64) -> Self {
        let mut ms = (frame as f64 * 1000.0 / fps).round() as u64;

        let hours = ms / MS_PER_HOUR;
        ms -= hours * MS_PER_HOUR;
        let minutes = ms / MS_PER_MINUTE;
        ms -= minutes * MS_PER_MINUTE;
        let seconds = ms / MS_PER_SECOND;
        ms -= seconds * MS_PER_SECOND;

        Self {
            hours,
            minutes,
            seconds,
            millis: ms,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}
