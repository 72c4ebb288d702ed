//! Multi-channel merge
//!
//! Combines per-point gesture signals into one channel-level signal with a
//! per-frame logical OR. All inputs must cover the same frame range; a
//! length disagreement indicates an upstream alignment bug and is surfaced,
//! not papered over.

use super::signal::BinarySignal;
use crate::{Error, Result};

/// OR two frame-aligned signals.
pub fn merge(a: &BinarySignal, b: &BinarySignal) -> Result<BinarySignal> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(BinarySignal::new(
        a.frames()
            .iter()
            .zip(b.frames())
            .map(|(&x, &y)| x || y)
            .collect(),
    ))
}

/// OR any number of frame-aligned signals. An empty input yields an empty
/// signal.
pub fn merge_all(signals: &[BinarySignal]) -> Result<BinarySignal> {
    let Some((first, rest)) = signals.split_first() else {
        return Ok(BinarySignal::new(Vec::new()));
    };
    let mut merged = first.clone();
    for signal in rest {
        merged = merge(&merged, signal)?;
    }
    Ok(merged)
}
