//! Annotation export
//!
//! Turns the final segment list into time-coded annotation rows importable
//! by annotation tools, and renders them in the indexed, headerless CSV
//! layout the downstream importer expects.

use serde::{Deserialize, Serialize};

use super::timecode::Timecode;
use crate::segmentation::Segment;

/// Default tier name for movement annotations.
pub const MOVEMENT_TIER: &str = "Movements";
/// Default label applied to every gesture segment.
pub const MOVEMENT_LABEL: &str = "movement";

/// One time-coded annotation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRow {
    pub tier: String,
    pub begin: String,
    pub end: String,
    pub label: String,
}

/// Convert segments into annotation rows. Begin/end cover the segment's
/// first and last active frame.
pub fn annotation_rows(segments: &[Segment], fps: f64, tier: &str, label: &str) -> Vec<AnnotationRow> {
    segments
        .iter()
        .map(|seg| AnnotationRow {
            tier: tier.to_string(),
            begin: Timecode::from_frame(seg.start_frame, fps).to_string(),
            end: Timecode::from_frame(seg.end_frame, fps).to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Render rows as indexed CSV without a header line.
pub fn to_csv(rows: &[AnnotationRow]) -> String {
    let mut out = String::new();
    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            idx, row.tier, row.begin, row.end, row.label
        ));
    }
    out
}
