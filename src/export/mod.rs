//! Annotation export
//!
//! Frame-to-timecode conversion and the annotation-row output contract.

pub mod annotations;
pub mod timecode;

pub use annotations::{annotation_rows, to_csv, AnnotationRow, MOVEMENT_LABEL, MOVEMENT_TIER};
pub use timecode::Timecode;
