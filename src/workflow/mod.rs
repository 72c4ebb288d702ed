//! High-level analysis workflow
//!
//! The analyzer that drives the full pipeline over one recording and the
//! report type it produces.

pub mod analyzer;
pub mod report;

pub use analyzer::{AnalyzerOptions, GestureAnalyzer};
pub use report::{AnalysisReport, FeatureSummary, SubmovementSummary};
