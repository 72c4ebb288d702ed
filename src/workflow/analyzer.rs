//! Analysis orchestration
//!
//! Runs the full pipeline over one validated recording: per-point gesture
//! classification, channel merge, hysteresis post-filtering, submovement
//! detection, hold analysis, and feature extraction.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::report::{AnalysisReport, FeatureSummary, SubmovementSummary};
use crate::export::{annotation_rows, MOVEMENT_LABEL, MOVEMENT_TIER};
use crate::holds::{HoldDetector, HoldReport, SideVelocities};
use crate::kinematics::features::{peak_velocity, sweep_area, SideFeatures};
use crate::kinematics::{velocity_series, SubmovementDetector};
use crate::segmentation::{merge_all, BinarySignal, GestureStateMachine, HysteresisFilter};
use crate::tracking::{Recording, Side};
use crate::Result;

/// Everything the analyzer needs to know about one run.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Tracking-confidence threshold for the gesture state machine.
    pub confidence_threshold: f64,
    /// Hysteresis gap cutoff in frames.
    pub gap_cutoff: usize,
    /// Hysteresis minimum-run cutoff in frames.
    pub min_cutoff: usize,
    /// Names of the tracks classified for movement. Tracks absent from the
    /// recording are skipped.
    pub tracked_points: Vec<String>,
    /// Annotation tier name.
    pub tier: String,
    /// Annotation label for movement segments.
    pub label: String,
    /// Submovement peak detector.
    pub submovements: SubmovementDetector,
    /// Hold detector.
    pub holds: HoldDetector,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            gap_cutoff: 3,
            min_cutoff: 3,
            tracked_points: Side::BOTH
                .iter()
                .flat_map(|s| [s.hand(), s.elbow(), s.finger()])
                .map(String::from)
                .collect(),
            tier: MOVEMENT_TIER.to_string(),
            label: MOVEMENT_LABEL.to_string(),
            submovements: SubmovementDetector::default(),
            holds: HoldDetector::default(),
        }
    }
}

/// Pipeline driver for one recording at a time.
#[derive(Debug, Clone, Default)]
pub struct GestureAnalyzer {
    pub options: AnalyzerOptions,
}

impl GestureAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Analyze one recording into a full report.
    ///
    /// A zero-frame recording yields an empty report; that is a defined
    /// degenerate case, not an error.
    pub fn analyze(&self, recording: &Recording) -> Result<AnalysisReport> {
        recording.validate()?;

        let frame_count = recording.frame_count();
        if frame_count == 0 {
            debug!("empty recording, emitting empty report");
            return Ok(AnalysisReport::empty(recording.fps));
        }

        let movement = self.movement_signal(recording);
        let filtered =
            HysteresisFilter::new(self.options.gap_cutoff, self.options.min_cutoff).apply(&movement);
        let segments = filtered.segments();
        info!(
            segments = segments.len(),
            active_frames = filtered.active_count(),
            "movement segmentation complete"
        );

        let submovements = self.submovements(recording);
        let holds = self.holds(recording, &submovements)?;
        let features = self.features(recording);

        let annotations = annotation_rows(
            &segments,
            recording.fps,
            &self.options.tier,
            &self.options.label,
        );

        Ok(AnalysisReport {
            id: Uuid::new_v4(),
            fps: recording.fps,
            frame_count,
            segments,
            annotations,
            submovements,
            holds,
            features,
        })
    }

    /// Classify every configured track and merge the results. Each track is
    /// classified independently; OR-merging makes the combination order
    /// irrelevant.
    fn movement_signal(&self, recording: &Recording) -> BinarySignal {
        let machine = GestureStateMachine::new(self.options.confidence_threshold);
        let signals: Vec<BinarySignal> = self
            .options
            .tracked_points
            .iter()
            .filter_map(|name| {
                let track = recording.track(name);
                if track.is_none() {
                    debug!(track = %name, "configured track absent, skipping");
                }
                track
            })
            .map(|track| machine.classify(track))
            .collect();

        if signals.is_empty() {
            warn!("no configured track present in recording");
            return BinarySignal::zeros(recording.frame_count());
        }
        // Lengths are aligned by Recording::validate, so the merge cannot
        // fail here.
        merge_all(&signals).unwrap_or_else(|_| BinarySignal::zeros(recording.frame_count()))
    }

    fn submovements(&self, recording: &Recording) -> SubmovementSummary {
        let mut summary = SubmovementSummary::default();
        for side in Side::BOTH {
            if let Some(track) = recording.track(side.hand()) {
                let velocity = velocity_series(track, recording.fps);
                let peaks = self.options.submovements.detect(&velocity);
                debug!(side = side.label(), peaks = peaks.len(), "submovements detected");
                match side {
                    Side::Left => summary.left_peaks = peaks,
                    Side::Right => summary.right_peaks = peaks,
                }
            }
        }
        summary
    }

    /// Bimanual hold analysis; requires the full hand/elbow/fingertip triple
    /// on both sides, otherwise reports no holds.
    fn holds(
        &self,
        recording: &Recording,
        submovements: &SubmovementSummary,
    ) -> Result<HoldReport> {
        let (Some(left), Some(right)) = (
            recording.side_tracks(Side::Left),
            recording.side_tracks(Side::Right),
        ) else {
            debug!("incomplete side tracks, skipping hold analysis");
            return Ok(HoldReport::default());
        };
        let left_vel = SideVelocities::from_tracks(&left, recording.fps);
        let right_vel = SideVelocities::from_tracks(&right, recording.fps);
        self.options
            .holds
            .analyze(&left_vel, &right_vel, &submovements.combined(), recording.fps)
    }

    fn features(&self, recording: &Recording) -> FeatureSummary {
        let mut summary = FeatureSummary::default();
        for side in Side::BOTH {
            let mut features = SideFeatures::default();
            if let Some(track) = recording.track(side.hand()) {
                features.peak_velocity = peak_velocity(&velocity_series(track, recording.fps));
            }
            if let Some(track) = recording.track(side.finger()) {
                features.sweep_area = sweep_area(track);
            }
            match side {
                Side::Left => summary.left = features,
                Side::Right => summary.right = features,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::PointTrack;

    fn static_track(n: usize, pos: (f64, f64)) -> PointTrack {
        PointTrack::from_positions(&vec![pos; n], 1.0).unwrap()
    }

    /// Rest at `a`, linear move to `b`, rest at `b`.
    fn moving_track(
        rest: usize,
        moving: usize,
        hold: usize,
        a: (f64, f64),
        b: (f64, f64),
    ) -> PointTrack {
        let mut positions = vec![a; rest];
        for k in 1..=moving {
            let t = k as f64 / moving as f64;
            positions.push((a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t));
        }
        positions.extend(std::iter::repeat(b).take(hold));
        PointTrack::from_positions(&positions, 1.0).unwrap()
    }

    #[test]
    fn test_empty_recording_gives_empty_report() {
        let analyzer = GestureAnalyzer::new();
        let recording = Recording::new(25.0);
        let report = analyzer.analyze(&recording).unwrap();
        assert_eq!(report.frame_count, 0);
        assert!(report.segments.is_empty());
        assert!(report.annotations.is_empty());
    }

    #[test]
    fn test_static_recording_has_no_segments() {
        let analyzer = GestureAnalyzer::new();
        let mut recording = Recording::new(25.0);
        recording
            .insert_track("R_Hand", static_track(100, (50.0, 50.0)))
            .unwrap();
        let report = analyzer.analyze(&recording).unwrap();
        assert!(report.segments.is_empty());
    }

    #[test]
    fn test_single_movement_is_segmented_and_annotated() {
        let analyzer = GestureAnalyzer::new();
        let mut recording = Recording::new(25.0);
        recording
            .insert_track(
                "R_Hand",
                moving_track(20, 20, 60, (0.0, 0.0), (100.0, 100.0)),
            )
            .unwrap();

        let report = analyzer.analyze(&recording).unwrap();
        assert_eq!(report.segments.len(), 1);
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].label, "movement");
        assert!(report.movement_secs() > 0.0);
    }

    #[test]
    fn test_absent_tracks_are_skipped() {
        let analyzer = GestureAnalyzer::new();
        let mut recording = Recording::new(25.0);
        // Only an unconfigured track name is present.
        recording
            .insert_track("Nose", static_track(50, (0.0, 0.0)))
            .unwrap();
        let report = analyzer.analyze(&recording).unwrap();
        assert!(report.segments.is_empty());
        assert_eq!(report.frame_count, 50);
    }

    #[test]
    fn test_holds_skipped_without_full_side_tracks() {
        let analyzer = GestureAnalyzer::new();
        let mut recording = Recording::new(25.0);
        recording
            .insert_track("R_Hand", static_track(50, (0.0, 0.0)))
            .unwrap();
        let report = analyzer.analyze(&recording).unwrap();
        assert_eq!(report.holds.stats.count, 0);
    }

    #[test]
    fn test_features_reported_per_side() {
        let analyzer = GestureAnalyzer::new();
        let mut recording = Recording::new(25.0);
        recording
            .insert_track(
                "R_Hand",
                moving_track(20, 20, 60, (0.0, 0.0), (100.0, 100.0)),
            )
            .unwrap();
        recording
            .insert_track(
                "R_finger",
                moving_track(20, 20, 60, (0.0, 0.0), (100.0, 50.0)),
            )
            .unwrap();

        let report = analyzer.analyze(&recording).unwrap();
        assert!(report.features.right.peak_velocity > 0.0);
        assert_eq!(report.features.right.sweep_area, 100.0 * 50.0);
        assert_eq!(report.features.left.peak_velocity, 0.0);
    }

    #[test]
    fn test_merge_order_does_not_matter() {
        let mut recording = Recording::new(25.0);
        recording
            .insert_track(
                "R_Hand",
                moving_track(20, 20, 60, (0.0, 0.0), (100.0, 100.0)),
            )
            .unwrap();
        recording
            .insert_track(
                "L_Hand",
                moving_track(50, 20, 30, (10.0, 10.0), (90.0, 90.0)),
            )
            .unwrap();

        let forward = GestureAnalyzer::with_options(AnalyzerOptions {
            tracked_points: vec!["R_Hand".into(), "L_Hand".into()],
            ..AnalyzerOptions::default()
        });
        let reverse = GestureAnalyzer::with_options(AnalyzerOptions {
            tracked_points: vec!["L_Hand".into(), "R_Hand".into()],
            ..AnalyzerOptions::default()
        });

        assert_eq!(
            forward.analyze(&recording).unwrap().segments,
            reverse.analyze(&recording).unwrap().segments
        );
    }
}
