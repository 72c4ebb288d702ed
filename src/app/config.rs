//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::holds::HoldDetector;
use crate::kinematics::SubmovementDetector;
use crate::tracking::Side;
use crate::workflow::AnalyzerOptions;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Movement segmentation settings
    pub segmentation: SegmentationConfig,
    /// Submovement peak detection settings
    #[serde(default)]
    pub submovements: SubmovementConfig,
    /// Hold detection settings
    #[serde(default)]
    pub holds: HoldConfig,
    /// Annotation export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Movement segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Tracking-confidence threshold below which a frame is untracked
    pub confidence_threshold: f64,
    /// Active runs of at most this many frames are dropped
    pub min_cutoff: usize,
    /// Inactive gaps of at most this many frames are bridged
    pub gap_cutoff: usize,
    /// Track names classified for movement
    pub tracked_points: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            min_cutoff: 3,
            gap_cutoff: 3,
            tracked_points: Side::BOTH
                .iter()
                .flat_map(|s| [s.hand(), s.elbow(), s.finger()])
                .map(String::from)
                .collect(),
        }
    }
}

/// Submovement peak detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmovementConfig {
    /// Triangular smoothing degree
    pub smoothing_degree: usize,
    /// Minimum peak height (units/s)
    pub min_height: f64,
    /// Minimum peak prominence (units/s)
    pub min_prominence: f64,
    /// Minimum spacing between peaks (frames)
    pub min_spacing: usize,
}

impl Default for SubmovementConfig {
    fn default() -> Self {
        let d = SubmovementDetector::default();
        Self {
            smoothing_degree: d.smoothing_degree,
            min_height: d.min_height,
            min_prominence: d.min_prominence,
            min_spacing: d.min_spacing,
        }
    }
}

/// Hold detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldConfig {
    /// Velocity below which a joint counts as paused (units/s)
    pub pause_velocity: f64,
    /// Minimum cluster length for a hold (frames)
    pub min_cluster_frames: usize,
}

impl Default for HoldConfig {
    fn default() -> Self {
        let d = HoldDetector::default();
        Self {
            pause_velocity: d.pause_velocity,
            min_cluster_frames: d.min_cluster_frames,
        }
    }
}

/// Annotation export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Annotation tier name
    pub tier: String,
    /// Label applied to movement segments
    pub label: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tier: crate::export::MOVEMENT_TIER.to_string(),
            label: crate::export::MOVEMENT_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !(0.0..=1.0).contains(&self.segmentation.confidence_threshold) {
            return Err(crate::Error::Config(format!(
                "confidence_threshold must be in [0, 1], got {}",
                self.segmentation.confidence_threshold
            )));
        }
        if self.segmentation.tracked_points.is_empty() {
            return Err(crate::Error::Config(
                "tracked_points must not be empty".to_string(),
            ));
        }
        if self.submovements.smoothing_degree == 0 {
            return Err(crate::Error::Config(
                "smoothing_degree must be > 0".to_string(),
            ));
        }
        if self.submovements.min_height < 0.0 || self.submovements.min_prominence < 0.0 {
            return Err(crate::Error::Config(
                "peak height and prominence must be >= 0".to_string(),
            ));
        }
        if self.submovements.min_spacing == 0 {
            return Err(crate::Error::Config("min_spacing must be > 0".to_string()));
        }
        if self.holds.pause_velocity <= 0.0 {
            return Err(crate::Error::Config(format!(
                "pause_velocity must be > 0, got {}",
                self.holds.pause_velocity
            )));
        }
        if self.holds.min_cluster_frames == 0 {
            return Err(crate::Error::Config(
                "min_cluster_frames must be > 0".to_string(),
            ));
        }
        if self.export.tier.trim().is_empty() || self.export.label.trim().is_empty() {
            return Err(crate::Error::Config(
                "tier and label must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Map the file-level config onto analyzer options.
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            confidence_threshold: self.segmentation.confidence_threshold,
            gap_cutoff: self.segmentation.gap_cutoff,
            min_cutoff: self.segmentation.min_cutoff,
            tracked_points: self.segmentation.tracked_points.clone(),
            tier: self.export.tier.clone(),
            label: self.export.label.clone(),
            submovements: SubmovementDetector {
                smoothing_degree: self.submovements.smoothing_degree,
                min_height: self.submovements.min_height,
                min_prominence: self.submovements.min_prominence,
                min_spacing: self.submovements.min_spacing,
            },
            holds: HoldDetector {
                pause_velocity: self.holds.pause_velocity,
                min_cluster_frames: self.holds.min_cluster_frames,
            },
        }
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".gesture_segmenter").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
