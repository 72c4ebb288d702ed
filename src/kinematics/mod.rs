//! Trajectory kinematics
//!
//! Transforms position tracks into the derived signals the segmentation
//! stages consume: displacement/velocity profiles, local stability flags,
//! submovement velocity peaks, and summary features.

pub mod features;
pub mod peaks;
pub mod stability;
pub mod velocity;

pub use peaks::SubmovementDetector;
pub use stability::{is_locally_static, StabilityWindow, REST_WINDOW, STILL_WINDOW};
pub use velocity::{displacement_series, smooth_triangular, velocity_series};
