//! # fitscan
//!
//! Body measurements and garment size recommendation from a single
//! pose-annotated photograph.
//!
//! This crate provides:
//! - **Calibration**: a pixel-to-centimeter scale factor from a declared
//!   standing height or an A4 reference sheet in frame
//! - **Measurement**: shoulder width, chest circumference, arm length, and
//!   torso length in inches, derived from 2D pose landmarks
//! - **Recommendation**: a size label from chest-circumference breakpoints,
//!   a coarse body-type label, fit warnings, and a per-proportion fit
//!   comparison against the garment's reference chart
//!
//! Pose detection is not part of this crate. It consumes the 33-point 2D
//! landmark sequence produced by an external pose detector and assumes a
//! roughly frontal, fully visible body.
//!
//! ## Pipeline
//!
//! 1. Pick the required anatomical roles out of the landmark sequence
//! 2. Resolve the calibration scale (cm per pixel unit)
//! 3. Extract measurements and body proportions
//! 4. Classify, recommend a size, and collect fit advice
//!
//! Each stage is a pure function over immutable inputs; the only shared
//! state is the static size chart.
//!
//! ## Quick Start
//!
//! ```rust
//! use fitscan::{analyze, types::index, Calibration, Garment, Point};
//!
//! // Landmarks from a pose detector (normalized image coordinates).
//! let mut points = vec![Point::new(0.5, 0.5); 33];
//! points[index::NOSE] = Point::new(0.50, 0.10);
//! points[index::LEFT_SHOULDER] = Point::new(0.40, 0.30);
//! points[index::RIGHT_SHOULDER] = Point::new(0.60, 0.30);
//! points[index::LEFT_ELBOW] = Point::new(0.40, 0.45);
//! points[index::RIGHT_ELBOW] = Point::new(0.60, 0.45);
//! points[index::LEFT_WRIST] = Point::new(0.40, 0.60);
//! points[index::RIGHT_WRIST] = Point::new(0.60, 0.60);
//! points[index::LEFT_HIP] = Point::new(0.40, 0.55);
//! points[index::RIGHT_HIP] = Point::new(0.58, 0.55);
//! points[index::LEFT_HEEL] = Point::new(0.45, 0.90);
//! points[index::RIGHT_HEEL] = Point::new(0.55, 0.90);
//!
//! let calibration = Calibration::Height { value_cm: 175.0 };
//! let analysis = analyze(&points, &calibration, Garment::TShirt).unwrap();
//!
//! println!(
//!     "size {} for a {} build, chest {:.1} in",
//!     analysis.recommended_size, analysis.body_type, analysis.measurements.chest,
//! );
//! ```

pub mod analyze;
pub mod calibrate;
pub mod chart;
pub mod classify;
pub mod compare;
mod error;
pub mod measure;
pub mod recommend;
pub mod smooth;
pub mod types;
pub mod warnings;

pub use analyze::{analyze, analyze_landmarks, Analysis};
pub use calibrate::{body_height_px, resolve_scale, Calibration};
pub use chart::{dimensions, dimensions_for_label, GarmentRatios, SizeDimensions, SIZE_CHART};
pub use classify::{classify_arm_length, classify_body_type, ArmType, BodyType};
pub use compare::{compare_fit, FitComparison, FitStatus, RatioFit};
pub use error::{Error, Result};
pub use measure::{extract_measurements, BodyRatios, Measurements};
pub use recommend::{recommend_size, Garment, Size};
pub use smooth::RatioAverager;
pub use types::{BodyLandmarks, Point};
pub use warnings::fit_warnings;
