//! Pixel-to-centimeter calibration.
//!
//! A photo carries no physical scale on its own. The user supplies one
//! real-world reference, either their standing height or an A4 sheet held
//! in frame, and everything downstream multiplies pixel distances by the
//! resolved scale factor.

use crate::error::{Error, Result};
use crate::types::BodyLandmarks;

/// An A4 sheet is 29.7 cm tall.
pub const A4_HEIGHT_CM: f32 = 29.7;

/// The nose-to-heel span misses the crown of the head. The head is roughly
/// 1/7 to 1/8 of standing height and the nose sits near mid-head, so the
/// span is padded by 12% to approximate full height.
pub const HEAD_PAD_FACTOR: f32 = 1.12;

/// The user-supplied real-world reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calibration {
    /// Declared standing height in centimeters.
    Height { value_cm: f32 },
    /// Vertical pixel span of an A4 reference sheet in the photo.
    PaperReference { pixel_height: f32 },
}

impl Calibration {
    /// Map the external string-tagged form onto the calibration type.
    ///
    /// `"height"` carries centimeters, `"paper"` carries a pixel span.
    /// Anything else fails with [`Error::UnsupportedCalibrationMode`].
    pub fn from_mode_value(mode: &str, value: f32) -> Result<Self> {
        match mode {
            "height" => Ok(Self::Height { value_cm: value }),
            "paper" => Ok(Self::PaperReference { pixel_height: value }),
            other => Err(Error::UnsupportedCalibrationMode(other.to_string())),
        }
    }
}

/// Estimated full body height in pixel units: nose to the midpoint between
/// the heels, padded for the unseen top of the head.
///
/// Always non-negative. Returns 0 only when the nose coincides with the
/// heel midpoint, which callers must treat as a calibration failure.
pub fn body_height_px(landmarks: &BodyLandmarks) -> f32 {
    let mid_heel = landmarks.left_heel.midpoint(&landmarks.right_heel);
    landmarks.nose.distance(&mid_heel) * HEAD_PAD_FACTOR
}

/// Resolve the scale factor (centimeters per pixel unit) for one photo.
pub fn resolve_scale(calibration: &Calibration, landmarks: &BodyLandmarks) -> Result<f32> {
    match *calibration {
        Calibration::Height { value_cm } => {
            let height_px = body_height_px(landmarks);
            if height_px == 0.0 {
                return Err(Error::DegeneratePose);
            }
            Ok(value_cm / height_px)
        }
        Calibration::PaperReference { pixel_height } => {
            if pixel_height <= 0.0 {
                return Err(Error::InvalidCalibrationInput);
            }
            Ok(A4_HEIGHT_CM / pixel_height)
        }
    }
}
