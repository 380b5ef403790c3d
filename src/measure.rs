//! Body measurement extraction.
//!
//! Pixel distances between landmark roles are scaled to centimeters with
//! the calibration factor, converted to inches for the size charts, and
//! rounded to one decimal. The raw pixel ratios are kept unrounded for
//! classification.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::BodyLandmarks;

pub const CM_TO_IN: f32 = 0.3937;

/// Converts the linear shoulder span into a chest circumference estimate,
/// treating the torso cross-section as an ellipse.
pub const CHEST_CIRCUMFERENCE_FACTOR: f32 = 2.1;

/// Compensates for the offset between the shoulder landmark and the
/// neckline, and between the hip landmark and the garment hem.
pub const TORSO_LENGTH_FACTOR: f32 = 1.4;

/// Dimensionless proportions of the pose, independent of calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyRatios {
    pub shoulder_to_torso: f32,
    pub hip_to_torso: f32,
    pub arm_to_torso: f32,
}

/// Absolute body measurements in inches, rounded to one decimal place.
///
/// `ratios` is `None` when the torso segment has zero length and no
/// proportion can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Shoulder width.
    pub shoulder: f32,
    /// Estimated chest circumference.
    pub chest: f32,
    /// Arm length, shoulder to wrist via the elbow.
    pub arm: f32,
    /// Torso length, a proxy for shirt length.
    pub length: f32,
    pub ratios: Option<BodyRatios>,
}

/// Derive measurements from landmark positions and a scale factor
/// (centimeters per pixel unit).
///
/// Fails with [`Error::InsufficientLandmarkData`] when the scale is zero or
/// non-finite; missing landmarks are rejected earlier, at
/// [`BodyLandmarks::from_slice`].
pub fn extract_measurements(landmarks: &BodyLandmarks, scale: f32) -> Result<Measurements> {
    if scale == 0.0 || !scale.is_finite() {
        return Err(Error::InsufficientLandmarkData);
    }

    let shoulder_px = landmarks.left_shoulder.distance(&landmarks.right_shoulder);
    let hip_px = landmarks.left_hip.distance(&landmarks.right_hip);
    let torso_px = landmarks.left_shoulder.distance(&landmarks.left_hip);

    // Sum of upper and lower arm segments, not the shoulder-to-wrist chord,
    // so a bent elbow still yields the true sleeve length.
    let left_arm_px = landmarks.left_shoulder.distance(&landmarks.left_elbow)
        + landmarks.left_elbow.distance(&landmarks.left_wrist);
    let right_arm_px = landmarks.right_shoulder.distance(&landmarks.right_elbow)
        + landmarks.right_elbow.distance(&landmarks.right_wrist);
    let avg_arm_px = (left_arm_px + right_arm_px) / 2.0;

    let ratios = if torso_px > 0.0 {
        Some(BodyRatios {
            shoulder_to_torso: shoulder_px / torso_px,
            hip_to_torso: hip_px / torso_px,
            arm_to_torso: avg_arm_px / torso_px,
        })
    } else {
        None
    };

    Ok(Measurements {
        shoulder: round_to(shoulder_px * scale * CM_TO_IN, 1),
        chest: round_to(shoulder_px * scale * CHEST_CIRCUMFERENCE_FACTOR * CM_TO_IN, 1),
        arm: round_to(avg_arm_px * scale * CM_TO_IN, 1),
        length: round_to(torso_px * scale * TORSO_LENGTH_FACTOR * CM_TO_IN, 1),
        ratios,
    })
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f32, places: u32) -> f32 {
    let factor = 10f32.powi(places as i32);
    (value * factor).round() / factor
}
