//! End-to-end analysis pipeline.
//!
//! One call per photo: resolve the calibration scale, extract measurements,
//! then classify, recommend a size, and collect fit advice. Every stage is
//! a pure function over the previous stage's output; concurrent requests
//! share only the static charts.

use serde::Serialize;

use crate::calibrate::{resolve_scale, Calibration};
use crate::chart::{dimensions, SizeDimensions};
use crate::classify::{classify_arm_length, classify_body_type, ArmType, BodyType};
use crate::compare::{compare_fit, FitComparison};
use crate::error::Result;
use crate::measure::{extract_measurements, Measurements};
use crate::recommend::{recommend_size, Garment, Size};
use crate::types::{BodyLandmarks, Point};
use crate::warnings::fit_warnings;

/// The result bundle for one analyzed photo. Ownership passes to the
/// caller; nothing is retained between calls.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub recommended_size: Size,
    pub body_type: BodyType,
    pub arm_type: ArmType,
    pub measurements: Measurements,
    pub warnings: Vec<String>,
    /// Reference garment dimensions for the recommended size, echoed for
    /// side-by-side display.
    pub reference: SizeDimensions,
    /// Proportion-level fit verdicts, when the garment's cut is charted for
    /// the recommended size.
    pub comparison: Option<FitComparison>,
}

/// Analyze one annotated photo.
///
/// `points` is the flat 33-point pose landmark sequence from the detector.
pub fn analyze(points: &[Point], calibration: &Calibration, garment: Garment) -> Result<Analysis> {
    let landmarks = BodyLandmarks::from_slice(points)?;
    analyze_landmarks(&landmarks, calibration, garment)
}

/// Analyze already-validated landmarks.
pub fn analyze_landmarks(
    landmarks: &BodyLandmarks,
    calibration: &Calibration,
    garment: Garment,
) -> Result<Analysis> {
    let scale = resolve_scale(calibration, landmarks)?;
    let measurements = extract_measurements(landmarks, scale)?;

    let body_type = classify_body_type(Some(&measurements));
    let arm_type = classify_arm_length(measurements.ratios.as_ref());
    let recommended_size = recommend_size(Some(&measurements), garment);
    let warnings = fit_warnings(&measurements, garment);
    let comparison = measurements
        .ratios
        .as_ref()
        .and_then(|r| compare_fit(r, garment, recommended_size));

    Ok(Analysis {
        recommended_size,
        body_type,
        arm_type,
        measurements,
        warnings,
        reference: *dimensions(recommended_size),
        comparison,
    })
}
