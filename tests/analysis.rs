//! Integration tests for the full analysis pipeline.

use fitscan::{
    analyze, body_height_px, extract_measurements, resolve_scale, types::index, ArmType,
    BodyLandmarks, BodyType, Calibration, Error, FitStatus, Garment, Point, Size,
};

/// A frontal standing pose in normalized image coordinates: shoulder span
/// 0.20, hip span 0.18, torso 0.25, arm segments 0.15 + 0.15 per side,
/// nose to heel midpoint 0.80.
fn standing_pose() -> Vec<Point> {
    let mut points = vec![Point::new(0.5, 0.5); 33];
    points[index::NOSE] = Point::new(0.50, 0.10);
    points[index::LEFT_SHOULDER] = Point::new(0.40, 0.30);
    points[index::RIGHT_SHOULDER] = Point::new(0.60, 0.30);
    points[index::LEFT_ELBOW] = Point::new(0.40, 0.45);
    points[index::RIGHT_ELBOW] = Point::new(0.60, 0.45);
    points[index::LEFT_WRIST] = Point::new(0.40, 0.60);
    points[index::RIGHT_WRIST] = Point::new(0.60, 0.60);
    points[index::LEFT_HIP] = Point::new(0.40, 0.55);
    points[index::RIGHT_HIP] = Point::new(0.58, 0.55);
    points[index::LEFT_HEEL] = Point::new(0.45, 0.90);
    points[index::RIGHT_HEEL] = Point::new(0.55, 0.90);
    points
}

#[test]
fn height_calibrated_scenario() {
    let calib = Calibration::Height { value_cm: 175.0 };
    let analysis = analyze(&standing_pose(), &calib, Garment::TShirt).unwrap();

    // scale = 175 / (0.80 * 1.12) = 195.3125 cm per unit
    let m = &analysis.measurements;
    assert!((m.shoulder - 15.4).abs() < 1e-3);
    assert!((m.chest - 32.3).abs() < 1e-3);
    assert!((m.arm - 23.1).abs() < 1e-3);
    assert!((m.length - 26.9).abs() < 1e-3);

    assert_eq!(analysis.recommended_size, Size::S);
    assert_eq!(analysis.body_type, BodyType::Balanced);
    assert_eq!(analysis.arm_type, ArmType::LongArms);
    assert!(analysis.warnings.is_empty());
    assert_eq!(analysis.reference.shoulder, 16.5);
}

#[test]
fn paper_calibration_separates_hoodie_from_tshirt() {
    // An A4 sheet spanning 0.11 of the image height: scale = 29.7 / 0.11 = 270,
    // chest estimate 44.6 in. That is an XL t-shirt but only an L hoodie.
    let calib = Calibration::PaperReference { pixel_height: 0.11 };

    let tshirt = analyze(&standing_pose(), &calib, Garment::TShirt).unwrap();
    assert!((tshirt.measurements.chest - 44.6).abs() < 1e-3);
    assert_eq!(tshirt.recommended_size, Size::Xl);

    let hoodie = analyze(&standing_pose(), &calib, Garment::OversizedHoodie).unwrap();
    assert_eq!(hoodie.recommended_size, Size::L);
}

#[test]
fn broad_shoulders_are_detected() {
    // Shorten the torso so the shoulder span dominates it.
    let mut points = standing_pose();
    points[index::LEFT_HIP] = Point::new(0.40, 0.50);
    points[index::RIGHT_HIP] = Point::new(0.58, 0.50);

    let calib = Calibration::Height { value_cm: 175.0 };
    let analysis = analyze(&points, &calib, Garment::TShirt).unwrap();
    assert_eq!(analysis.body_type, BodyType::BroadShoulders);
}

#[test]
fn long_arms_in_a_jacket_warn() {
    let mut points = standing_pose();
    points[index::LEFT_WRIST] = Point::new(0.40, 0.66);
    points[index::RIGHT_WRIST] = Point::new(0.60, 0.66);

    let calib = Calibration::Height { value_cm: 175.0 };
    let analysis = analyze(&points, &calib, Garment::Jacket).unwrap();
    assert!(analysis.measurements.arm > 26.0);
    assert!(analysis
        .warnings
        .iter()
        .any(|w| w == "Check sleeve length (You have long arms)"));

    // Same pose in a t-shirt carries no warning.
    let analysis = analyze(&points, &calib, Garment::TShirt).unwrap();
    assert!(analysis.warnings.is_empty());
}

#[test]
fn fit_comparison_is_reported_for_charted_sizes() {
    let calib = Calibration::PaperReference { pixel_height: 0.11 };
    let analysis = analyze(&standing_pose(), &calib, Garment::TShirt).unwrap();

    // XL t-shirt is charted; shoulder/torso 0.80 vs ideal 0.95 reads loose.
    let cmp = analysis.comparison.expect("XL t-shirt is charted");
    assert_eq!(cmp.shoulder_to_torso.status, FitStatus::Loose);
    assert_eq!(cmp.shoulder_to_torso.ideal, 0.95);
}

#[test]
fn degenerate_pose_fails_height_calibration() {
    let mut points = standing_pose();
    points[index::NOSE] = Point::new(0.50, 0.90);

    let calib = Calibration::Height { value_cm: 175.0 };
    assert!(matches!(
        analyze(&points, &calib, Garment::TShirt),
        Err(Error::DegeneratePose)
    ));
}

#[test]
fn truncated_landmark_sequence_fails() {
    let calib = Calibration::Height { value_cm: 175.0 };
    let points: Vec<Point> = standing_pose().into_iter().take(20).collect();
    assert!(matches!(
        analyze(&points, &calib, Garment::TShirt),
        Err(Error::InsufficientLandmarkData)
    ));
}

#[test]
fn landmarks_parse_from_detector_json() {
    let json = serde_json::to_string(&standing_pose()).unwrap();
    let points: Vec<Point> = serde_json::from_str(&json).unwrap();

    let calib = Calibration::Height { value_cm: 175.0 };
    let analysis = analyze(&points, &calib, Garment::TShirt).unwrap();
    assert_eq!(analysis.recommended_size, Size::S);
}

#[test]
fn repeated_analysis_is_identical() {
    let lm = BodyLandmarks::from_slice(&standing_pose()).unwrap();
    let calib = Calibration::Height { value_cm: 175.0 };
    let scale = resolve_scale(&calib, &lm).unwrap();

    let a = extract_measurements(&lm, scale).unwrap();
    let b = extract_measurements(&lm, scale).unwrap();
    assert_eq!(a, b);
    assert!(body_height_px(&lm) >= 0.0);
}
