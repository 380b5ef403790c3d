//! Coarse body shape classification from pose proportions.

use serde::{Deserialize, Serialize};

use crate::measure::{BodyRatios, Measurements};

/// Shoulder-to-torso ratio above which shoulders are considered broad.
pub const BROAD_SHOULDER_RATIO: f32 = 0.95;

/// Arm-to-torso ratio bounds for the arm length buckets.
pub const LONG_ARM_RATIO: f32 = 1.15;
pub const SHORT_ARM_RATIO: f32 = 0.95;

/// Coarse body type. Deliberately a two-bucket scheme; finer-grained rules
/// would need more than the shoulder-to-torso proportion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    Unknown,
    Balanced,
    #[serde(rename = "Broad Shoulders")]
    BroadShoulders,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Unknown => "Unknown",
            BodyType::Balanced => "Balanced",
            BodyType::BroadShoulders => "Broad Shoulders",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arm length relative to the torso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmType {
    Unknown,
    #[serde(rename = "Short Arms")]
    ShortArms,
    #[serde(rename = "Average Arms")]
    AverageArms,
    #[serde(rename = "Long Arms")]
    LongArms,
}

impl ArmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmType::Unknown => "Unknown",
            ArmType::ShortArms => "Short Arms",
            ArmType::AverageArms => "Average Arms",
            ArmType::LongArms => "Long Arms",
        }
    }
}

impl std::fmt::Display for ArmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the body type from measured proportions.
///
/// Total over its input: absent measurements yield `Unknown`, absent ratio
/// data yields `Balanced`.
pub fn classify_body_type(measurements: Option<&Measurements>) -> BodyType {
    let Some(m) = measurements else {
        return BodyType::Unknown;
    };
    let Some(ratios) = m.ratios else {
        return BodyType::Balanced;
    };

    if ratios.shoulder_to_torso > BROAD_SHOULDER_RATIO {
        BodyType::BroadShoulders
    } else {
        BodyType::Balanced
    }
}

/// Classify arm length from measured proportions.
pub fn classify_arm_length(ratios: Option<&BodyRatios>) -> ArmType {
    let Some(r) = ratios else {
        return ArmType::Unknown;
    };

    if r.arm_to_torso > LONG_ARM_RATIO {
        ArmType::LongArms
    } else if r.arm_to_torso < SHORT_ARM_RATIO {
        ArmType::ShortArms
    } else {
        ArmType::AverageArms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements_with_ratios(ratios: Option<BodyRatios>) -> Measurements {
        Measurements {
            shoulder: 16.0,
            chest: 38.0,
            arm: 24.0,
            length: 28.0,
            ratios,
        }
    }

    fn ratios(shoulder: f32, hip: f32, arm: f32) -> BodyRatios {
        BodyRatios {
            shoulder_to_torso: shoulder,
            hip_to_torso: hip,
            arm_to_torso: arm,
        }
    }

    #[test]
    fn absent_measurements_are_unknown() {
        assert_eq!(classify_body_type(None), BodyType::Unknown);
    }

    #[test]
    fn absent_ratios_are_balanced() {
        let m = measurements_with_ratios(None);
        assert_eq!(classify_body_type(Some(&m)), BodyType::Balanced);
    }

    #[test]
    fn broad_shoulder_threshold() {
        let broad = measurements_with_ratios(Some(ratios(0.96, 0.7, 1.0)));
        assert_eq!(classify_body_type(Some(&broad)), BodyType::BroadShoulders);

        // 0.95 itself is not broad
        let edge = measurements_with_ratios(Some(ratios(0.95, 0.7, 1.0)));
        assert_eq!(classify_body_type(Some(&edge)), BodyType::Balanced);
    }

    #[test]
    fn arm_length_buckets() {
        assert_eq!(classify_arm_length(None), ArmType::Unknown);
        assert_eq!(
            classify_arm_length(Some(&ratios(0.8, 0.7, 1.2))),
            ArmType::LongArms
        );
        assert_eq!(
            classify_arm_length(Some(&ratios(0.8, 0.7, 0.9))),
            ArmType::ShortArms
        );
        assert_eq!(
            classify_arm_length(Some(&ratios(0.8, 0.7, 1.0))),
            ArmType::AverageArms
        );
    }

    #[test]
    fn labels() {
        assert_eq!(BodyType::BroadShoulders.to_string(), "Broad Shoulders");
        assert_eq!(ArmType::LongArms.to_string(), "Long Arms");
    }
}
