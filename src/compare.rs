//! Garment fit comparison.
//!
//! Compares the user's body proportions against the charted ideal for the
//! chosen garment and size, per ratio, into a tight/loose/good verdict.

use serde::{Deserialize, Serialize};

use crate::chart::garment_ratios;
use crate::measure::{round_to, BodyRatios};
use crate::recommend::{Garment, Size};

/// Half-width of the band around the ideal ratio that still counts as a
/// good fit.
pub const FIT_TOLERANCE: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStatus {
    Tight,
    Loose,
    Good,
}

impl FitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitStatus::Tight => "tight",
            FitStatus::Loose => "loose",
            FitStatus::Good => "good",
        }
    }
}

impl std::fmt::Display for FitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a single body proportion against the garment ideal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioFit {
    pub user: f32,
    pub ideal: f32,
    /// `user - ideal`, rounded to three decimals.
    pub difference: f32,
    pub status: FitStatus,
}

/// Per-ratio fit comparison for one garment size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitComparison {
    pub shoulder_to_torso: RatioFit,
    pub arm_to_torso: RatioFit,
}

/// Compare body proportions against the charted ideal for a garment size.
///
/// Returns `None` when the garment's cut is not charted for that size.
pub fn compare_fit(ratios: &BodyRatios, garment: Garment, size: Size) -> Option<FitComparison> {
    let ideal = garment_ratios(garment, size)?;
    Some(FitComparison {
        shoulder_to_torso: ratio_fit(ratios.shoulder_to_torso, ideal.shoulder_to_torso),
        arm_to_torso: ratio_fit(ratios.arm_to_torso, ideal.arm_to_torso),
    })
}

fn ratio_fit(user: f32, ideal: f32) -> RatioFit {
    let difference = round_to(user - ideal, 3);
    let status = if difference > FIT_TOLERANCE {
        FitStatus::Tight
    } else if difference < -FIT_TOLERANCE {
        FitStatus::Loose
    } else {
        FitStatus::Good
    };
    RatioFit {
        user,
        ideal,
        difference,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(shoulder: f32, arm: f32) -> BodyRatios {
        BodyRatios {
            shoulder_to_torso: shoulder,
            hip_to_torso: 0.7,
            arm_to_torso: arm,
        }
    }

    #[test]
    fn status_bands() {
        // ideal for t-shirt M: shoulder 0.85, arm 1.00
        let tight = compare_fit(&ratios(0.95, 1.10), Garment::TShirt, Size::M).unwrap();
        assert_eq!(tight.shoulder_to_torso.status, FitStatus::Tight);
        assert_eq!(tight.arm_to_torso.status, FitStatus::Tight);

        let loose = compare_fit(&ratios(0.75, 0.90), Garment::TShirt, Size::M).unwrap();
        assert_eq!(loose.shoulder_to_torso.status, FitStatus::Loose);
        assert_eq!(loose.arm_to_torso.status, FitStatus::Loose);

        let good = compare_fit(&ratios(0.88, 1.03), Garment::TShirt, Size::M).unwrap();
        assert_eq!(good.shoulder_to_torso.status, FitStatus::Good);
        assert_eq!(good.arm_to_torso.status, FitStatus::Good);
    }

    #[test]
    fn tolerance_is_inclusive() {
        // exactly 0.05 over the ideal is still good
        let edge = compare_fit(&ratios(0.90, 1.05), Garment::TShirt, Size::M).unwrap();
        assert_eq!(edge.shoulder_to_torso.status, FitStatus::Good);
        assert_eq!(edge.arm_to_torso.status, FitStatus::Good);
    }

    #[test]
    fn difference_is_rounded() {
        let cmp = compare_fit(&ratios(0.8776, 1.0), Garment::TShirt, Size::M).unwrap();
        assert!((cmp.shoulder_to_torso.difference - 0.028).abs() < 1e-6);
    }

    #[test]
    fn uncharted_size_yields_none() {
        assert!(compare_fit(&ratios(0.85, 1.0), Garment::TShirt, Size::S).is_none());
        assert!(compare_fit(&ratios(0.85, 1.0), Garment::Jacket, Size::M).is_none());
    }
}
