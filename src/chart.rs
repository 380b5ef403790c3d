//! Static garment reference tables.
//!
//! Two read-only tables: reference garment dimensions per size label, used
//! for the comparison display next to the user's own measurements, and per
//! garment ideal body proportions per size, used by the fit comparison.

use serde::{Deserialize, Serialize};

use crate::recommend::{Garment, Size};

/// Reference garment dimensions in inches for one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeDimensions {
    pub shoulder: f32,
    pub chest: f32,
    pub arm: f32,
    pub length: f32,
}

/// Reference garment dimensions for the five supported sizes.
pub static SIZE_CHART: [(Size, SizeDimensions); 5] = [
    (
        Size::S,
        SizeDimensions {
            shoulder: 16.5,
            chest: 37.0,
            arm: 25.0,
            length: 27.0,
        },
    ),
    (
        Size::M,
        SizeDimensions {
            shoulder: 17.5,
            chest: 40.0,
            arm: 25.5,
            length: 28.0,
        },
    ),
    (
        Size::L,
        SizeDimensions {
            shoulder: 18.5,
            chest: 43.0,
            arm: 26.0,
            length: 29.0,
        },
    ),
    (
        Size::Xl,
        SizeDimensions {
            shoulder: 19.5,
            chest: 47.0,
            arm: 26.5,
            length: 30.0,
        },
    ),
    (
        Size::Xxl,
        SizeDimensions {
            shoulder: 20.5,
            chest: 51.0,
            arm: 27.0,
            length: 31.0,
        },
    ),
];

/// Look up the reference dimensions for a size.
pub fn dimensions(size: Size) -> &'static SizeDimensions {
    SIZE_CHART
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, d)| d)
        .unwrap_or(&SIZE_CHART[1].1)
}

/// Look up reference dimensions by label. Unrecognized labels get the `M`
/// entry; this lookup never fails.
pub fn dimensions_for_label(label: &str) -> &'static SizeDimensions {
    dimensions(Size::from_label(label).unwrap_or(Size::M))
}

/// Ideal body proportions for one garment size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarmentRatios {
    pub shoulder_to_torso: f32,
    pub arm_to_torso: f32,
}

/// Ideal proportions per garment and size. Only the sizes a garment's cut
/// is charted for have entries.
pub fn garment_ratios(garment: Garment, size: Size) -> Option<GarmentRatios> {
    let (shoulder_to_torso, arm_to_torso) = match (garment, size) {
        (Garment::TShirt, Size::M) => (0.85, 1.00),
        (Garment::TShirt, Size::L) => (0.90, 1.05),
        (Garment::TShirt, Size::Xl) => (0.95, 1.10),
        (Garment::OversizedHoodie, Size::L) => (0.95, 1.10),
        (Garment::OversizedHoodie, Size::Xl) => (1.00, 1.15),
        (Garment::Jacket, Size::L) => (0.90, 1.10),
        (Garment::Jacket, Size::Xxl) => (1.00, 1.15),
        _ => return None,
    };
    Some(GarmentRatios {
        shoulder_to_torso,
        arm_to_torso,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xxl_entry() {
        let d = dimensions(Size::Xxl);
        assert_eq!(d.shoulder, 20.5);
        assert_eq!(d.chest, 51.0);
        assert_eq!(d.arm, 27.0);
        assert_eq!(d.length, 31.0);
    }

    #[test]
    fn lookup_by_label() {
        let d = dimensions_for_label("XXL");
        assert_eq!(d.shoulder, 20.5);
        assert_eq!(d.chest, 51.0);
    }

    #[test]
    fn unknown_label_falls_back_to_m() {
        let d = dimensions_for_label("bogus");
        assert_eq!(d.shoulder, 17.5);
        assert_eq!(d.chest, 40.0);
        assert_eq!(d.arm, 25.5);
        assert_eq!(d.length, 28.0);
    }

    #[test]
    fn every_size_has_an_entry() {
        for size in [Size::S, Size::M, Size::L, Size::Xl, Size::Xxl] {
            assert!(dimensions(size).chest > 0.0);
        }
    }

    #[test]
    fn garment_ratio_coverage() {
        assert!(garment_ratios(Garment::TShirt, Size::M).is_some());
        assert!(garment_ratios(Garment::TShirt, Size::S).is_none());
        assert!(garment_ratios(Garment::OversizedHoodie, Size::Xl).is_some());
        assert!(garment_ratios(Garment::Jacket, Size::Xxl).is_some());
        assert!(garment_ratios(Garment::Jacket, Size::M).is_none());

        let r = garment_ratios(Garment::TShirt, Size::L).unwrap();
        assert_eq!(r.shoulder_to_torso, 0.90);
        assert_eq!(r.arm_to_torso, 1.05);
    }
}
