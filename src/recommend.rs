//! Garment size recommendation.
//!
//! Driven solely by the estimated chest circumference against ordered,
//! category-specific breakpoints. Oversized hoodies get wider breakpoints;
//! every other category shares the t-shirt table.

use serde::{Deserialize, Serialize};

use crate::measure::Measurements;

/// Garment size label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }

    /// Parse a size label. Returns `None` for unrecognized labels so callers
    /// can choose their own fallback.
    pub fn from_label(label: &str) -> Option<Size> {
        match label {
            "S" => Some(Size::S),
            "M" => Some(Size::M),
            "L" => Some(Size::L),
            "XL" => Some(Size::Xl),
            "XXL" => Some(Size::Xxl),
            _ => None,
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Garment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Garment {
    TShirt,
    OversizedHoodie,
    Jacket,
}

impl Garment {
    /// Map a category label onto a garment. Unrecognized labels fall back to
    /// the t-shirt category, which also carries the default size table.
    pub fn from_label(label: &str) -> Garment {
        match label {
            "hoodie" | "oversized hoodie" => Garment::OversizedHoodie,
            "jacket" => Garment::Jacket,
            _ => Garment::TShirt,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Garment::TShirt => "t-shirt",
            Garment::OversizedHoodie => "oversized hoodie",
            Garment::Jacket => "jacket",
        }
    }
}

impl std::fmt::Display for Garment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommend a size from the chest circumference.
///
/// Breakpoints are exclusive upper bounds checked in ascending order.
/// Missing measurements fall back to `M`.
pub fn recommend_size(measurements: Option<&Measurements>, garment: Garment) -> Size {
    let Some(m) = measurements else {
        return Size::M;
    };
    let chest = m.chest;

    match garment {
        Garment::OversizedHoodie => {
            if chest < 38.0 {
                Size::S
            } else if chest < 41.0 {
                Size::M
            } else if chest < 45.0 {
                Size::L
            } else if chest < 49.0 {
                Size::Xl
            } else {
                Size::Xxl
            }
        }
        // Jacket sizing arguably warrants its own breakpoints; it currently
        // shares the t-shirt table.
        Garment::TShirt | Garment::Jacket => {
            if chest < 37.0 {
                Size::S
            } else if chest < 40.0 {
                Size::M
            } else if chest < 43.0 {
                Size::L
            } else if chest < 47.0 {
                Size::Xl
            } else {
                Size::Xxl
            }
        }
    }
}
