use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
///
/// Coordinates may be normalized image fractions or raw pixels; every
/// derived quantity is a ratio of distances until a calibration scale is
/// applied, so the unit only has to be consistent within one photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// A landmark coordinate is usable if it is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x >= 0.0 && self.y >= 0.0
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Landmark indices in the 33-point pose numbering scheme used by common
/// pose detectors. Only the indices below are read by this crate.
pub mod index {
    pub const NOSE: usize = 0;
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_ELBOW: usize = 13;
    pub const RIGHT_ELBOW: usize = 14;
    pub const LEFT_WRIST: usize = 15;
    pub const RIGHT_WRIST: usize = 16;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;
    pub const LEFT_HEEL: usize = 29;
    pub const RIGHT_HEEL: usize = 30;
}

/// The body keypoints needed for measurement, by anatomical role.
///
/// Built from a flat landmark sequence with [`BodyLandmarks::from_slice`];
/// named fields rather than raw indices so a numbering mix-up cannot
/// silently swap roles downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLandmarks {
    pub nose: Point,
    pub left_shoulder: Point,
    pub right_shoulder: Point,
    pub left_elbow: Point,
    pub right_elbow: Point,
    pub left_wrist: Point,
    pub right_wrist: Point,
    pub left_hip: Point,
    pub right_hip: Point,
    pub left_heel: Point,
    pub right_heel: Point,
}

impl BodyLandmarks {
    /// Pick the required roles out of a flat 33-point landmark sequence.
    ///
    /// Fails with [`Error::InsufficientLandmarkData`] if the sequence is too
    /// short or any required point has a non-finite or negative coordinate.
    pub fn from_slice(points: &[Point]) -> Result<Self> {
        let get = |i: usize| -> Result<Point> {
            let p = points.get(i).ok_or(Error::InsufficientLandmarkData)?;
            if !p.is_valid() {
                return Err(Error::InsufficientLandmarkData);
            }
            Ok(*p)
        };

        Ok(Self {
            nose: get(index::NOSE)?,
            left_shoulder: get(index::LEFT_SHOULDER)?,
            right_shoulder: get(index::RIGHT_SHOULDER)?,
            left_elbow: get(index::LEFT_ELBOW)?,
            right_elbow: get(index::RIGHT_ELBOW)?,
            left_wrist: get(index::LEFT_WRIST)?,
            right_wrist: get(index::RIGHT_WRIST)?,
            left_hip: get(index::LEFT_HIP)?,
            right_hip: get(index::RIGHT_HIP)?,
            left_heel: get(index::LEFT_HEEL)?,
            right_heel: get(index::RIGHT_HEEL)?,
        })
    }
}
