//! Points with filtered coordinates.

use std::fmt::{Display, Formatter};

use crate::error::InputError;
use crate::filtered::Filtered;

/// A point in the plane.
#[derive(Debug, Clone)]
pub struct Point2 {
    pub x: Filtered,
    pub y: Filtered,
}

impl Point2 {
    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Filtered::new(x),
            y: Filtered::new(y),
        }
    }

    pub fn try_new(x: f64, y: f64) -> Result<Self, InputError> {
        Ok(Self {
            x: Filtered::try_new(x)?,
            y: Filtered::try_new(y)?,
        })
    }

    pub fn from_filtered(x: Filtered, y: Filtered) -> Self {
        Self { x, y }
    }
}

impl Display for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in space.
#[derive(Debug, Clone)]
pub struct Point3 {
    pub x: Filtered,
    pub y: Filtered,
    pub z: Filtered,
}

impl Point3 {
    /// # Panics
    ///
    /// Panics if a coordinate is not finite.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Filtered::new(x),
            y: Filtered::new(y),
            z: Filtered::new(z),
        }
    }

    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self, InputError> {
        Ok(Self {
            x: Filtered::try_new(x)?,
            y: Filtered::try_new(y)?,
            z: Filtered::try_new(z)?,
        })
    }

    pub fn from_filtered(x: Filtered, y: Filtered, z: Filtered) -> Self {
        Self { x, y, z }
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A weighted point in the plane, as used by regular triangulations.
///
/// The weight plays the role of a squared radius.
#[derive(Debug, Clone)]
pub struct WeightedPoint2 {
    pub point: Point2,
    pub weight: Filtered,
}

impl WeightedPoint2 {
    /// # Panics
    ///
    /// Panics if a coordinate or the weight is not finite.
    pub fn new(x: f64, y: f64, weight: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            weight: Filtered::new(weight),
        }
    }

    pub fn try_new(x: f64, y: f64, weight: f64) -> Result<Self, InputError> {
        Ok(Self {
            point: Point2::try_new(x, y)?,
            weight: Filtered::try_new(weight)?,
        })
    }
}

impl Display for WeightedPoint2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} w={}", self.point, self.weight)
    }
}

/// A weighted point in space.
#[derive(Debug, Clone)]
pub struct WeightedPoint3 {
    pub point: Point3,
    pub weight: Filtered,
}

impl WeightedPoint3 {
    /// # Panics
    ///
    /// Panics if a coordinate or the weight is not finite.
    pub fn new(x: f64, y: f64, z: f64, weight: f64) -> Self {
        Self {
            point: Point3::new(x, y, z),
            weight: Filtered::new(weight),
        }
    }

    pub fn try_new(x: f64, y: f64, z: f64, weight: f64) -> Result<Self, InputError> {
        Ok(Self {
            point: Point3::try_new(x, y, z)?,
            weight: Filtered::try_new(weight)?,
        })
    }
}

impl Display for WeightedPoint3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} w={}", self.point, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_try_new() {
        assert!(Point2::try_new(1.0, 2.0).is_ok());
        assert_eq!(Point2::try_new(1.0, f64::NAN).unwrap_err().to_string(), "coordinate is not finite: NaN");
        assert!(Point3::try_new(f64::INFINITY, 0.0, 0.0).is_err());
        assert!(WeightedPoint2::try_new(0.0, 0.0, f64::NEG_INFINITY).is_err());
        assert!(WeightedPoint3::try_new(0.0, 0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(WeightedPoint2::new(0.0, 1.0, 4.0).to_string(), "(0, 1) w=4");
        assert_eq!(Point3::new(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
    }
}
