//! Symbolic predicate outcomes.
//!
//! Predicates never return measurements, only one of a few named results.
//! Everything here derives from a three-way [`Sign`].

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Mul, Neg};

/// Sign of a real number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Returns `-1`, `0` or `1`.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl From<Ordering> for Sign {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

impl From<Sign> for Ordering {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self {
            Sign::Negative => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Positive => rhs,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sign::Negative => "-",
            Sign::Zero => "0",
            Sign::Positive => "+",
        };
        write!(f, "{}", s)
    }
}

/// Orientation of three points in the plane.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Right turn (negative signed area).
    Clockwise,
    Collinear,
    /// Left turn (positive signed area).
    CounterClockwise,
}

impl From<Sign> for Orientation {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Orientation::Clockwise,
            Sign::Zero => Orientation::Collinear,
            Sign::Positive => Orientation::CounterClockwise,
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Orientation::Clockwise => "clockwise",
            Orientation::Collinear => "collinear",
            Orientation::CounterClockwise => "counterclockwise",
        };
        write!(f, "{}", s)
    }
}

/// Orientation of four points in space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation3 {
    Negative,
    Coplanar,
    Positive,
}

impl From<Sign> for Orientation3 {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Orientation3::Negative,
            Sign::Zero => Orientation3::Coplanar,
            Sign::Positive => Orientation3::Positive,
        }
    }
}

impl Display for Orientation3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Orientation3::Negative => "negative",
            Orientation3::Coplanar => "coplanar",
            Orientation3::Positive => "positive",
        };
        write!(f, "{}", s)
    }
}

/// Side of an oriented circle, sphere, or power circle/sphere.
///
/// For a positively oriented boundary, [`OrientedSide::Positive`] is the inside.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OrientedSide {
    Negative,
    OnBoundary,
    Positive,
}

impl From<Sign> for OrientedSide {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => OrientedSide::Negative,
            Sign::Zero => OrientedSide::OnBoundary,
            Sign::Positive => OrientedSide::Positive,
        }
    }
}

impl Display for OrientedSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrientedSide::Negative => "negative side",
            OrientedSide::OnBoundary => "on boundary",
            OrientedSide::Positive => "positive side",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_sign_product() {
        use Sign::*;
        assert_eq!(Negative * Negative, Positive);
        assert_eq!(Negative * Positive, Negative);
        assert_eq!(Positive * Zero, Zero);
        assert_eq!(Zero * Negative, Zero);
        assert_eq!(-Positive, Negative);
        assert_eq!(Negative.as_i32(), -1);
    }

    #[test]
    fn test_sign_ordering() {
        assert_eq!(Sign::from(Ordering::Less), Sign::Negative);
        assert_eq!(Sign::from(1.cmp(&1)), Sign::Zero);
        assert_eq!(Ordering::from(Sign::Positive), Ordering::Greater);
    }

    #[test]
    fn test_outcomes_from_sign() {
        assert_eq!(Orientation::from(Sign::Positive), Orientation::CounterClockwise);
        assert_eq!(Orientation3::from(Sign::Zero), Orientation3::Coplanar);
        assert_eq!(OrientedSide::from(Sign::Negative), OrientedSide::Negative);
        assert_eq!(OrientedSide::OnBoundary.to_string(), "on boundary");
    }
}
