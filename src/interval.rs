//! Interval numbers.
//!
//! An [`Interval`] `[inf, sup]` is a conservative enclosure of an unknown real.
//! Arithmetic keeps the enclosure valid by rounding every upper bound upward and
//! every lower bound downward. Lower bounds are computed by negation
//! (`inf(a + b) = -((-a.inf) + (-b.inf))`), so only upward rounding is needed and
//! the operators require [`RoundingMode::Upward`][crate::rounding::RoundingMode::Upward]
//! to be active (see [`RoundingGuard`][crate::rounding::RoundingGuard]).
//!
//! Comparisons decide only when the answer is the same for every pair of reals in
//! the operands. Otherwise they return [`Undecided`], which is the signal used by
//! the filter to switch to exact arithmetic.
//!
//! ```
//! use filtered_predicates::interval::Interval;
//! use filtered_predicates::rounding::RoundingGuard;
//! use filtered_predicates::sign::Sign;
//!
//! let _guard = RoundingGuard::upward();
//! let a = Interval::from(0.1);
//! let b = Interval::from(0.2);
//! let c = a + b;
//! assert!(c.inf() < c.sup());
//! assert_eq!(c.sign(), Ok(Sign::Positive));
//! assert!((c - c).sign().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use crate::rounding::{self, RoundingMode};
use crate::sign::Sign;

/// The operands of a comparison overlap, so the comparison cannot be decided.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Undecided;

impl Display for Undecided {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "undecided interval comparison")
    }
}

impl std::error::Error for Undecided {}

/// Closed interval `[inf, sup]` of `f64` bounds.
///
/// # Invariants
///
/// - `inf <= sup`, neither bound is NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    inf: f64,
    sup: f64,
}

fn check_upward() {
    debug_assert_eq!(
        rounding::current(),
        RoundingMode::Upward,
        "Interval arithmetic requires upward rounding"
    );
}

impl Interval {
    /// Creates the interval `[inf, sup]`.
    ///
    /// # Panics
    ///
    /// Panics if a bound is NaN or `inf > sup`.
    pub fn new(inf: f64, sup: f64) -> Self {
        assert!(
            inf <= sup,
            "Interval bounds must be ordered and not NaN, got [{}, {}]",
            inf,
            sup
        );
        Self { inf, sup }
    }

    /// Degenerate interval `[x, x]`.
    pub fn point(x: f64) -> Self {
        Self::new(x, x)
    }

    pub const fn zero() -> Self {
        Self { inf: 0.0, sup: 0.0 }
    }

    /// The whole real line.
    pub const fn entire() -> Self {
        Self {
            inf: f64::NEG_INFINITY,
            sup: f64::INFINITY,
        }
    }

    /// Lower bound.
    pub fn inf(&self) -> f64 {
        self.inf
    }
    /// Upper bound.
    pub fn sup(&self) -> f64 {
        self.sup
    }

    /// `sup - inf`, rounded upward.
    pub fn width(&self) -> f64 {
        rounding::add_up(self.sup, -self.inf)
    }

    /// Whether the interval holds exactly one value.
    pub fn is_point(&self) -> bool {
        self.inf == self.sup
    }

    pub fn contains(&self, x: f64) -> bool {
        self.inf <= x && x <= self.sup
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.inf <= other.sup && other.inf <= self.sup
    }

    /// Smallest interval containing both operands.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            inf: self.inf.min(other.inf),
            sup: self.sup.max(other.sup),
        }
    }

    /// Enclosure of `x * x`, tighter than `x * x` when `x` straddles zero.
    pub fn square(&self) -> Interval {
        check_upward();
        if self.inf >= 0.0 {
            Interval {
                inf: -rounding::mul(-self.inf, self.inf),
                sup: rounding::mul(self.sup, self.sup),
            }
        } else if self.sup <= 0.0 {
            Interval {
                inf: -rounding::mul(-self.sup, self.sup),
                sup: rounding::mul(self.inf, self.inf),
            }
        } else {
            let m = (-self.inf).max(self.sup);
            Interval {
                inf: 0.0,
                sup: rounding::mul(m, m),
            }
        }
    }

    /// Sign of every value in the interval.
    pub fn sign(&self) -> Result<Sign, Undecided> {
        if self.inf > 0.0 {
            Ok(Sign::Positive)
        } else if self.sup < 0.0 {
            Ok(Sign::Negative)
        } else if self.inf == 0.0 && self.sup == 0.0 {
            Ok(Sign::Zero)
        } else {
            Err(Undecided)
        }
    }

    /// Ordering of every pair of values taken from `self` and `other`.
    pub fn compare(&self, other: &Interval) -> Result<Ordering, Undecided> {
        if self.sup < other.inf {
            Ok(Ordering::Less)
        } else if self.inf > other.sup {
            Ok(Ordering::Greater)
        } else if self.is_point() && other.is_point() && self.inf == other.inf {
            Ok(Ordering::Equal)
        } else {
            Err(Undecided)
        }
    }

    pub fn try_lt(&self, other: &Interval) -> Result<bool, Undecided> {
        self.compare(other).map(|o| o == Ordering::Less)
    }

    pub fn try_eq(&self, other: &Interval) -> Result<bool, Undecided> {
        self.compare(other).map(|o| o == Ordering::Equal)
    }
}

/// Upper bound of a corner product, with `0 * inf` taken as `0`.
fn corner_up(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        0.0
    } else {
        rounding::mul(a, b)
    }
}

/// Lower bound of a corner product, via negation.
fn corner_down(a: f64, b: f64) -> f64 {
    -corner_up(-a, b)
}

impl Default for Interval {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Self::point(x)
    }
}

impl From<i32> for Interval {
    fn from(x: i32) -> Self {
        Self::point(x as f64)
    }
}

impl From<i64> for Interval {
    /// Tightest enclosure; large integers may not be representable.
    fn from(x: i64) -> Self {
        let f = x as f64;
        // `f` may be 2^63, which is out of range for i64 but not for i128.
        match (f as i128).cmp(&(x as i128)) {
            Ordering::Equal => Self::point(f),
            Ordering::Less => Self::new(f, rounding::next_up(f)),
            Ordering::Greater => Self::new(rounding::next_down(f), f),
        }
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        Interval {
            inf: -self.sup,
            sup: -self.inf,
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Self) -> Self::Output {
        check_upward();
        Interval {
            inf: -rounding::add(-self.inf, -rhs.inf),
            sup: rounding::add(self.sup, rhs.sup),
        }
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Self) -> Self::Output {
        check_upward();
        Interval {
            inf: -rounding::add(rhs.sup, -self.inf),
            sup: rounding::add(self.sup, -rhs.inf),
        }
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Self) -> Self::Output {
        check_upward();
        let (a, b, c, d) = (self.inf, self.sup, rhs.inf, rhs.sup);
        Interval {
            inf: corner_down(a, c)
                .min(corner_down(a, d))
                .min(corner_down(b, c))
                .min(corner_down(b, d)),
            sup: corner_up(a, c)
                .max(corner_up(a, d))
                .max(corner_up(b, c))
                .max(corner_up(b, d)),
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:e}, {:e}]", self.inf, self.sup)
    }
}


#[cfg(test)]
mod proptests {
    use num_rational::BigRational;
    use proptest::prelude::*;

    use super::*;
    use crate::exact;
    use crate::rounding::RoundingGuard;

    fn encloses(i: &Interval, value: &BigRational) -> bool {
        let lo = BigRational::from_float(i.inf()).expect("finite bound");
        let hi = BigRational::from_float(i.sup()).expect("finite bound");
        lo <= *value && *value <= hi
    }

    fn finite() -> impl Strategy<Value = f64> {
        prop_oneof![
            -1e6f64..1e6,
            -1e-300f64..1e-300,
            any::<f64>().prop_filter("finite", |x| x.is_finite()),
        ]
    }

    proptest! {
        #[test]
        fn prop_add_encloses(x in finite(), y in finite()) {
            let _guard = RoundingGuard::upward();
            let r = Interval::from(x) + Interval::from(y);
            let e = exact::from_f64(x) + exact::from_f64(y);
            prop_assume!(r.inf().is_finite() && r.sup().is_finite());
            prop_assert!(encloses(&r, &e));
        }

        #[test]
        fn prop_sub_encloses(x in finite(), y in finite()) {
            let _guard = RoundingGuard::upward();
            let r = Interval::from(x) - Interval::from(y);
            let e = exact::from_f64(x) - exact::from_f64(y);
            prop_assume!(r.inf().is_finite() && r.sup().is_finite());
            prop_assert!(encloses(&r, &e));
        }

        #[test]
        fn prop_mul_encloses(x in finite(), y in finite()) {
            let _guard = RoundingGuard::upward();
            let r = Interval::from(x) * Interval::from(y);
            let e = exact::from_f64(x) * exact::from_f64(y);
            prop_assume!(r.inf().is_finite() && r.sup().is_finite());
            prop_assert!(encloses(&r, &e));
        }

        #[test]
        fn prop_compound_encloses(a in finite(), b in finite(), c in finite(), d in finite()) {
            let _guard = RoundingGuard::upward();
            let (ia, ib, ic, id) = (Interval::from(a), Interval::from(b), Interval::from(c), Interval::from(d));
            let r = (ia - ib) * (ic - id) - (ia + id).square();
            let (ea, eb, ec, ed) = (exact::from_f64(a), exact::from_f64(b), exact::from_f64(c), exact::from_f64(d));
            let s = ea.clone() + ed.clone();
            let e = (ea - eb) * (ec - ed) - s.clone() * s;
            prop_assume!(r.inf().is_finite() && r.sup().is_finite());
            prop_assert!(encloses(&r, &e));
        }
    }
}
