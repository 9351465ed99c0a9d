//! Exact numbers.
//!
//! The exact phase runs on [`BigRational`]: arithmetic never rounds and
//! comparisons always decide. Conversions from machine numbers are exact.
//!
//! Every call of the exact constructors ([`from_f64`], [`from_i64`]) is counted
//! per thread, so callers can observe whether a computation touched exact
//! arithmetic at all (see [`conversions`]).

use std::cell::Cell;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::interval::Interval;
use crate::rounding::{next_down, next_up};

/// Exact number type used by the fallback phase.
pub type Exact = BigRational;

thread_local! {
    static CONVERSIONS: Cell<usize> = const { Cell::new(0) };
}

/// Number of exact conversions performed on the calling thread.
pub fn conversions() -> usize {
    CONVERSIONS.with(|c| c.get())
}

/// Resets the conversion counter of the calling thread.
pub fn reset_conversions() {
    CONVERSIONS.with(|c| c.set(0));
}

fn count() {
    CONVERSIONS.with(|c| c.set(c.get() + 1));
}

/// Exact value of a finite `f64`, without touching the counter.
fn ratio_of(x: f64) -> BigRational {
    debug_assert!(x.is_finite(), "Exact conversion requires a finite value");
    let (mantissa, exponent, sign) = FloatCore::integer_decode(x);
    if mantissa == 0 {
        return BigRational::zero();
    }
    let mut numer = BigInt::from(mantissa);
    if sign < 0 {
        numer = -numer;
    }
    if exponent >= 0 {
        BigRational::from_integer(numer << exponent as usize)
    } else {
        BigRational::new(numer, BigInt::one() << (-exponent) as usize)
    }
}

/// Exact value of a finite `f64`.
pub fn from_f64(x: f64) -> BigRational {
    count();
    ratio_of(x)
}

/// Exact value of an `i64`.
pub fn from_i64(x: i64) -> BigRational {
    count();
    BigRational::from_integer(BigInt::from(x))
}

/// Tightest interval enclosing `r`.
///
/// Values beyond the `f64` range map to `[MAX, +inf]` or `[-inf, -MAX]`.
pub fn to_interval(r: &BigRational) -> Interval {
    let approx = r.to_f64().unwrap_or(if r.is_negative() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    });
    let approx = approx.clamp(-f64::MAX, f64::MAX);

    let mut inf = approx;
    while inf.is_finite() && ratio_of(inf) > *r {
        inf = next_down(inf);
    }
    let mut sup = approx;
    while sup.is_finite() && ratio_of(sup) < *r {
        sup = next_up(sup);
    }
    Interval::new(inf, sup)
}
