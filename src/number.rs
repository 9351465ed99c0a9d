//! Arithmetic interface shared by the interval and exact phases.
//!
//! A predicate formula is written once against [`Number`] and instantiated for
//! both [`Interval`] and [`BigRational`]. Both instantiations therefore perform
//! the same sequence of operations, which is what makes the interval result a
//! valid enclosure of the exact one.
//!
//! The associated [`Number::Undecided`] type is the failure signal of the sign
//! and comparison operations: [`Undecided`] for intervals, and
//! [`Infallible`] for exact numbers, whose comparisons are total.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::BigRational;
use num_traits::Zero;

use crate::interval::{Interval, Undecided};
use crate::sign::Sign;

pub trait Number:
    Clone + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Signal raised when a sign or comparison cannot be decided.
    type Undecided: Debug;

    fn sign(&self) -> Result<Sign, Self::Undecided>;

    fn compare(&self, other: &Self) -> Result<Ordering, Self::Undecided>;

    fn square(&self) -> Self {
        self.clone() * self.clone()
    }
}

impl Number for Interval {
    type Undecided = Undecided;

    fn sign(&self) -> Result<Sign, Undecided> {
        Interval::sign(self)
    }

    fn compare(&self, other: &Self) -> Result<Ordering, Undecided> {
        Interval::compare(self, other)
    }

    fn square(&self) -> Self {
        Interval::square(self)
    }
}

impl Number for BigRational {
    type Undecided = Infallible;

    fn sign(&self) -> Result<Sign, Infallible> {
        Ok(Sign::from(self.cmp(&BigRational::zero())))
    }

    fn compare(&self, other: &Self) -> Result<Ordering, Infallible> {
        Ok(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact;
    use crate::rounding::RoundingGuard;

    use test_log::test;

    fn diff_of_squares<N: Number>(a: &N, b: &N) -> Result<Sign, N::Undecided> {
        (a.square() - b.square()).sign()
    }

    #[test]
    fn test_exact_sign_and_compare() {
        let a = exact::from_f64(0.1);
        let b = exact::from_f64(0.2);
        assert_eq!(Number::sign(&a), Ok(Sign::Positive));
        assert_eq!(Number::sign(&(a.clone() - a.clone())), Ok(Sign::Zero));
        assert_eq!(Number::compare(&a, &b), Ok(Ordering::Less));
    }

    #[test]
    fn test_generic_formula_on_both_backends() {
        let exact = diff_of_squares(&exact::from_f64(3.0), &exact::from_f64(2.0));
        assert_eq!(exact, Ok(Sign::Positive));

        let _guard = RoundingGuard::upward();
        let fast = diff_of_squares(&Interval::from(3.0), &Interval::from(2.0));
        assert_eq!(fast, Ok(Sign::Positive));

        let x = Interval::from(0.1) + Interval::from(0.2);
        assert_eq!(diff_of_squares(&x, &x), Err(Undecided));
    }
}
