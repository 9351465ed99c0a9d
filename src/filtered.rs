//! Filtered numbers.
//!
//! A [`Filtered`] value carries a cheap interval approximation, computed at
//! construction, and an exact value that is computed only when first requested
//! and then cached. Predicates read [`Filtered::interval`] on the fast path and
//! call [`Filtered::exact`] only after the interval phase failed to decide.
//!
//! The cache is a [`OnceLock`]: concurrent readers of a shared value run the
//! exact conversion at most once and never overwrite a cached value.

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::error::InputError;
use crate::exact;
use crate::interval::Interval;

/// Raw input the exact value is rebuilt from.
#[derive(Debug, Copy, Clone)]
enum Source {
    Float(f64),
    Integer(i64),
    /// Exact value supplied up front and stored in the cache.
    Rational,
}

/// A coordinate with an eager interval and a lazily computed exact value.
///
/// # Invariants
///
/// - The exact value, once computed, lies within the interval.
#[derive(Debug, Clone)]
pub struct Filtered {
    interval: Interval,
    source: Source,
    exact: OnceLock<BigRational>,
}

impl Filtered {
    /// Wraps a finite `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is NaN or infinite. Use [`Filtered::try_new`] to validate untrusted input.
    pub fn new(x: f64) -> Self {
        assert!(x.is_finite(), "Filtered values must be finite, got {}", x);
        Self {
            interval: Interval::point(x),
            source: Source::Float(x),
            exact: OnceLock::new(),
        }
    }

    /// Checked version of [`Filtered::new`].
    pub fn try_new(x: f64) -> Result<Self, InputError> {
        if x.is_finite() {
            Ok(Self::new(x))
        } else {
            Err(InputError::NonFinite(x))
        }
    }

    /// The interval approximation.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The exact value, converted on first access and cached afterwards.
    pub fn exact(&self) -> &BigRational {
        self.exact.get_or_init(|| match self.source {
            Source::Float(x) => exact::from_f64(x),
            Source::Integer(i) => exact::from_i64(i),
            Source::Rational => unreachable!("rational inputs are cached at construction"),
        })
    }

    /// Whether the exact value has already been materialized.
    pub fn is_exact_cached(&self) -> bool {
        self.exact.get().is_some()
    }
}

impl From<f64> for Filtered {
    fn from(x: f64) -> Self {
        Self::new(x)
    }
}

impl From<i32> for Filtered {
    fn from(x: i32) -> Self {
        Self::from(x as i64)
    }
}

impl From<i64> for Filtered {
    fn from(x: i64) -> Self {
        Self {
            interval: Interval::from(x),
            source: Source::Integer(x),
            exact: OnceLock::new(),
        }
    }
}

impl From<BigRational> for Filtered {
    fn from(r: BigRational) -> Self {
        Self {
            interval: exact::to_interval(&r),
            source: Source::Rational,
            exact: OnceLock::from(r),
        }
    }
}

impl From<BigInt> for Filtered {
    fn from(n: BigInt) -> Self {
        Self::from(BigRational::from_integer(n))
    }
}

impl Display for Filtered {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Source::Float(x) => write!(f, "{}", x),
            Source::Integer(i) => write!(f, "{}", i),
            Source::Rational => write!(f, "{}", self.exact()),
        }
    }
}
