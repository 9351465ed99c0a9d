//! Rounding-mode control.
//!
//! Interval arithmetic needs every upper bound rounded toward `+inf`. Instead of
//! reprogramming the floating-point control register (which the compiler is free
//! to ignore), the rounding direction is kept as a per-thread state and the
//! directed operations in this module honour it in software: each operation is
//! computed in round-to-nearest and then corrected by the sign of its exact
//! rounding error.
//!
//! The mode is changed through [`set_upward`]/[`restore`], or, preferably,
//! through the scoped [`RoundingGuard`] which restores the saved mode on every
//! exit path.
//!
//! ```
//! use filtered_predicates::rounding::{self, RoundingGuard, RoundingMode};
//!
//! assert_eq!(rounding::current(), RoundingMode::ToNearest);
//! {
//!     let _guard = RoundingGuard::upward();
//!     assert_eq!(rounding::current(), RoundingMode::Upward);
//!     assert!(rounding::add(0.1, 0.2) >= 0.1 + 0.2);
//! }
//! assert_eq!(rounding::current(), RoundingMode::ToNearest);
//! ```

use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// Direction in which inexact results are rounded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    /// IEEE 754 default: round to nearest, ties to even.
    #[default]
    ToNearest,
    /// Round toward `+inf`.
    Upward,
    /// Round toward `-inf`.
    Downward,
    /// Round toward zero (truncate).
    TowardZero,
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundingMode::ToNearest => "nearest",
            RoundingMode::Upward => "upward",
            RoundingMode::Downward => "downward",
            RoundingMode::TowardZero => "toward-zero",
        };
        write!(f, "{}", name)
    }
}

thread_local! {
    static MODE: Cell<RoundingMode> = const { Cell::new(RoundingMode::ToNearest) };
}

/// Opaque saved rounding mode, returned by [`set`] and [`set_upward`].
#[must_use = "the saved mode must be passed back to `restore`"]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RoundingToken(RoundingMode);

impl RoundingToken {
    /// The mode that was active when this token was created.
    pub fn mode(self) -> RoundingMode {
        self.0
    }
}

/// Returns the rounding mode of the calling thread.
pub fn current() -> RoundingMode {
    MODE.with(|m| m.get())
}

/// Sets the rounding mode of the calling thread, returning the previous one.
pub fn set(mode: RoundingMode) -> RoundingToken {
    RoundingToken(MODE.with(|m| m.replace(mode)))
}

/// Switches to [`RoundingMode::Upward`], returning the previous mode.
pub fn set_upward() -> RoundingToken {
    set(RoundingMode::Upward)
}

/// Unconditionally restores the mode saved in `token`.
pub fn restore(token: RoundingToken) {
    MODE.with(|m| m.set(token.0));
}

/// Scoped rounding mode: sets a mode on creation, restores the previous one on drop.
///
/// The guard is tied to the thread whose mode it changed, so it is neither
/// `Send` nor `Sync`.
#[derive(Debug)]
pub struct RoundingGuard {
    saved: RoundingToken,
    _not_send: PhantomData<*const ()>,
}

impl RoundingGuard {
    pub fn new(mode: RoundingMode) -> Self {
        Self {
            saved: set(mode),
            _not_send: PhantomData,
        }
    }

    /// Enters [`RoundingMode::Upward`] for the lifetime of the guard.
    pub fn upward() -> Self {
        Self::new(RoundingMode::Upward)
    }

    /// The mode that will be restored on drop.
    pub fn saved(&self) -> RoundingMode {
        self.saved.mode()
    }
}

impl Drop for RoundingGuard {
    fn drop(&mut self) {
        restore(self.saved);
    }
}

/// Smallest magnitude above which the `fma` residual of a product is exact.
///
/// Equals `2^-969 = f64::MIN_POSITIVE * 2^53`.
const EXACT_PRODUCT_THRESHOLD: f64 = f64::MIN_POSITIVE * 9007199254740992.0;

/// The least `f64` strictly greater than `x`.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// The greatest `f64` strictly less than `x`.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// Error term of `s = a + b` (Knuth's TwoSum): `a + b == s + err` exactly.
fn two_sum_err(a: f64, b: f64, s: f64) -> f64 {
    let bb = s - a;
    (a - (s - bb)) + (b - bb)
}

/// Upward fix-up of a round-to-nearest result that overflowed.
fn overflow_up(r: f64, a: f64, b: f64) -> f64 {
    if r == f64::NEG_INFINITY && a.is_finite() && b.is_finite() {
        -f64::MAX
    } else {
        r
    }
}

/// `a + b` rounded toward `+inf`, whatever the current mode.
pub fn add_up(a: f64, b: f64) -> f64 {
    let s = a + b;
    if !s.is_finite() {
        return overflow_up(s, a, b);
    }
    if two_sum_err(a, b, s) > 0.0 {
        next_up(s)
    } else {
        s
    }
}

/// `a * b` rounded toward `+inf`, whatever the current mode.
pub fn mul_up(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    let p = a * b;
    if !p.is_finite() {
        return overflow_up(p, a, b);
    }
    if p.abs() < EXACT_PRODUCT_THRESHOLD {
        // Residual may be rounded itself; step outward unconditionally.
        return next_up(p);
    }
    if a.mul_add(b, -p) > 0.0 {
        next_up(p)
    } else {
        p
    }
}

/// `a + b` rounded toward `-inf`.
pub fn add_down(a: f64, b: f64) -> f64 {
    -add_up(-a, -b)
}

/// `a * b` rounded toward `-inf`.
pub fn mul_down(a: f64, b: f64) -> f64 {
    -mul_up(-a, b)
}

/// `a + b` rounded in the current mode.
pub fn add(a: f64, b: f64) -> f64 {
    match current() {
        RoundingMode::ToNearest => a + b,
        RoundingMode::Upward => add_up(a, b),
        RoundingMode::Downward => add_down(a, b),
        RoundingMode::TowardZero => {
            let s = a + b;
            if s > 0.0 {
                add_down(a, b)
            } else if s < 0.0 {
                add_up(a, b)
            } else {
                s
            }
        }
    }
}

/// `a - b` rounded in the current mode.
pub fn sub(a: f64, b: f64) -> f64 {
    add(a, -b)
}

/// `a * b` rounded in the current mode.
pub fn mul(a: f64, b: f64) -> f64 {
    match current() {
        RoundingMode::ToNearest => a * b,
        RoundingMode::Upward => mul_up(a, b),
        RoundingMode::Downward => mul_down(a, b),
        RoundingMode::TowardZero => {
            let p = a * b;
            if p > 0.0 {
                mul_down(a, b)
            } else if p < 0.0 {
                mul_up(a, b)
            } else {
                // Underflow to zero: truncation gives zero as well.
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_default_mode() {
        assert_eq!(current(), RoundingMode::ToNearest);
    }

    #[test]
    fn test_set_and_restore() {
        let token = set_upward();
        assert_eq!(token.mode(), RoundingMode::ToNearest);
        assert_eq!(current(), RoundingMode::Upward);

        let inner = set(RoundingMode::Downward);
        assert_eq!(inner.mode(), RoundingMode::Upward);
        restore(inner);
        assert_eq!(current(), RoundingMode::Upward);

        restore(token);
        assert_eq!(current(), RoundingMode::ToNearest);
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let token = set(RoundingMode::TowardZero);
        {
            let guard = RoundingGuard::upward();
            assert_eq!(guard.saved(), RoundingMode::TowardZero);
            assert_eq!(current(), RoundingMode::Upward);
        }
        assert_eq!(current(), RoundingMode::TowardZero);
        restore(token);
    }

    #[test]
    fn test_guard_restores_on_unwind() {
        let result = std::panic::catch_unwind(|| {
            let _guard = RoundingGuard::upward();
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(current(), RoundingMode::ToNearest);
    }

    #[test]
    fn test_mode_is_per_thread() {
        let _guard = RoundingGuard::upward();
        let other = std::thread::spawn(current).join().unwrap();
        assert_eq!(other, RoundingMode::ToNearest);
        assert_eq!(current(), RoundingMode::Upward);
    }

    #[test]
    fn test_next_up_down() {
        assert_eq!(next_up(0.0), f64::from_bits(1));
        assert_eq!(next_up(-0.0), f64::from_bits(1));
        assert_eq!(next_down(0.0), -f64::from_bits(1));
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert_eq!(next_down(1.0), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
        assert_eq!(next_up(f64::NEG_INFINITY), -f64::MAX);
        assert_eq!(next_up(-f64::from_bits(1)), 0.0);
    }

    #[test]
    fn test_add_directed() {
        // 0.1 + 0.2 is inexact in binary.
        let up = add_up(0.1, 0.2);
        let down = add_down(0.1, 0.2);
        assert!(down < up);
        assert_eq!(next_up(down), up);

        // Exact sums are not widened.
        assert_eq!(add_up(1.0, 2.0), 3.0);
        assert_eq!(add_down(1.0, 2.0), 3.0);
    }

    #[test]
    fn test_mul_directed() {
        let up = mul_up(0.1, 0.1);
        let down = mul_down(0.1, 0.1);
        assert_eq!(next_up(down), up);
        assert_eq!(mul_up(3.0, 4.0), 12.0);
        assert_eq!(mul_down(-3.0, 4.0), -12.0);
    }

    #[test]
    fn test_mul_underflow_is_conservative() {
        let up = mul_up(1e-300, 1e-320);
        let down = mul_down(1e-300, 1e-320);
        assert!(up > 0.0);
        assert!(down <= 0.0);
        assert_eq!(mul_up(0.0, 1e-300), 0.0);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(add_up(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(add_up(-f64::MAX, -f64::MAX), -f64::MAX);
        assert_eq!(add_down(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(mul_up(-f64::MAX, 2.0), -f64::MAX);
        assert_eq!(mul_down(-f64::MAX, 2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mode_dispatch() {
        assert_eq!(add(0.1, 0.2), 0.1 + 0.2);

        let token = set_upward();
        assert_eq!(add(0.1, 0.2), add_up(0.1, 0.2));
        assert_eq!(mul(0.1, 0.1), mul_up(0.1, 0.1));
        assert_eq!(sub(0.1, -0.2), add_up(0.1, 0.2));
        restore(token);

        let token = set(RoundingMode::Downward);
        assert_eq!(add(0.1, 0.2), add_down(0.1, 0.2));
        restore(token);

        let token = set(RoundingMode::TowardZero);
        assert_eq!(add(0.1, 0.2), add_down(0.1, 0.2));
        assert_eq!(add(-0.1, -0.2), add_up(-0.1, -0.2));
        assert_eq!(mul(-0.1, 0.1), mul_up(-0.1, 0.1));
        restore(token);
    }
}
