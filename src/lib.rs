//! # filtered-predicates: Filtered exact geometric predicates
//!
//! **`filtered-predicates`** answers geometric decision questions (orientation, in-circle,
//! in-sphere, and the power tests behind regular triangulations) **correctly**, while paying
//! for exact arithmetic only when floating-point arithmetic cannot decide.
//!
//! ## How it works
//!
//! A predicate is a sign of a polynomial in the input coordinates. Every call runs in two phases:
//!
//! 1. **Fast phase.** The polynomial is evaluated in interval arithmetic with outward rounding.
//!    If the resulting interval lies strictly on one side of zero (or is exactly zero), the sign is known.
//! 2. **Exact phase.** Otherwise the *same* polynomial is evaluated over arbitrary-precision
//!    rationals. This phase always decides.
//!
//! The formula is written once, generically over [`Number`][crate::number::Number], so both
//! phases perform the same operation sequence and the interval is a valid enclosure of the exact result.
//! The exact value of each input is computed on first use and cached in the input itself.
//!
//! ## Basic Usage
//!
//! ```rust
//! use filtered_predicates::point::{Point2, WeightedPoint2};
//! use filtered_predicates::predicates;
//! use filtered_predicates::sign::{Orientation, OrientedSide};
//!
//! let p = Point2::new(0.0, 0.0);
//! let q = Point2::new(1.0, 0.0);
//! let r = Point2::new(1.0, 1.0);
//! assert_eq!(predicates::orientation_2d(&p, &q, &r), Orientation::CounterClockwise);
//!
//! // Exactly collinear, but 1e-20 is lost when subtracted from 1.0:
//! // intervals cannot decide, the exact phase can.
//! let a = Point2::new(1e-20, 1e-20);
//! let b = Point2::new(3.0, 3.0);
//! assert_eq!(predicates::orientation_2d(&a, &r, &b), Orientation::Collinear);
//!
//! // Weighted points: t sits on the power circle of p, q, r.
//! let p = WeightedPoint2::new(0.0, 0.0, 3.0);
//! let q = WeightedPoint2::new(2.0, 0.0, 3.0);
//! let r = WeightedPoint2::new(0.0, 2.0, 3.0);
//! let t = WeightedPoint2::new(1.0, 1.0, 1.0);
//! assert_eq!(predicates::power_test_2d(&p, &q, &r, &t), OrientedSide::OnBoundary);
//! ```
//!
//! ## Core Components
//!
//! - **[`rounding`]**: per-thread rounding mode, RAII [`RoundingGuard`][crate::rounding::RoundingGuard],
//!   software directed rounding.
//! - **[`interval`]**: the [`Interval`][crate::interval::Interval] type and the [`Undecided`][crate::interval::Undecided] signal.
//! - **[`exact`]**: exact rationals and conversions.
//! - **[`filtered`]**: [`Filtered`][crate::filtered::Filtered] coordinates with a lazily cached exact value.
//! - **[`formulas`]**: predicate polynomials, generic over the number backend.
//! - **[`filter`]**: the two-phase [`Filter`][crate::filter::Filter] evaluator.
//! - **[`predicates`]**: free functions over a per-thread default filter.
//!
//! ## Rounding
//!
//! No hardware rounding mode is ever changed. Directed rounding is emulated in software with
//! error-free transformations, so the rounding mode is an ordinary per-thread value that the
//! fast phase sets to upward and restores on every exit path (including unwinding).

pub mod error;
pub mod exact;
pub mod filter;
pub mod filtered;
pub mod formulas;
pub mod interval;
pub mod number;
pub mod point;
pub mod predicate;
pub mod predicates;
pub mod rounding;
pub mod sign;
