//! Two-phase filtered evaluation.
//!
//! Every predicate call goes through [`Filter::eval`]:
//!
//! 1. **Fast phase.** Upward rounding is entered with a [`RoundingGuard`], the
//!    interval of every argument is read, and the predicate formula is evaluated
//!    in interval arithmetic. The guard is dropped before anything else happens.
//! 2. **Exact phase.** Only if the fast phase returned [`Undecided`]: the exact
//!    value of every argument is read (converted lazily and cached in the
//!    [`Filtered`] value) and the *same* formula is evaluated over rationals. This
//!    phase cannot be undecided; its result is final.
//!
//! ```text
//! Start -> Fast -> Decided
//!              \-> Undecided -> Exact -> Decided
//! ```
//!
//! Callers never see the undecided state: every method returns a symbolic outcome.
//!
//! ```
//! use filtered_predicates::filter::Filter;
//! use filtered_predicates::point::Point2;
//! use filtered_predicates::sign::Orientation;
//!
//! let filter = Filter::default();
//! let p = Point2::new(0.0, 0.0);
//! let q = Point2::new(1.0, 0.0);
//! let r = Point2::new(1.0, 1.0);
//! assert_eq!(filter.orientation_2d(&p, &q, &r), Orientation::CounterClockwise);
//! assert_eq!(filter.stats().fallbacks, 0);
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

use log::{debug, trace};

use crate::filtered::Filtered;
use crate::interval::Undecided;
use crate::point::{Point2, Point3, WeightedPoint2, WeightedPoint3};
use crate::predicate::{
    Compare, InCircle, InSphere, Orient2, Orient3, PowerTest2, PowerTest2Degenerate, PowerTest3,
    Predicate,
};
use crate::rounding::RoundingGuard;
use crate::sign::{Orientation, Orientation3, OrientedSide};

/// How predicates are evaluated.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Interval phase first, exact phase only when undecided.
    #[default]
    Filtered,
    /// Skip the interval phase.
    ExactOnly,
}

/// Configuration of a [`Filter`].
///
/// # Examples
///
/// ```
/// use filtered_predicates::filter::{Filter, FilterConfig, Strategy};
///
/// let filter = Filter::new(FilterConfig {
///     strategy: Strategy::ExactOnly,
///     ..FilterConfig::default()
/// });
/// assert_eq!(filter.config().strategy, Strategy::ExactOnly);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Evaluation strategy (default: [`Strategy::Filtered`]).
    pub strategy: Strategy,
    /// Re-run the exact phase after every decided fast phase and panic on
    /// disagreement (default: `false`).
    pub verify: bool,
}

/// Counters of a [`Filter`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FilterStats {
    /// Predicate calls.
    pub calls: usize,
    /// Calls decided by the interval phase.
    pub fast_decided: usize,
    /// Calls that fell back to exact arithmetic after an undecided interval phase.
    pub fallbacks: usize,
}

impl Display for FilterStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "calls: {}, fast: {}, fallbacks: {}",
            self.calls, self.fast_decided, self.fallbacks
        )
    }
}

/// State of a single predicate evaluation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Start,
    Fast,
    Undecided,
    Exact,
    Decided,
}

fn enter(name: &str, from: Phase, to: Phase) -> Phase {
    trace!("{}: {:?} -> {:?}", name, from, to);
    to
}

/// Predicate evaluator.
///
/// Statistics are kept in [`Cell`]s, so a `Filter` is meant to be owned by one
/// thread; create one filter per thread for parallel workloads.
#[derive(Default)]
pub struct Filter {
    config: FilterConfig,
    calls: Cell<usize>,
    fast_decided: Cell<usize>,
    fallbacks: Cell<usize>,
}

impl Debug for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl Filter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn stats(&self) -> FilterStats {
        FilterStats {
            calls: self.calls.get(),
            fast_decided: self.fast_decided.get(),
            fallbacks: self.fallbacks.get(),
        }
    }

    pub fn reset_stats(&self) {
        self.calls.set(0);
        self.fast_decided.set(0);
        self.fallbacks.set(0);
    }

    /// Interval phase alone, under upward rounding.
    ///
    /// The caller's rounding mode is restored before returning.
    pub fn fast<P: Predicate<N>, const N: usize>(
        args: [&Filtered; N],
    ) -> Result<P::Outcome, Undecided> {
        let _guard = RoundingGuard::upward();
        let intervals = args.map(Filtered::interval);
        P::apply(intervals.each_ref())
    }

    /// Exact phase alone. Always decides.
    pub fn exact<P: Predicate<N>, const N: usize>(args: [&Filtered; N]) -> P::Outcome {
        let values = args.map(Filtered::exact);
        match P::apply(values) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Evaluates predicate `P` on `args` with the configured strategy.
    pub fn eval<P: Predicate<N>, const N: usize>(&self, args: [&Filtered; N]) -> P::Outcome {
        bump(&self.calls);
        let mut phase = Phase::Start;

        if self.config.strategy == Strategy::Filtered {
            phase = enter(P::NAME, phase, Phase::Fast);
            match Self::fast::<P, N>(args) {
                Ok(outcome) => {
                    enter(P::NAME, phase, Phase::Decided);
                    bump(&self.fast_decided);
                    if self.config.verify {
                        let exact = Self::exact::<P, N>(args);
                        assert_eq!(
                            outcome,
                            exact,
                            "{}: interval phase disagrees with exact phase",
                            P::NAME
                        );
                    }
                    return outcome;
                }
                Err(Undecided) => {
                    phase = enter(P::NAME, phase, Phase::Undecided);
                    bump(&self.fallbacks);
                    debug!("{}: interval phase undecided, falling back to exact arithmetic", P::NAME);
                }
            }
        }

        phase = enter(P::NAME, phase, Phase::Exact);
        let outcome = Self::exact::<P, N>(args);
        enter(P::NAME, phase, Phase::Decided);
        outcome
    }

    pub fn orientation_2d(&self, p: &Point2, q: &Point2, r: &Point2) -> Orientation {
        self.eval::<Orient2, 6>([&p.x, &p.y, &q.x, &q.y, &r.x, &r.y])
    }

    pub fn orientation_3d(&self, p: &Point3, q: &Point3, r: &Point3, s: &Point3) -> Orientation3 {
        self.eval::<Orient3, 12>([
            &p.x, &p.y, &p.z, &q.x, &q.y, &q.z, &r.x, &r.y, &r.z, &s.x, &s.y, &s.z,
        ])
    }

    /// Positive when `t` lies inside the circle through counterclockwise `p, q, r`.
    pub fn side_of_oriented_circle(
        &self,
        p: &Point2,
        q: &Point2,
        r: &Point2,
        t: &Point2,
    ) -> OrientedSide {
        self.eval::<InCircle, 8>([&p.x, &p.y, &q.x, &q.y, &r.x, &r.y, &t.x, &t.y])
    }

    /// Positive when `t` lies inside the sphere through positively oriented `p, q, r, s`.
    pub fn side_of_oriented_sphere(
        &self,
        p: &Point3,
        q: &Point3,
        r: &Point3,
        s: &Point3,
        t: &Point3,
    ) -> OrientedSide {
        self.eval::<InSphere, 15>([
            &p.x, &p.y, &p.z, &q.x, &q.y, &q.z, &r.x, &r.y, &r.z, &s.x, &s.y, &s.z, &t.x, &t.y,
            &t.z,
        ])
    }

    /// Power test of `t` against the power circle of `p, q, r`.
    pub fn power_test_2d(
        &self,
        p: &WeightedPoint2,
        q: &WeightedPoint2,
        r: &WeightedPoint2,
        t: &WeightedPoint2,
    ) -> OrientedSide {
        let (p, pw) = (&p.point, &p.weight);
        let (q, qw) = (&q.point, &q.weight);
        let (r, rw) = (&r.point, &r.weight);
        let (t, tw) = (&t.point, &t.weight);
        self.eval::<PowerTest2, 12>([
            &p.x, &p.y, pw, &q.x, &q.y, qw, &r.x, &r.y, rw, &t.x, &t.y, tw,
        ])
    }

    /// Power test of `t` against the smallest circle orthogonal to `p` and `q`.
    ///
    /// Meant for collinear `p, q, t`.
    pub fn power_test_2d_degenerate(
        &self,
        p: &WeightedPoint2,
        q: &WeightedPoint2,
        t: &WeightedPoint2,
    ) -> OrientedSide {
        let (p, pw) = (&p.point, &p.weight);
        let (q, qw) = (&q.point, &q.weight);
        let (t, tw) = (&t.point, &t.weight);
        self.eval::<PowerTest2Degenerate, 9>([&p.x, &p.y, pw, &q.x, &q.y, qw, &t.x, &t.y, tw])
    }

    /// Power test of `t` against the power sphere of `p, q, r, s`.
    pub fn power_test_3d(
        &self,
        p: &WeightedPoint3,
        q: &WeightedPoint3,
        r: &WeightedPoint3,
        s: &WeightedPoint3,
        t: &WeightedPoint3,
    ) -> OrientedSide {
        let (p, pw) = (&p.point, &p.weight);
        let (q, qw) = (&q.point, &q.weight);
        let (r, rw) = (&r.point, &r.weight);
        let (s, sw) = (&s.point, &s.weight);
        let (t, tw) = (&t.point, &t.weight);
        self.eval::<PowerTest3, 20>([
            &p.x, &p.y, &p.z, pw, &q.x, &q.y, &q.z, qw, &r.x, &r.y, &r.z, rw, &s.x, &s.y, &s.z,
            sw, &t.x, &t.y, &t.z, tw,
        ])
    }

    pub fn compare(&self, a: &Filtered, b: &Filtered) -> Ordering {
        self.eval::<Compare, 2>([a, b])
    }
}
