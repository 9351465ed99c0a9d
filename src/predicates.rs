//! Free-standing predicates.
//!
//! Shortcuts over a per-thread [`Filter`] with the default configuration. Use a
//! [`Filter`] directly to pick a different [`Strategy`][crate::filter::Strategy]
//! or to keep separate statistics.

use std::cmp::Ordering;

use crate::filter::{Filter, FilterStats};
use crate::filtered::Filtered;
use crate::point::{Point2, Point3, WeightedPoint2, WeightedPoint3};
use crate::sign::{Orientation, Orientation3, OrientedSide};

thread_local! {
    static FILTER: Filter = Filter::default();
}

/// Statistics of the current thread's default filter.
pub fn stats() -> FilterStats {
    FILTER.with(Filter::stats)
}

pub fn reset_stats() {
    FILTER.with(Filter::reset_stats)
}

pub fn orientation_2d(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    FILTER.with(|f| f.orientation_2d(p, q, r))
}

pub fn orientation_3d(p: &Point3, q: &Point3, r: &Point3, s: &Point3) -> Orientation3 {
    FILTER.with(|f| f.orientation_3d(p, q, r, s))
}

pub fn side_of_oriented_circle(p: &Point2, q: &Point2, r: &Point2, t: &Point2) -> OrientedSide {
    FILTER.with(|f| f.side_of_oriented_circle(p, q, r, t))
}

pub fn side_of_oriented_sphere(
    p: &Point3,
    q: &Point3,
    r: &Point3,
    s: &Point3,
    t: &Point3,
) -> OrientedSide {
    FILTER.with(|f| f.side_of_oriented_sphere(p, q, r, s, t))
}

/// Side of weighted point `t` with respect to the power circle of `p, q, r`.
///
/// [`OrientedSide::Positive`] means `t` is in conflict with the triangle
/// (it would remove it from a regular triangulation).
pub fn power_test_2d(
    p: &WeightedPoint2,
    q: &WeightedPoint2,
    r: &WeightedPoint2,
    t: &WeightedPoint2,
) -> OrientedSide {
    FILTER.with(|f| f.power_test_2d(p, q, r, t))
}

pub fn power_test_2d_degenerate(
    p: &WeightedPoint2,
    q: &WeightedPoint2,
    t: &WeightedPoint2,
) -> OrientedSide {
    FILTER.with(|f| f.power_test_2d_degenerate(p, q, t))
}

pub fn power_test_3d(
    p: &WeightedPoint3,
    q: &WeightedPoint3,
    r: &WeightedPoint3,
    s: &WeightedPoint3,
    t: &WeightedPoint3,
) -> OrientedSide {
    FILTER.with(|f| f.power_test_3d(p, q, r, s, t))
}

pub fn compare(a: &Filtered, b: &Filtered) -> Ordering {
    FILTER.with(|f| f.compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_stats_are_per_thread() {
        reset_stats();
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(1.0, 0.0);
        let r = Point2::new(0.0, 1.0);
        assert_eq!(orientation_2d(&p, &q, &r), Orientation::CounterClockwise);
        assert_eq!(stats().calls, 1);
        std::thread::spawn(|| assert_eq!(stats().calls, 0))
            .join()
            .unwrap();
        reset_stats();
        assert_eq!(stats(), FilterStats::default());
    }

    #[test]
    fn test_free_functions() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(2.0, 0.0);
        let r = Point2::new(0.0, 2.0);
        let t = Point2::new(2.0, 2.0);
        assert_eq!(side_of_oriented_circle(&p, &q, &r, &t), OrientedSide::OnBoundary);
        assert_eq!(compare(&Filtered::new(-1.0), &Filtered::from(0)), Ordering::Less);

        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        let z = Point3::new(0.0, 0.0, 1.0);
        assert_eq!(orientation_3d(&o, &x, &y, &z), Orientation3::Positive);
        assert_eq!(orientation_3d(&o, &x, &y, &Point3::new(1.0, 1.0, 0.0)), Orientation3::Coplanar);
        let far = Point3::new(0.0, 0.0, -3.0);
        assert_eq!(side_of_oriented_sphere(&o, &x, &y, &z, &far), OrientedSide::Negative);
    }

    #[test]
    fn test_power_tests() {
        let w = |x, y, w| WeightedPoint2::new(x, y, w);
        let (p, q, r) = (w(0.0, 0.0, 3.0), w(2.0, 0.0, 3.0), w(0.0, 2.0, 3.0));
        assert_eq!(power_test_2d(&p, &q, &r, &w(1.0, 1.0, 1.0)), OrientedSide::OnBoundary);
        assert_eq!(power_test_2d(&p, &q, &r, &w(1.0, 1.0, 2.0)), OrientedSide::Positive);
        assert_eq!(power_test_2d(&p, &q, &r, &w(1.0, 1.0, 0.0)), OrientedSide::Negative);

        let (a, b) = (w(0.0, 0.0, 0.0), w(0.0, 2.0, 0.0));
        assert_eq!(power_test_2d_degenerate(&a, &b, &w(0.0, 1.0, 0.0)), OrientedSide::Positive);
        assert_eq!(power_test_2d_degenerate(&a, &b, &w(0.0, 5.0, 0.0)), OrientedSide::Negative);

        let w3 = |x, y, z, w| WeightedPoint3::new(x, y, z, w);
        let (p, q, r, s) = (
            w3(0.0, 0.0, 0.0, 0.0),
            w3(1.0, 0.0, 0.0, 0.0),
            w3(0.0, 1.0, 0.0, 0.0),
            w3(0.0, 0.0, 1.0, 0.0),
        );
        assert_eq!(power_test_3d(&p, &q, &r, &s, &w3(1.0, 1.0, 0.0, 0.0)), OrientedSide::OnBoundary);
        assert_eq!(power_test_3d(&p, &q, &r, &s, &w3(1.0, 1.0, 0.0, 0.5)), OrientedSide::Positive);
    }
}
