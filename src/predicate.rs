//! Predicate descriptors.
//!
//! A [`Predicate`] names a formula from [`formulas`][crate::formulas] together
//! with its arity (the number of scalar coordinates it reads). The filter only
//! ever calls [`Predicate::apply`], once with interval arguments and, when that
//! is undecided, once more with exact arguments.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::formulas;
use crate::number::Number;
use crate::sign::{Orientation, Orientation3, OrientedSide};

/// A sign-based geometric predicate over `N` scalar coordinates.
pub trait Predicate<const N: usize> {
    /// Symbolic result of the predicate.
    type Outcome: Copy + Eq + Debug;

    /// Name used in log messages.
    const NAME: &'static str;

    /// Evaluates the predicate formula on any [`Number`] backend.
    fn apply<T: Number>(args: [&T; N]) -> Result<Self::Outcome, T::Undecided>;
}

/// Orientation of three points in the plane: `[px, py, qx, qy, rx, ry]`.
#[derive(Debug, Copy, Clone)]
pub struct Orient2;

impl Predicate<6> for Orient2 {
    type Outcome = Orientation;
    const NAME: &'static str = "orientation_2d";

    fn apply<T: Number>(args: [&T; 6]) -> Result<Orientation, T::Undecided> {
        let [px, py, qx, qy, rx, ry] = args;
        formulas::orientation_2d(px, py, qx, qy, rx, ry)
    }
}

/// Orientation of four points in space: `[p.xyz, q.xyz, r.xyz, s.xyz]`.
#[derive(Debug, Copy, Clone)]
pub struct Orient3;

impl Predicate<12> for Orient3 {
    type Outcome = Orientation3;
    const NAME: &'static str = "orientation_3d";

    fn apply<T: Number>(args: [&T; 12]) -> Result<Orientation3, T::Undecided> {
        let [px, py, pz, qx, qy, qz, rx, ry, rz, sx, sy, sz] = args;
        formulas::orientation_3d(px, py, pz, qx, qy, qz, rx, ry, rz, sx, sy, sz)
    }
}

/// Side of `t` with respect to the circle through `p, q, r`: `[p.xy, q.xy, r.xy, t.xy]`.
#[derive(Debug, Copy, Clone)]
pub struct InCircle;

impl Predicate<8> for InCircle {
    type Outcome = OrientedSide;
    const NAME: &'static str = "side_of_oriented_circle";

    fn apply<T: Number>(args: [&T; 8]) -> Result<OrientedSide, T::Undecided> {
        let [px, py, qx, qy, rx, ry, tx, ty] = args;
        formulas::side_of_oriented_circle(px, py, qx, qy, rx, ry, tx, ty)
    }
}

/// Side of `t` with respect to the sphere through `p, q, r, s`.
#[derive(Debug, Copy, Clone)]
pub struct InSphere;

impl Predicate<15> for InSphere {
    type Outcome = OrientedSide;
    const NAME: &'static str = "side_of_oriented_sphere";

    fn apply<T: Number>(args: [&T; 15]) -> Result<OrientedSide, T::Undecided> {
        let [px, py, pz, qx, qy, qz, rx, ry, rz, sx, sy, sz, tx, ty, tz] = args;
        formulas::side_of_oriented_sphere(px, py, pz, qx, qy, qz, rx, ry, rz, sx, sy, sz, tx, ty, tz)
    }
}

/// Power test of four weighted points: `[p.xyw, q.xyw, r.xyw, t.xyw]`.
#[derive(Debug, Copy, Clone)]
pub struct PowerTest2;

impl Predicate<12> for PowerTest2 {
    type Outcome = OrientedSide;
    const NAME: &'static str = "power_test_2d";

    fn apply<T: Number>(args: [&T; 12]) -> Result<OrientedSide, T::Undecided> {
        let [px, py, pw, qx, qy, qw, rx, ry, rw, tx, ty, tw] = args;
        formulas::power_test_2d(px, py, pw, qx, qy, qw, rx, ry, rw, tx, ty, tw)
    }
}

/// Power test of three collinear weighted points: `[p.xyw, q.xyw, t.xyw]`.
#[derive(Debug, Copy, Clone)]
pub struct PowerTest2Degenerate;

impl Predicate<9> for PowerTest2Degenerate {
    type Outcome = OrientedSide;
    const NAME: &'static str = "power_test_2d_degenerate";

    fn apply<T: Number>(args: [&T; 9]) -> Result<OrientedSide, T::Undecided> {
        let [px, py, pw, qx, qy, qw, tx, ty, tw] = args;
        formulas::power_test_2d_degenerate(px, py, pw, qx, qy, qw, tx, ty, tw)
    }
}

/// Power test of five weighted points in space.
#[derive(Debug, Copy, Clone)]
pub struct PowerTest3;

impl Predicate<20> for PowerTest3 {
    type Outcome = OrientedSide;
    const NAME: &'static str = "power_test_3d";

    fn apply<T: Number>(args: [&T; 20]) -> Result<OrientedSide, T::Undecided> {
        let [px, py, pz, pw, qx, qy, qz, qw, rx, ry, rz, rw, sx, sy, sz, sw, tx, ty, tz, tw] = args;
        formulas::power_test_3d(
            px, py, pz, pw, qx, qy, qz, qw, rx, ry, rz, rw, sx, sy, sz, sw, tx, ty, tz, tw,
        )
    }
}

/// Comparison of two scalars: `[a, b]`.
#[derive(Debug, Copy, Clone)]
pub struct Compare;

impl Predicate<2> for Compare {
    type Outcome = Ordering;
    const NAME: &'static str = "compare";

    fn apply<T: Number>(args: [&T; 2]) -> Result<Ordering, T::Undecided> {
        let [a, b] = args;
        formulas::compare(a, b)
    }
}
