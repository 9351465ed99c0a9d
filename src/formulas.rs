//! Predicate formulas, written once for every [`Number`] backend.
//!
//! Each function here computes the sign of a polynomial in the input
//! coordinates. The filter instantiates the same function over intervals and
//! over exact rationals, so the two phases share one operation sequence.
//!
//! Weighted predicates use the power distance `|a - t|^2 - a.w + t.w`, which
//! reduces to the ordinary in-circle/in-sphere lift when all weights are zero.

use std::cmp::Ordering;

use crate::number::Number;
use crate::sign::{Orientation, Orientation3, OrientedSide, Sign};

/// `a00 * a11 - a01 * a10`.
pub fn det2<N: Number>(a00: &N, a01: &N, a10: &N, a11: &N) -> N {
    a00.clone() * a11.clone() - a01.clone() * a10.clone()
}

/// 3x3 determinant, expanded along the first column.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn det3<N: Number>(
    a00: &N, a01: &N, a02: &N,
    a10: &N, a11: &N, a12: &N,
    a20: &N, a21: &N, a22: &N,
) -> N {
    let m0 = det2(a11, a12, a21, a22);
    let m1 = det2(a01, a02, a21, a22);
    let m2 = det2(a01, a02, a11, a12);
    a00.clone() * m0 - a10.clone() * m1 + a20.clone() * m2
}

/// 4x4 determinant, expanded along the last column.
#[rustfmt::skip]
pub fn det4<N: Number>(m: [[&N; 4]; 4]) -> N {
    let minor = |skip: usize| {
        let [a, b, c] = match skip {
            0 => [1, 2, 3],
            1 => [0, 2, 3],
            2 => [0, 1, 3],
            _ => [0, 1, 2],
        };
        det3(
            m[a][0], m[a][1], m[a][2],
            m[b][0], m[b][1], m[b][2],
            m[c][0], m[c][1], m[c][2],
        )
    };
    // Cofactor signs along column 3: -, +, -, +.
    m[1][3].clone() * minor(1) - m[0][3].clone() * minor(0) + m[3][3].clone() * minor(3)
        - m[2][3].clone() * minor(2)
}

/// Orientation of `p, q, r`: sign of `det[q - p; r - p]`.
#[rustfmt::skip]
pub fn orientation_2d<N: Number>(
    px: &N, py: &N,
    qx: &N, qy: &N,
    rx: &N, ry: &N,
) -> Result<Orientation, N::Undecided> {
    let det = det2(
        &(qx.clone() - px.clone()),
        &(qy.clone() - py.clone()),
        &(rx.clone() - px.clone()),
        &(ry.clone() - py.clone()),
    );
    Ok(det.sign()?.into())
}

/// Orientation of `p, q, r, s`: sign of `det[q - p; r - p; s - p]`.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn orientation_3d<N: Number>(
    px: &N, py: &N, pz: &N,
    qx: &N, qy: &N, qz: &N,
    rx: &N, ry: &N, rz: &N,
    sx: &N, sy: &N, sz: &N,
) -> Result<Orientation3, N::Undecided> {
    let d = |a: &N, b: &N| a.clone() - b.clone();
    let det = det3(
        &d(qx, px), &d(qy, py), &d(qz, pz),
        &d(rx, px), &d(ry, py), &d(rz, pz),
        &d(sx, px), &d(sy, py), &d(sz, pz),
    );
    Ok(det.sign()?.into())
}

/// Lifted row `(a.x - t.x, a.y - t.y, |a - t|^2 - aw + tw)`.
fn lift_2d<N: Number>(ax: &N, ay: &N, aw: &N, tx: &N, ty: &N, tw: &N) -> [N; 3] {
    let dx = ax.clone() - tx.clone();
    let dy = ay.clone() - ty.clone();
    let dz = dx.square() + dy.square() - aw.clone() + tw.clone();
    [dx, dy, dz]
}

/// Lifted row `(a - t, |a - t|^2 - aw + tw)` in space.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
fn lift_3d<N: Number>(
    ax: &N, ay: &N, az: &N, aw: &N,
    tx: &N, ty: &N, tz: &N, tw: &N,
) -> [N; 4] {
    let dx = ax.clone() - tx.clone();
    let dy = ay.clone() - ty.clone();
    let dz = az.clone() - tz.clone();
    let dw = dx.square() + dy.square() + dz.square() - aw.clone() + tw.clone();
    [dx, dy, dz, dw]
}

/// Power test of weighted `t` against the power circle of weighted `p, q, r`.
///
/// Positive when `t` is in conflict with (inside) the circle of a counterclockwise
/// triangle `p, q, r`.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn power_test_2d<N: Number>(
    px: &N, py: &N, pw: &N,
    qx: &N, qy: &N, qw: &N,
    rx: &N, ry: &N, rw: &N,
    tx: &N, ty: &N, tw: &N,
) -> Result<OrientedSide, N::Undecided> {
    let [dpx, dpy, dpz] = lift_2d(px, py, pw, tx, ty, tw);
    let [dqx, dqy, dqz] = lift_2d(qx, qy, qw, tx, ty, tw);
    let [drx, dry, drz] = lift_2d(rx, ry, rw, tx, ty, tw);
    let det = det3(
        &dpx, &dpy, &dpz,
        &dqx, &dqy, &dqz,
        &drx, &dry, &drz,
    );
    Ok(det.sign()?.into())
}

/// Power test of weighted `t` against the smallest circle orthogonal to
/// weighted `p` and `q`, for collinear `p, q, t`.
///
/// Projects on the `x` axis when `p.x != q.x`, otherwise on the `y` axis.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn power_test_2d_degenerate<N: Number>(
    px: &N, py: &N, pw: &N,
    qx: &N, qy: &N, qw: &N,
    tx: &N, ty: &N, tw: &N,
) -> Result<OrientedSide, N::Undecided> {
    let [dpx, dpy, dpz] = lift_2d(px, py, pw, tx, ty, tw);
    let [dqx, dqy, dqz] = lift_2d(qx, qy, qw, tx, ty, tw);

    let cmp_x = px.compare(qx)?;
    if cmp_x != Ordering::Equal {
        let det = det2(&dpx, &dpz, &dqx, &dqz);
        return Ok((Sign::from(cmp_x) * det.sign()?).into());
    }

    let cmp_y = py.compare(qy)?;
    let det = det2(&dpy, &dpz, &dqy, &dqz);
    Ok((Sign::from(cmp_y) * det.sign()?).into())
}

/// Power test of weighted `t` against the power sphere of weighted `p, q, r, s`.
///
/// Rows are taken in the order `p, r, q, s`, so the inside of a positively
/// oriented tetrahedron is the positive side.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn power_test_3d<N: Number>(
    px: &N, py: &N, pz: &N, pw: &N,
    qx: &N, qy: &N, qz: &N, qw: &N,
    rx: &N, ry: &N, rz: &N, rw: &N,
    sx: &N, sy: &N, sz: &N, sw: &N,
    tx: &N, ty: &N, tz: &N, tw: &N,
) -> Result<OrientedSide, N::Undecided> {
    let p = lift_3d(px, py, pz, pw, tx, ty, tz, tw);
    let q = lift_3d(qx, qy, qz, qw, tx, ty, tz, tw);
    let r = lift_3d(rx, ry, rz, rw, tx, ty, tz, tw);
    let s = lift_3d(sx, sy, sz, sw, tx, ty, tz, tw);
    let det = det4([p.each_ref(), r.each_ref(), q.each_ref(), s.each_ref()]);
    Ok(det.sign()?.into())
}

/// In-circle test: [`power_test_2d`] with all weights zero.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn side_of_oriented_circle<N: Number>(
    px: &N, py: &N,
    qx: &N, qy: &N,
    rx: &N, ry: &N,
    tx: &N, ty: &N,
) -> Result<OrientedSide, N::Undecided> {
    let lift = |ax: &N, ay: &N| {
        let dx = ax.clone() - tx.clone();
        let dy = ay.clone() - ty.clone();
        let dz = dx.square() + dy.square();
        [dx, dy, dz]
    };
    let [dpx, dpy, dpz] = lift(px, py);
    let [dqx, dqy, dqz] = lift(qx, qy);
    let [drx, dry, drz] = lift(rx, ry);
    let det = det3(
        &dpx, &dpy, &dpz,
        &dqx, &dqy, &dqz,
        &drx, &dry, &drz,
    );
    Ok(det.sign()?.into())
}

/// In-sphere test: [`power_test_3d`] with all weights zero.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn side_of_oriented_sphere<N: Number>(
    px: &N, py: &N, pz: &N,
    qx: &N, qy: &N, qz: &N,
    rx: &N, ry: &N, rz: &N,
    sx: &N, sy: &N, sz: &N,
    tx: &N, ty: &N, tz: &N,
) -> Result<OrientedSide, N::Undecided> {
    let lift = |ax: &N, ay: &N, az: &N| {
        let dx = ax.clone() - tx.clone();
        let dy = ay.clone() - ty.clone();
        let dz = az.clone() - tz.clone();
        let dw = dx.square() + dy.square() + dz.square();
        [dx, dy, dz, dw]
    };
    let p = lift(px, py, pz);
    let q = lift(qx, qy, qz);
    let r = lift(rx, ry, rz);
    let s = lift(sx, sy, sz);
    let det = det4([p.each_ref(), r.each_ref(), q.each_ref(), s.each_ref()]);
    Ok(det.sign()?.into())
}

/// Three-way comparison of two numbers.
pub fn compare<N: Number>(a: &N, b: &N) -> Result<Ordering, N::Undecided> {
    a.compare(b)
}
