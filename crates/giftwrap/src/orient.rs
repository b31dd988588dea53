//! Turn direction of three ordered points.
//!
//! Sign convention (mathematical axes, y grows upward):
//! - `val = (q.y − p.y)(r.x − q.x) − (q.x − p.x)(r.y − q.y)`
//! - `val > 0` → `Clockwise`, `val < 0` → `CounterClockwise`, `0` → `Collinear`.
//!
//! On a y-down screen the same numbers describe the mirrored turn; renderers
//! flip y before drawing so that the names keep their meaning.
//!
//! Arithmetic is exact: coordinates are widened to `i64`, which cannot overflow
//! for |coordinate| ≤ 2^30 (validated inputs stay within ±50).

use crate::point::Point;

/// Turn formed by `p → q → r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify the turn `p → q → r`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let pq = q.to_vec() - p.to_vec();
    let qr = r.to_vec() - q.to_vec();
    // qr × pq == (q.y−p.y)(r.x−q.x) − (q.x−p.x)(r.y−q.y)
    let val = qr.perp(&pq);
    match val.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Squared Euclidean distance (exact).
#[inline]
pub fn dist2(a: Point, b: Point) -> i64 {
    let d = b.to_vec() - a.to_vec();
    d.dot(&d)
}
