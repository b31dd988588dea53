//! Jarvis march over a point slice, one `Step` per accepted hull vertex.
//!
//! Per step from current index `p`:
//! - start from candidate `q = (p + 1) mod n`;
//! - for every `i ≠ p` in input order: record `points[i]` as tried, then
//!   replace `q ← i` if `p → i → q` turns counter-clockwise, or if the three
//!   are collinear and `i` lies farther from `p` than `q`;
//! - emit the step and continue from `q` until the seed is reached again.
//!
//! The hull is traversed counter-clockwise (y up). Collinear points on an
//! edge are passed over, so each step lands on a strict corner.
//!
//! Termination
//! - Closes when the chosen index is the seed or a duplicate of the seed.
//! - Never emits more than `n` steps.

use tracing::{debug, warn};

use super::types::{Step, Trace};
use crate::orient::{dist2, orientation, Orientation};
use crate::point::Point;

/// Index of the leftmost point; ties go to the lowest index.
///
/// `None` for an empty slice.
pub fn leftmost_index(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| p.x)
        .map(|(i, _)| i)
}

/// Starting vertex for the wrap.
///
/// The leftmost point, unless it sits strictly inside a vertical left edge
/// (other leftmost points both above and below it). Such a point is on the
/// hull but is no corner, and the farthest-collinear rule would step over it
/// without ever closing. Then the lowest leftmost point (first occurrence)
/// seeds instead.
fn seed_index(points: &[Point]) -> Option<usize> {
    let first = leftmost_index(points)?;
    let (x0, y0) = (points[first].x, points[first].y);
    let left_edge = move || points.iter().enumerate().filter(move |(_, p)| p.x == x0);
    let below = left_edge().any(|(_, p)| p.y < y0);
    let above = left_edge().any(|(_, p)| p.y > y0);
    if below && above {
        left_edge().min_by_key(|(_, p)| p.y).map(|(i, _)| i)
    } else {
        Some(first)
    }
}

/// Lazy, restartable sequence of wrapping steps.
///
/// Seeded at `leftmost_index` (see `seed_index` for the one exception).
///
/// Borrows the points immutably; partial consumption leaves them untouched.
/// `reset` (or `clone` before iterating) replays from the seed.
///
/// Degenerate inputs:
/// - 0 or 1 point: no steps.
/// - 2 points: exactly one step, from the leftmost to the other.
/// - all points identical: one step pointing back to itself.
#[derive(Clone, Debug)]
pub struct HullSteps<'a> {
    points: &'a [Point],
    seed: usize,
    current: usize,
    emitted: usize,
    closed: bool,
}

impl<'a> HullSteps<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        let seed = seed_index(points).unwrap_or(0);
        Self {
            points,
            seed,
            current: seed,
            emitted: 0,
            closed: points.len() < 2,
        }
    }

    /// Index of the starting point.
    #[inline]
    pub fn seed(&self) -> usize {
        self.seed
    }

    /// True once the wrap has returned to the seed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Rewind to the seed.
    pub fn reset(&mut self) {
        *self = Self::new(self.points);
    }

    /// Examine all candidates from `p`; returns the step and the chosen index.
    fn wrap_from(&self, p: usize) -> (Step, usize) {
        let pts = self.points;
        let n = pts.len();
        let cur = pts[p];
        let mut q = (p + 1) % n;
        let mut tried = Vec::with_capacity(n - 1);
        let mut collinear: Vec<usize> = Vec::new();

        for (i, &cand) in pts.iter().enumerate() {
            if i == p {
                continue;
            }
            tried.push(cand);
            if i == q {
                continue;
            }
            match orientation(cur, cand, pts[q]) {
                Orientation::CounterClockwise => {
                    // New ray; whatever lay on the old one is irrelevant.
                    q = i;
                    collinear.clear();
                }
                Orientation::Collinear => {
                    // A replaced candidate is met again later in the scan;
                    // record each index once.
                    let passed = if dist2(cur, cand) > dist2(cur, pts[q]) {
                        std::mem::replace(&mut q, i)
                    } else {
                        i
                    };
                    if !collinear.contains(&passed) {
                        collinear.push(passed);
                    }
                }
                Orientation::Clockwise => {}
            }
        }

        let next = pts[q];
        let ray = next.to_vec() - cur.to_vec();
        let collinear: Vec<Point> = collinear
            .into_iter()
            .map(|k| pts[k])
            .filter(|c| *c != cur && *c != next && (c.to_vec() - cur.to_vec()).dot(&ray) > 0)
            .collect();

        let step = Step {
            current_point: cur,
            tried_points: tried,
            collinear_points: collinear,
            next_hull_point: next,
        };
        (step, q)
    }
}

impl Iterator for HullSteps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.closed {
            return None;
        }
        let n = self.points.len();
        let (step, q) = self.wrap_from(self.current);
        self.emitted += 1;
        debug!(
            step = self.emitted,
            current = %step.current_point,
            next = %step.next_hull_point,
            tried = step.tried_points.len(),
            collinear = step.collinear_points.len(),
            "hull step"
        );

        if q == self.seed || self.points[q] == self.points[self.seed] || n == 2 {
            self.closed = true;
            debug!(steps = self.emitted, "hull closed");
        } else if self.emitted >= n {
            warn!(steps = self.emitted, n, "step bound reached before closing");
            self.closed = true;
        } else {
            self.current = q;
        }
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.closed {
            (0, Some(0))
        } else {
            (1, Some(self.points.len() - self.emitted))
        }
    }
}

/// Full wrapping trace for `points`.
///
/// Total: never fails, deterministic, no shared state.
pub fn compute_hull_trace(points: &[Point]) -> Trace {
    HullSteps::new(points).collect()
}
