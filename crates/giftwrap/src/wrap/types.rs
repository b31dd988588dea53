//! Trace records emitted by the wrapping loop.
//!
//! - `Step`: one accepted hull vertex plus every candidate examined from it.
//! - `Trace`: steps in traversal order, seeded at the leftmost point. The
//!   closing step (back to the seed) is the last element; nothing repeats.

use std::ops::Deref;

use crate::point::Point;
use crate::shape::{classify_shape, HullShape};

/// One wrapping decision.
///
/// Owns copies of every point it cites.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Step {
    /// Hull vertex this step advances from.
    pub current_point: Point,
    /// Every other input point, in examination (input) order.
    pub tried_points: Vec<Point>,
    /// Points strictly between `current_point` and `next_hull_point` on the
    /// chosen ray, in discovery order.
    pub collinear_points: Vec<Point>,
    /// Chosen successor.
    pub next_hull_point: Point,
}

impl Step {
    /// Hull edge `(current, next)` drawn by this step.
    #[inline]
    pub fn edge(&self) -> (Point, Point) {
        (self.current_point, self.next_hull_point)
    }
}

/// Ordered wrapping decisions, one per hull vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Distinct hull vertices in traversal order.
    ///
    /// Equals the `current_point` sequence for closed polygons; a single
    /// two-point step also contributes its far end.
    pub fn hull_vertices(&self) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::with_capacity(self.steps.len() + 1);
        for s in &self.steps {
            if !out.contains(&s.current_point) {
                out.push(s.current_point);
            }
        }
        if let Some(last) = self.steps.last() {
            if !out.contains(&last.next_hull_point) {
                out.push(last.next_hull_point);
            }
        }
        out
    }

    /// Shape of the hull (by distinct vertex count).
    pub fn shape(&self) -> HullShape {
        HullShape::from_vertex_count(self.hull_vertices().len())
    }

    /// Label of `shape()`.
    pub fn shape_label(&self) -> String {
        classify_shape(self.hull_vertices().len())
    }
}

impl From<Vec<Step>> for Trace {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl FromIterator<Step> for Trace {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Deref for Trace {
    type Target = [Step];

    #[inline]
    fn deref(&self) -> &[Step] {
        &self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
