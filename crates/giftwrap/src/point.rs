//! Points, validated point sets and the wrapping preconditions.
//!
//! - `Point`: integer pair, structural equality, immutable.
//! - `PointSet`: ordered, possibly with duplicates, count and coordinates
//!   checked by `validate`.
//!
//! The wrapper itself accepts any slice (`compute_hull_trace(&[Point])`) and
//! degrades to trivial traces for fewer than three points; `validate` is the
//! optional gate the input layer calls first.

use std::fmt;
use std::ops::Deref;

use nalgebra::Vector2;
use thiserror::Error;

/// Smallest accepted coordinate (inclusive).
pub const COORD_MIN: i32 = -50;
/// Largest accepted coordinate (inclusive).
pub const COORD_MAX: i32 = 50;
/// Fewest points a `PointSet` may hold.
pub const MIN_POINTS: usize = 1;
/// Most points a `PointSet` may hold.
pub const MAX_POINTS: usize = 20;

/// Planar point with integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widened coordinates for exact cross/dot products.
    #[inline]
    pub(crate) fn to_vec(self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }

    #[inline]
    pub fn in_bounds(&self) -> bool {
        (COORD_MIN..=COORD_MAX).contains(&self.x) && (COORD_MIN..=COORD_MAX).contains(&self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Why a point sequence was rejected by `validate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("at least one point is required")]
    InsufficientPoints,

    #[error("{count} points given, at most {max} are accepted")]
    TooManyPoints { count: usize, max: usize },

    #[error("point {index} = {point} lies outside [{}, {}]", COORD_MIN, COORD_MAX)]
    CoordinateOutOfRange { index: usize, point: Point },
}

/// Ordered, immutable sequence of points accepted for wrapping.
///
/// Duplicates are kept as given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wrap points without checking count or bounds.
    ///
    /// For producers that enforce the bounds themselves and for stress inputs
    /// larger than `MAX_POINTS`.
    pub fn new_unchecked(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl Deref for PointSet {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl AsRef<[Point]> for PointSet {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Check count (`MIN_POINTS..=MAX_POINTS`) and coordinate bounds.
///
/// Does not deduplicate. One or two points are accepted: the wrapper turns
/// them into degenerate traces rather than failing.
pub fn validate(points: &[Point]) -> Result<PointSet, PreconditionError> {
    if points.len() < MIN_POINTS {
        return Err(PreconditionError::InsufficientPoints);
    }
    if points.len() > MAX_POINTS {
        return Err(PreconditionError::TooManyPoints {
            count: points.len(),
            max: MAX_POINTS,
        });
    }
    if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !p.in_bounds()) {
        return Err(PreconditionError::CoordinateOutOfRange {
            index,
            point: *point,
        });
    }
    Ok(PointSet::new_unchecked(points.to_vec()))
}
