//! Entry points for collaborators (input layer, renderer, results view).
//!
//! - `validate`: input layer, before wrapping.
//! - `compute_hull_trace`: the computation; total and deterministic.
//! - `classify_shape`: results view.
//!
//! `wrap_validated` chains the first two for callers holding raw points.

pub use crate::orient::{orientation, Orientation};
pub use crate::playback::{Frame, Playback, PROBE_DELAY, STEP_DELAY};
pub use crate::point::{
    validate, Point, PointSet, PreconditionError, COORD_MAX, COORD_MIN, MAX_POINTS, MIN_POINTS,
};
pub use crate::rand::{random_points, PointCount, RandomCfg, ReplayToken};
pub use crate::shape::{classify_shape, HullShape};
pub use crate::wrap::{compute_hull_trace, leftmost_index, HullSteps, Step, Trace};

/// Validate `points`, then wrap them.
pub fn wrap_validated(points: &[Point]) -> Result<(PointSet, Trace), PreconditionError> {
    let set = validate(points)?;
    let trace = compute_hull_trace(&set);
    Ok((set, trace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected_before_wrapping() {
        assert_eq!(
            wrap_validated(&[]).unwrap_err(),
            PreconditionError::InsufficientPoints
        );
    }

    #[test]
    fn validated_square_wraps() {
        let raw = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        let (set, trace) = wrap_validated(&raw).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(trace.len(), 4);
        assert_eq!(classify_shape(trace.len()), "quadrilateral");
    }

    #[test]
    fn random_sets_wrap_deterministically() {
        let tok = ReplayToken { seed: 9, index: 0 };
        let set = random_points(RandomCfg::uniform_count(), tok);
        let (_, a) = wrap_validated(&set).unwrap();
        let b = compute_hull_trace(&random_points(RandomCfg::uniform_count(), tok));
        assert_eq!(a, b);
    }
}
