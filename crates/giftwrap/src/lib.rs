//! Gift-wrapping (Jarvis march) convex hull with a replayable decision trace.
//!
//! The hull itself is a by-product: the point of this crate is the `Trace`,
//! one `Step` per accepted hull vertex listing every candidate examined on the
//! way. An animation layer walks that trace (see `playback`); a wrong trace
//! corrupts the animation even when the final polygon still looks right.
//!
//! Data flow
//! - validated points → leftmost index → wrapping loop (orientation tests)
//!   → ordered trace → shape label.
//! - Everything here is pure and synchronous. No I/O, no shared state.
//!
//! Orientation convention
//! - Mathematical axes (y up). See `orient` for the sign convention.

pub mod api;
pub mod orient;
pub mod playback;
pub mod point;
pub mod rand;
pub mod shape;
pub mod wrap;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use orient::{orientation, Orientation};
pub use point::{validate, Point, PointSet, PreconditionError};
pub use shape::{classify_shape, HullShape};
pub use wrap::{compute_hull_trace, leftmost_index, HullSteps, Step, Trace};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::playback::{Frame, Playback};
    pub use crate::point::{validate, Point, PointSet, PreconditionError};
    pub use crate::rand::{random_points, PointCount, RandomCfg, ReplayToken};
    pub use crate::shape::{classify_shape, HullShape};
    pub use crate::wrap::{compute_hull_trace, HullSteps, Step, Trace};
}
