//! Hull wrapper: leftmost seed, wrapping loop, trace types.
//!
//! Purpose
//! - Produce the ordered decision trace of a Jarvis march, not just the hull.
//! - Total over all slices: degenerate inputs yield trivial traces, never errors.
//!
//! Layout
//! - `march`: `leftmost_index`, `HullSteps` (lazy), `compute_hull_trace`.
//! - `types`: `Step`, `Trace`.

mod march;
mod types;

pub use march::{compute_hull_trace, leftmost_index, HullSteps};
pub use types::{Step, Trace};
