//! Step-by-step replay of a finished trace.
//!
//! The animation consumer, kept outside the wrapper: it walks a materialized
//! `Trace` at its own pace and never feeds back into the computation.
//!
//! Frame order per step: `Enter` (no candidate highlighted), then one `Probe`
//! per tried point in examination order. After the last step: `Complete`.

use std::time::Duration;

use crate::point::Point;
use crate::wrap::{Step, Trace};

/// Suggested pause after each probe frame.
pub const PROBE_DELAY: Duration = Duration::from_millis(50);
/// Suggested pause before entering the next step.
pub const STEP_DELAY: Duration = Duration::from_millis(500);

/// One animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Step `step` begins; hull drawn up to its `current_point`.
    Enter { step: usize },
    /// Candidate `tried` of step `step` is being examined.
    Probe { step: usize, tried: usize },
    /// Every step has been shown; the hull is closed.
    Complete,
}

impl Frame {
    /// Pause a consumer should hold after showing this frame.
    pub fn delay(&self) -> Duration {
        match self {
            Frame::Enter { .. } | Frame::Probe { .. } => PROBE_DELAY,
            Frame::Complete => Duration::ZERO,
        }
    }
}

/// Restartable frame cursor over a trace.
#[derive(Clone, Debug)]
pub struct Playback<'a> {
    trace: &'a Trace,
    next: Option<Frame>,
}

impl<'a> Playback<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        let first = if trace.is_empty() {
            Frame::Complete
        } else {
            Frame::Enter { step: 0 }
        };
        Self {
            trace,
            next: Some(first),
        }
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        *self = Self::new(self.trace);
    }

    /// Pause to hold after `frame`, including the step boundary.
    pub fn delay_after(&self, frame: Frame) -> Duration {
        match (frame, self.next) {
            (Frame::Probe { .. } | Frame::Enter { .. }, Some(Frame::Enter { .. })) => STEP_DELAY,
            _ => frame.delay(),
        }
    }

    /// Steps whose `current_point` is already on the drawn hull at `frame`.
    pub fn hull_so_far(&self, frame: Frame) -> &'a [Step] {
        let trace: &'a Trace = self.trace;
        let upto = match frame {
            Frame::Enter { step } | Frame::Probe { step, .. } => step + 1,
            Frame::Complete => trace.len(),
        };
        &trace[..upto.min(trace.len())]
    }

    /// The `(current, candidate)` segment highlighted by a probe frame.
    pub fn probe_segment(&self, frame: Frame) -> Option<(Point, Point)> {
        match frame {
            Frame::Probe { step, tried } => {
                let s = self.trace.get(step)?;
                Some((s.current_point, *s.tried_points.get(tried)?))
            }
            _ => None,
        }
    }

    fn successor(&self, frame: Frame) -> Option<Frame> {
        let (step, tried) = match frame {
            Frame::Enter { step } => (step, 0),
            Frame::Probe { step, tried } => (step, tried + 1),
            Frame::Complete => return None,
        };
        if tried < self.trace.get(step)?.tried_points.len() {
            Some(Frame::Probe { step, tried })
        } else if step + 1 < self.trace.len() {
            Some(Frame::Enter { step: step + 1 })
        } else {
            Some(Frame::Complete)
        }
    }
}

impl Iterator for Playback<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let frame = self.next?;
        self.next = self.successor(frame);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::compute_hull_trace;

    fn triangle() -> Trace {
        compute_hull_trace(&[Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)])
    }

    #[test]
    fn frames_walk_every_tried_point() {
        let trace = triangle();
        let frames: Vec<Frame> = Playback::new(&trace).collect();
        // 3 steps × (1 enter + 2 probes) + complete
        assert_eq!(frames.len(), 3 * 3 + 1);
        assert_eq!(frames[0], Frame::Enter { step: 0 });
        assert_eq!(frames[1], Frame::Probe { step: 0, tried: 0 });
        assert_eq!(frames[2], Frame::Probe { step: 0, tried: 1 });
        assert_eq!(frames[3], Frame::Enter { step: 1 });
        assert_eq!(*frames.last().unwrap(), Frame::Complete);
    }

    #[test]
    fn empty_trace_completes_immediately() {
        let trace = Trace::default();
        let frames: Vec<Frame> = Playback::new(&trace).collect();
        assert_eq!(frames, vec![Frame::Complete]);
    }

    #[test]
    fn reset_replays_from_start() {
        let trace = triangle();
        let mut pb = Playback::new(&trace);
        let first: Vec<Frame> = pb.by_ref().take(4).collect();
        pb.reset();
        let again: Vec<Frame> = pb.take(4).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn probe_segment_and_hull_prefix() {
        let trace = triangle();
        let pb = Playback::new(&trace);
        let f = Frame::Probe { step: 1, tried: 0 };
        let (from, to) = pb.probe_segment(f).unwrap();
        assert_eq!(from, trace[1].current_point);
        assert_eq!(to, trace[1].tried_points[0]);
        assert_eq!(pb.hull_so_far(f).len(), 2);
        assert_eq!(pb.hull_so_far(Frame::Complete).len(), 3);
        assert!(pb.probe_segment(Frame::Complete).is_none());
    }

    #[test]
    fn step_boundary_uses_long_delay() {
        let trace = triangle();
        let mut pb = Playback::new(&trace);
        let mut delays = Vec::new();
        while let Some(f) = pb.next() {
            delays.push(pb.delay_after(f));
        }
        // last probe of step 0 is followed by Enter { step: 1 }
        assert_eq!(delays[2], STEP_DELAY);
        assert_eq!(delays[1], PROBE_DELAY);
        assert_eq!(*delays.last().unwrap(), Duration::ZERO);
    }
}
