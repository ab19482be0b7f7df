//! Horizontal swipe handling for the study card.
//!
//! A drag is tracked from press to release and judged exactly once, at
//! release time; nothing here knows about pointers or rendering.

use std::collections::VecDeque;

/// Velocity is measured over the samples taken this long before release.
const VELOCITY_WINDOW_MS: f64 = 100.0;

/// A press that travels no further than this is a click, not a drag.
pub const TAP_SLOP_PX: f64 = 5.0;

/// What a released swipe asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeCommit {
    Previous,
    Next,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    /// Minimum absolute horizontal offset, in pixels.
    pub distance: f64,
    /// Minimum absolute release velocity, in pixels per millisecond.
    pub velocity: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            distance: 100.0,
            velocity: 0.3,
        }
    }
}

/// Horizontal displacement and velocity at the moment of release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub offset: f64,
    pub velocity: f64,
}

impl DragRelease {
    #[must_use]
    pub fn new(offset: f64, velocity: f64) -> Self {
        Self { offset, velocity }
    }

    /// The pointer barely moved: treat the press as a click and never swipe.
    #[must_use]
    pub fn is_tap(&self) -> bool {
        self.offset.abs() <= TAP_SLOP_PX
    }
}

/// Decide whether a released drag navigates.
///
/// Either threshold is enough to commit; the sign of the offset picks the
/// direction (rightward goes back, leftward goes forward).
#[must_use]
pub fn resolve_swipe(release: DragRelease, thresholds: SwipeThresholds) -> SwipeCommit {
    let far_enough = release.offset.abs() > thresholds.distance;
    let fast_enough = release.velocity.abs() > thresholds.velocity;
    if !(far_enough || fast_enough) {
        return SwipeCommit::None;
    }
    if release.offset > 0.0 {
        SwipeCommit::Previous
    } else if release.offset < 0.0 {
        SwipeCommit::Next
    } else {
        SwipeCommit::None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f64,
    at_ms: f64,
}

/// Accumulates pointer positions for one drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragTracker {
    origin_x: f64,
    samples: VecDeque<Sample>,
}

impl DragTracker {
    #[must_use]
    pub fn start(x: f64, at_ms: f64) -> Self {
        let mut samples = VecDeque::with_capacity(8);
        samples.push_back(Sample { x, at_ms });
        Self {
            origin_x: x,
            samples,
        }
    }

    pub fn move_to(&mut self, x: f64, at_ms: f64) {
        self.samples.push_back(Sample { x, at_ms });
        while self.samples.len() > 2
            && self
                .samples
                .front()
                .is_some_and(|first| at_ms - first.at_ms > VELOCITY_WINDOW_MS)
        {
            self.samples.pop_front();
        }
    }

    /// Offset from the press position to the latest sample.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.samples
            .back()
            .map_or(0.0, |last| last.x - self.origin_x)
    }

    #[must_use]
    pub fn release(mut self, x: f64, at_ms: f64) -> DragRelease {
        self.move_to(x, at_ms);
        let offset = x - self.origin_x;
        let velocity = match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) if last.at_ms > first.at_ms => {
                (last.x - first.x) / (last.at_ms - first.at_ms)
            }
            _ => 0.0,
        };
        DragRelease { offset, velocity }
    }
}
