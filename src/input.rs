//! Input sampling
//!
//! The simulation only ever sees a [`TickInput`], sampled once per frame from
//! an [`InputSource`].

use crate::sim::TickInput;

/// Where per-frame input comes from
pub trait InputSource {
    /// True only on the frame the start/restart key went down
    fn start_pressed(&mut self) -> bool;

    /// Horizontal direction in {-1, 0, 1}
    fn horizontal_axis(&mut self) -> i8;
}

/// Sample a source once for the coming tick
pub fn sample<I: InputSource + ?Sized>(source: &mut I) -> TickInput {
    TickInput {
        axis: source.horizontal_axis().signum(),
        start: source.start_pressed(),
    }
}

/// Axis from a pair of held keys; both or neither cancel out
pub fn axis_from_held(left: bool, right: bool) -> i8 {
    match (left, right) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    }
}

/// Turns a held level into a single-frame pulse
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    /// Feed this frame's level; true on the rising edge only
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        pressed
    }
}
