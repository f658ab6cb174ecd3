//! Viewport-gated animations.

/// Eased count-up of an integer
pub mod count_up;
/// Entering-the-viewport triggers
pub mod visibility;

pub use count_up::{
    CountUp,
    CountUpTask,
    FrameOutcome,
    ease_out_quart,
};
pub use visibility::{
    GateEvent,
    GateMode,
    VisibilityGate,
    crosses_reveal_line,
};
