//! Entering-the-viewport triggers

/// Fraction of the viewport height an element's top must rise above before
/// a scroll reveal triggers.
pub const REVEAL_LINE: f64 = 0.8;

/// Whether an element whose top edge sits at `top` (relative to the
/// viewport) should be revealed.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn crosses_reveal_line(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_LINE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateMode {
    /// Latch on first entry; leaving the viewport afterwards is ignored
    #[default]
    Once,
    /// Follow every entry and exit
    Repeat,
}

/// Transition reported by [`VisibilityGate::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    Shown,
    Hidden,
}

/// Turns raw in-view samples into show/hide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityGate {
    mode: GateMode,
    visible: bool,
}

impl VisibilityGate {
    #[must_use]
    pub const fn new(mode: GateMode) -> Self {
        Self { mode, visible: false }
    }

    #[must_use]
    pub const fn once() -> Self {
        Self::new(GateMode::Once)
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one sample; returns the transition it caused, if any.
    pub const fn observe(&mut self, in_view: bool) -> Option<GateEvent> {
        match (self.visible, in_view, self.mode) {
            (false, true, _) => {
                self.visible = true;
                Some(GateEvent::Shown)
            }
            (true, false, GateMode::Repeat) => {
                self.visible = false;
                Some(GateEvent::Hidden)
            }
            _ => None,
        }
    }
}
