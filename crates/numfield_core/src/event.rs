//! Scroll notification payload and step selection.

use crate::config::StepSizes;

/// A scroll notification as delivered by the host toolkit.
///
/// Carries the raw scroll deltas plus the modifier-key flags that were
/// held when the event fired. The core never reads the keyboard itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollEvent {
    /// Horizontal scroll delta; positive is rightward.
    pub delta_x: f32,
    /// Vertical scroll delta; positive is upward.
    pub delta_y: f32,
    /// Whether a ctrl key was held.
    pub ctrl: bool,
    /// Whether a shift key was held.
    pub shift: bool,
}

impl ScrollEvent {
    /// A plain vertical scroll with no modifiers.
    #[inline]
    pub fn vertical(delta_y: f32) -> Self {
        Self {
            delta_y,
            ..Self::default()
        }
    }

    /// A plain horizontal scroll with no modifiers.
    #[inline]
    pub fn horizontal(delta_x: f32) -> Self {
        Self {
            delta_x,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[inline]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// The signed value change this event requests, given the field's
    /// configured step sizes.
    ///
    /// Evaluated in priority order, first match wins (ctrl beats shift
    /// when both are held):
    ///
    /// 1. ctrl held: ±variation step, signed by the vertical delta.
    /// 2. shift held: ±large variation step, signed by the *horizontal*
    ///    delta. Reading `delta_x` here while every other branch reads
    ///    `delta_y` is long-standing behavior, kept as-is; see the
    ///    regression test below before touching it.
    /// 3. no modifier: ±1, signed by the vertical delta.
    ///
    /// A delta of exactly zero counts as a downward scroll (only a
    /// strictly positive delta increments).
    pub fn step_delta(&self, steps: StepSizes) -> i64 {
        if self.ctrl {
            if self.delta_y > 0.0 {
                steps.variation
            } else {
                -steps.variation
            }
        } else if self.shift {
            if self.delta_x > 0.0 {
                steps.large_variation
            } else {
                -steps.large_variation
            }
        } else if self.delta_y > 0.0 {
            1
        } else {
            -1
        }
    }
}
