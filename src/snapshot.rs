//! Latest known state of one pad.
//!
//! [`PadState`] is an **owned**, `Copy` view of a port at a point in time. A
//! [`SampleSource`](crate::adapter::SampleSource) hands out copies on every
//! read, so a device sees a consistent set of buttons and axes even while the
//! producer keeps writing.
//!
//! # Semantics
//! - Button ids are raw [`PadButton`](crate::pad::PadButton) bit values.
//!   Anything that is not exactly one physical button reads as released.
//! - Axis ids are [`PadAxis`](crate::pad::PadAxis) indices. Unknown ids read as `None`.
//! - The default state is "nothing pressed, every axis centered".

use crate::pad::{PadAxis, PadButton, AXIS_CENTER, AXIS_COUNT};

/// Snapshot of one pad's buttons and raw axis values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadState {
    /// Pressed-button bitmask.
    pub buttons: u16,
    /// Raw axis values indexed by [`PadAxis::index`].
    pub axes: [u8; AXIS_COUNT],
}

impl Default for PadState {
    fn default() -> Self {
        Self {
            buttons: 0,
            axes: [AXIS_CENTER; AXIS_COUNT],
        }
    }
}

impl PadState {
    /// Whether the button with bit value `button_id` is held.
    #[inline]
    pub fn is_pressed(&self, button_id: i64) -> bool {
        u16::try_from(button_id)
            .ok()
            .and_then(PadButton::from_bits)
            .is_some_and(|b| self.buttons & b.bits() != 0)
    }

    /// Raw value of the axis with index `axis_id`.
    #[inline]
    pub fn axis(&self, axis_id: i64) -> Option<u8> {
        PadAxis::from_index(axis_id).map(|a| self.axes[a.index()])
    }

    #[inline]
    pub fn set_axis(&mut self, axis: PadAxis, value: u8) {
        self.axes[axis.index()] = value;
    }
}
