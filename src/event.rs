//! Decoded adapter samples.
//!
//! A [`PadSample`] is one event taken off a port's queue while the adapter is
//! in configuration mode. It carries the pressed-button mask of that report
//! and at most one "active" axis (the axis the producer saw deflected).
//!
//! Samples are consumed once by whichever factory pops them; the live state of
//! a pad lives in [`PadState`](crate::snapshot::PadState) instead.

use crate::pad::{PadAxis, PadButton, AXIS_CENTER};

/// One decoded adapter event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadSample {
    /// Bitmask of [`PadButton`] values pressed in this report.
    pub buttons: u16,
    /// Axis that moved in this report, if any.
    pub axis: Option<PadAxis>,
    /// Raw value of `axis` (`0..=255`, center 128). Meaningless when `axis` is `None`.
    pub axis_value: u8,
}

impl Default for PadSample {
    fn default() -> Self {
        Self {
            buttons: 0,
            axis: None,
            axis_value: AXIS_CENTER,
        }
    }
}

impl PadSample {
    /// Sample with only buttons pressed.
    pub fn buttons(buttons: &[PadButton]) -> Self {
        Self {
            buttons: buttons.iter().fold(0, |mask, b| mask | b.bits()),
            ..Self::default()
        }
    }

    /// Sample with a single moved axis.
    pub fn axis(axis: PadAxis, value: u8) -> Self {
        Self {
            axis: Some(axis),
            axis_value: value,
            ..Self::default()
        }
    }

    /// Signed distance of the axis value from center (`-128..=127`).
    #[inline]
    pub fn axis_offset(&self) -> i16 {
        i16::from(self.axis_value) - i16::from(AXIS_CENTER)
    }
}
