//! Analog sticks and stick capture.
//!
//! [`PadAnalog`] reads two axes of one port and runs them through
//! [`normalize_stick`]. Both axes come from the same snapshot copy, so a pair
//! is never torn between two producer writes.
//!
//! Capture needs two *different* axes moved on the *same* port. The first
//! qualifying axis is held as pending until a partner shows up; it becomes
//! `axis_x` and the partner `axis_y`.

use crate::adapter::SharedSource;
use crate::capture::{read_port, CaptureSession, ENGINE};
use crate::device::{AnalogDevice, AnalogDirection, InputFactory};
use crate::event::PadSample;
use crate::normalize::{normalize_stick, sanitize_deadzone, DIRECTIONAL_DEADZONE};
use crate::pad::{PadAxis, AXIS_CENTER};
use crate::params::ParamPackage;

/// Minimum deflection (fraction of half-range) for a sample to count during capture.
const CAPTURE_NOISE_FLOOR: f32 = 0.1;

/// A two-axis stick on one port.
pub struct PadAnalog {
    port: usize,
    axis_x: i64,
    axis_y: i64,
    deadzone: f32,
    source: SharedSource,
}

impl PadAnalog {
    /// `deadzone` is clamped into `[0, 0.99]`.
    pub fn new(
        port: usize,
        axis_x: i64,
        axis_y: i64,
        deadzone: f32,
        source: SharedSource,
    ) -> Self {
        Self {
            port,
            axis_x,
            axis_y,
            deadzone: sanitize_deadzone(deadzone),
            source,
        }
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }
}

impl AnalogDevice for PadAnalog {
    fn poll(&self) -> (f32, f32) {
        let state = self.source.pad_state(self.port);
        let x = state.axis(self.axis_x).unwrap_or(AXIS_CENTER);
        let y = state.axis(self.axis_y).unwrap_or(AXIS_CENTER);
        normalize_stick(x, y, self.deadzone)
    }

    fn direction_status(&self, direction: AnalogDirection) -> bool {
        let (x, y) = self.poll();
        match direction {
            AnalogDirection::Right => x > DIRECTIONAL_DEADZONE,
            AnalogDirection::Left => x < -DIRECTIONAL_DEADZONE,
            AnalogDirection::Up => y > DIRECTIONAL_DEADZONE,
            AnalogDirection::Down => y < -DIRECTIONAL_DEADZONE,
        }
    }
}

/// Creates stick devices and captures stick bindings.
pub struct PadAnalogFactory {
    session: CaptureSession,
    pending: Option<(usize, PadAxis)>,
}

impl PadAnalogFactory {
    pub fn new(source: SharedSource) -> Self {
        Self {
            session: CaptureSession::new(source),
            pending: None,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.session.is_polling()
    }

    /// First axis of an incomplete pair, with its port.
    pub fn pending_axis(&self) -> Option<(usize, PadAxis)> {
        self.pending
    }
}

fn qualifying_axis(sample: &PadSample) -> Option<PadAxis> {
    let axis = sample.axis?;
    let deflection = (f32::from(sample.axis_offset()) / 128.0).abs();
    (deflection >= CAPTURE_NOISE_FLOOR).then_some(axis)
}

impl InputFactory for PadAnalogFactory {
    type Device = dyn AnalogDevice;

    /// Builds a stick from `port` (0), `axis_x` (0), `axis_y` (1) and `deadzone` (0.0).
    fn create(&self, params: &ParamPackage) -> Box<dyn AnalogDevice> {
        Box::new(PadAnalog::new(
            read_port(params),
            params.get_int("axis_x", 0),
            params.get_int("axis_y", 1),
            params.get_float("deadzone", 0.0),
            self.session.source().clone(),
        ))
    }

    fn begin_configuration(&mut self) {
        self.pending = None;
        self.session.begin();
    }

    fn end_configuration(&mut self) {
        self.pending = None;
        self.session.end();
    }

    fn next_input(&mut self) -> Option<ParamPackage> {
        if !self.session.is_polling() {
            return None;
        }

        let mut paired = None;
        for port in self.session.ports() {
            for sample in self.session.drain(port) {
                let Some(axis) = qualifying_axis(&sample) else {
                    tracing::trace!(port, ?sample, "below capture noise floor");
                    continue;
                };
                // Once paired, the rest of this drain is discarded.
                if paired.is_some() {
                    continue;
                }
                match self.pending {
                    None => self.pending = Some((port, axis)),
                    Some((pending_port, pending_axis))
                        if pending_port == port && pending_axis != axis =>
                    {
                        paired = Some((port, pending_axis, axis));
                    }
                    // Same axis again, or another port: keep waiting.
                    Some(_) => {}
                }
            }
        }

        let (port, axis_x, axis_y) = paired?;
        self.pending = None;
        let params = ParamPackage::new()
            .with("engine", ENGINE)
            .with("port", port)
            .with("axis_x", axis_x.index())
            .with("axis_y", axis_y.index());
        tracing::info!(%params, "captured analog binding");
        Some(params)
    }
}
