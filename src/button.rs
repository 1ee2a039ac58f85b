//! Digital devices and button capture.
//!
//! Two devices come out of [`PadButtonFactory`]:
//! - [`PadButtonDevice`]: one physical button on one port.
//! - [`PadAxisButton`]: an axis read as a button (binary stick inputs), which
//!   fires once the axis leaves a fixed deadband on the configured side.
//!
//! Capture reports the first pressed button it finds, port by port, using the
//! [`CAPTURE_PRIORITY`](crate::pad::CAPTURE_PRIORITY) table when one report
//! holds several buttons. A moved axis is reported as an axis-as-button binding.

use crate::adapter::SharedSource;
use crate::capture::{read_port, CaptureSession, ENGINE};
use crate::device::{ButtonDevice, InputFactory};
use crate::event::PadSample;
use crate::normalize::{axis_to_button_unit, AXIS_BUTTON_DEADBAND};
use crate::pad::PadButton;
use crate::params::ParamPackage;

/// A physical button on one port.
pub struct PadButtonDevice {
    port: usize,
    button: i64,
    source: SharedSource,
}

impl PadButtonDevice {
    pub fn new(port: usize, button: i64, source: SharedSource) -> Self {
        Self {
            port,
            button,
            source,
        }
    }
}

impl ButtonDevice for PadButtonDevice {
    fn poll(&self) -> bool {
        self.source.pad_state(self.port).is_pressed(self.button)
    }
}

/// Which side of center triggers a [`PadAxisButton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdDirection {
    Greater,
    Less,
}

impl ThresholdDirection {
    /// Parses `"+"` / `"-"`. Anything else falls back to `Greater` with an error log.
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "+" => Self::Greater,
            "-" => Self::Less,
            other => {
                tracing::error!(direction = other, "Unknown direction {other}");
                Self::Greater
            }
        }
    }
}

/// An axis read as a button.
pub struct PadAxisButton {
    port: usize,
    axis: i64,
    threshold: f32,
    direction: ThresholdDirection,
    source: SharedSource,
}

impl PadAxisButton {
    pub fn new(
        port: usize,
        axis: i64,
        threshold: f32,
        direction: ThresholdDirection,
        source: SharedSource,
    ) -> Self {
        Self {
            port,
            axis,
            threshold,
            direction,
            source,
        }
    }

    /// Threshold recorded at capture time.
    ///
    /// Carried for round-tripping only; `poll` uses [`AXIS_BUTTON_DEADBAND`].
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn direction(&self) -> ThresholdDirection {
        self.direction
    }
}

impl ButtonDevice for PadAxisButton {
    fn poll(&self) -> bool {
        let Some(raw) = self.source.pad_state(self.port).axis(self.axis) else {
            return false;
        };
        let value = axis_to_button_unit(raw);
        match self.direction {
            ThresholdDirection::Greater => value > AXIS_BUTTON_DEADBAND,
            ThresholdDirection::Less => value < -AXIS_BUTTON_DEADBAND,
        }
    }
}

/// Creates button devices and captures button bindings.
pub struct PadButtonFactory {
    session: CaptureSession,
}

impl PadButtonFactory {
    pub fn new(source: SharedSource) -> Self {
        Self {
            session: CaptureSession::new(source),
        }
    }

    pub fn is_polling(&self) -> bool {
        self.session.is_polling()
    }
}

/// Binding for one sample, if it holds anything bindable.
fn binding_for_sample(port: usize, sample: &PadSample) -> Option<ParamPackage> {
    let params = ParamPackage::new().with("engine", ENGINE).with("port", port);

    if let Some(button) = PadButton::first_pressed(sample.buttons) {
        return Some(params.with("button", button.bits()));
    }

    let axis = sample.axis?;
    let (direction, threshold) = match sample.axis_offset() {
        0 => return None,
        o if o > 0 => ("+", "0.5"),
        _ => ("-", "-0.5"),
    };
    Some(
        params
            .with("axis", axis.index())
            .with("button", PadButton::Stick.bits())
            .with("direction", direction)
            .with("threshold", threshold),
    )
}

impl InputFactory for PadButtonFactory {
    type Device = dyn ButtonDevice;

    /// Builds a device from `params`.
    ///
    /// - `port` (default 0), `button` (default 0)
    /// - with `axis`: an axis button using `threshold` (default 0.5) and
    ///   `direction` (`"+"` / `"-"`)
    fn create(&self, params: &ParamPackage) -> Box<dyn ButtonDevice> {
        let source = self.session.source().clone();
        let port = read_port(params);

        if params.has("axis") {
            let axis = params.get_int("axis", 0);
            let threshold = params.get_float("threshold", 0.5);
            let direction = ThresholdDirection::parse_or_default(params.get_str("direction", ""));
            return Box::new(PadAxisButton::new(port, axis, threshold, direction, source));
        }

        Box::new(PadButtonDevice::new(
            port,
            params.get_int("button", 0),
            source,
        ))
    }

    fn begin_configuration(&mut self) {
        self.session.begin();
    }

    fn end_configuration(&mut self) {
        self.session.end();
    }

    fn next_input(&mut self) -> Option<ParamPackage> {
        if !self.session.is_polling() {
            return None;
        }
        for port in self.session.ports() {
            for sample in self.session.drain(port) {
                if let Some(params) = binding_for_sample(port, &sample) {
                    tracing::info!(%params, "captured button binding");
                    return Some(params);
                }
                tracing::trace!(port, ?sample, "sample carries nothing bindable");
            }
        }
        None
    }
}
