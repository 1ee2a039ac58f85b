//! Device capabilities and the factory contract.
//!
//! Devices are small, read-only views over a shared
//! [`SampleSource`](crate::adapter::SampleSource): every `poll` reads the
//! latest snapshot, so devices never go stale and need no update step.

use crate::params::ParamPackage;

/// A digital input.
pub trait ButtonDevice: Send + Sync {
    /// Whether the input is currently held.
    fn poll(&self) -> bool;
}

/// A two-axis analog input.
pub trait AnalogDevice: Send + Sync {
    /// Normalized `(x, y)` with deadzone applied; magnitude never exceeds 1.
    fn poll(&self) -> (f32, f32);

    /// Whether the stick is pushed past the directional deadzone towards `direction`.
    ///
    /// Diagonals may report two directions at once.
    fn direction_status(&self, direction: AnalogDirection) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnalogDirection {
    Right,
    Left,
    Up,
    Down,
}

/// Builds devices from binding descriptions and captures new descriptions.
///
/// Configuration mode is bracketed by `begin_configuration` and
/// `end_configuration`; in between, the host calls `next_input` once per tick.
pub trait InputFactory {
    type Device: ?Sized;

    fn create(&self, params: &ParamPackage) -> Box<Self::Device>;

    fn begin_configuration(&mut self);

    fn end_configuration(&mut self);

    /// The next captured binding, or `None` while nothing has been detected.
    fn next_input(&mut self) -> Option<ParamPackage>;
}
