//! padbind: binding capture and device polling for GameCube-style controller adapters.
//!
//! An adapter ([`SampleSource`]) exposes per-port sample queues and live pad
//! snapshots. Factories turn [`ParamPackage`] descriptions into button and
//! analog devices, and in configuration mode they watch the queues to learn
//! the user's next press.

pub mod adapter;
pub mod analog;
pub mod backends;
pub mod button;
pub mod capture;
pub mod device;
pub mod error;
pub mod event;
pub mod manager;
pub mod normalize;
pub mod pad;
pub mod params;
pub mod profile;
pub mod snapshot;

pub use adapter::*;
pub use analog::{PadAnalog, PadAnalogFactory};
pub use button::{PadAxisButton, PadButtonDevice, PadButtonFactory, ThresholdDirection};
pub use device::*;
pub use error::{BindingError, BindingResult};
pub use event::*;
pub use manager::*;
pub use pad::*;
pub use params::ParamPackage;
pub use profile::*;
pub use snapshot::*;
