//! Sample sources for `padbind`.
//!
//! Implementations of [`SampleSource`](crate::adapter::SampleSource). Hardware
//! transports live in the host application; this crate ships only the
//! in-memory adapter, used for headless hosts, replays, and tests.

pub mod virtual_adapter;

pub use virtual_adapter::VirtualAdapter;
