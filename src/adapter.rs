//! The adapter seam.
//!
//! [`SampleSource`] is everything this crate needs from a controller adapter:
//! a per-port FIFO of decoded samples, a per-port snapshot, and a switch for
//! the adapter's own configuration mode. The producer side (USB transport,
//! polling thread) lives behind the trait and is never driven from here.
//!
//! Devices and factories share one source through [`SharedSource`]; the
//! application keeps the adapter alive for as long as any device exists.

use crate::event::PadSample;
use crate::pad::PORT_COUNT;
use crate::snapshot::PadState;
use crossbeam::queue::SegQueue;
use std::sync::Arc;

/// Shared handle to an adapter, held by every device and factory.
pub type SharedSource = Arc<dyn SampleSource>;

/// Consumer-side view of a polled controller adapter.
///
/// All methods are non-blocking and callable from any thread.
pub trait SampleSource: Send + Sync {
    /// Pops the oldest queued sample for `port`, or `None` if the queue is empty.
    fn pop_sample(&self, port: usize) -> Option<PadSample>;

    /// Drops every queued sample for `port`.
    fn clear_queue(&self, port: usize);

    /// Copy of the latest known state of `port`.
    fn pad_state(&self, port: usize) -> PadState;

    /// Puts the adapter into configuration mode (samples start being queued).
    fn begin_configuration(&self);

    /// Leaves configuration mode.
    fn end_configuration(&self);

    fn port_count(&self) -> usize {
        PORT_COUNT
    }
}

/// Lock-free FIFO of samples for one port.
///
/// Safe for one producer and one consumer running concurrently.
#[derive(Debug, Default)]
pub struct PadQueue {
    inner: SegQueue<PadSample>,
}

impl PadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&self, sample: PadSample) {
        self.inner.push(sample);
    }

    #[inline]
    pub fn pop(&self) -> Option<PadSample> {
        self.inner.pop()
    }

    /// Drains the queue. Samples pushed concurrently may survive.
    pub fn clear(&self) {
        while self.inner.pop().is_some() {}
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
