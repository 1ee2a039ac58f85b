//! In-memory adapter.
//!
//! [`VirtualAdapter`] implements [`SampleSource`] without any hardware. A host
//! (or a test) plays the producer role by calling [`VirtualAdapter::update_pad`]
//! with full pad reports, or [`VirtualAdapter::push_sample`] to inject decoded
//! samples directly.
//!
//! The queueing rules follow a real adapter's polling thread: the snapshot is
//! always updated, but samples are only queued while configuration mode is on.

use crate::adapter::{PadQueue, SampleSource};
use crate::event::PadSample;
use crate::pad::{PadAxis, AXIS_CENTER, AXIS_COUNT, PORT_COUNT};
use crate::snapshot::PadState;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// How far an axis must travel from center before a report marks it active.
const AXIS_DETECTION_THRESHOLD: i16 = 50;

pub struct VirtualAdapter {
    queues: [PadQueue; PORT_COUNT],
    states: RwLock<[PadState; PORT_COUNT]>,
    configuring: AtomicBool,
}

impl Default for VirtualAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualAdapter {
    pub fn new() -> Self {
        Self {
            queues: Default::default(),
            states: RwLock::new([PadState::default(); PORT_COUNT]),
            configuring: AtomicBool::new(false),
        }
    }

    pub fn is_configuring(&self) -> bool {
        self.configuring.load(Ordering::Acquire)
    }

    /// Feed a full pad report for `port`.
    ///
    /// The snapshot is replaced. In configuration mode a sample is also queued
    /// when a button is held or an axis is deflected past the detection
    /// threshold; the first such axis in report order becomes the sample's axis.
    pub fn update_pad(&self, port: usize, buttons: u16, axes: [u8; AXIS_COUNT]) {
        let Some(queue) = self.queues.get(port) else {
            tracing::warn!(port, "pad report for out-of-range port ignored");
            return;
        };

        self.states.write()[port] = PadState { buttons, axes };

        if !self.is_configuring() {
            return;
        }

        let active = PadAxis::ALL.iter().copied().find(|a| {
            let offset = i16::from(axes[a.index()]) - i16::from(AXIS_CENTER);
            offset.abs() > AXIS_DETECTION_THRESHOLD
        });

        if buttons != 0 || active.is_some() {
            queue.push(PadSample {
                buttons,
                axis: active,
                axis_value: active.map_or(AXIS_CENTER, |a| axes[a.index()]),
            });
        }
    }

    /// Inject a decoded sample into `port`'s queue, regardless of mode.
    pub fn push_sample(&self, port: usize, sample: PadSample) {
        match self.queues.get(port) {
            Some(queue) => queue.push(sample),
            None => tracing::warn!(port, "sample for out-of-range port ignored"),
        }
    }

    /// Number of samples waiting on `port`.
    pub fn queued(&self, port: usize) -> usize {
        self.queues.get(port).map_or(0, PadQueue::len)
    }
}

impl SampleSource for VirtualAdapter {
    fn pop_sample(&self, port: usize) -> Option<PadSample> {
        self.queues.get(port)?.pop()
    }

    fn clear_queue(&self, port: usize) {
        if let Some(queue) = self.queues.get(port) {
            queue.clear();
        }
    }

    fn pad_state(&self, port: usize) -> PadState {
        self.states.read().get(port).copied().unwrap_or_default()
    }

    fn begin_configuration(&self) {
        self.configuring.store(true, Ordering::Release);
    }

    fn end_configuration(&self) {
        self.configuring.store(false, Ordering::Release);
    }
}
