//! Configuration-mode bookkeeping shared by the factories.

use crate::adapter::SharedSource;
use crate::event::PadSample;

/// Engine tag written into every captured binding.
pub const ENGINE: &str = "gcpad";

/// Owns a factory's source handle and its `polling` flag.
pub struct CaptureSession {
    source: SharedSource,
    polling: bool,
}

impl CaptureSession {
    pub fn new(source: SharedSource) -> Self {
        Self {
            source,
            polling: false,
        }
    }

    pub fn source(&self) -> &SharedSource {
        &self.source
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Enter capture: stale samples are discarded before the adapter starts queueing.
    pub fn begin(&mut self) {
        self.polling = true;
        self.clear_queues();
        self.source.begin_configuration();
        tracing::debug!("configuration mode started");
    }

    /// Leave capture. Safe to call repeatedly.
    pub fn end(&mut self) {
        self.polling = false;
        self.clear_queues();
        self.source.end_configuration();
        tracing::debug!("configuration mode ended");
    }

    /// Pops `port`'s queue until it is empty.
    ///
    /// Samples not yet pulled from the iterator stay queued.
    pub fn drain(&self, port: usize) -> impl Iterator<Item = PadSample> + '_ {
        std::iter::from_fn(move || self.source.pop_sample(port))
    }

    pub fn ports(&self) -> std::ops::Range<usize> {
        0..self.source.port_count()
    }

    fn clear_queues(&self) {
        for port in self.ports() {
            self.source.clear_queue(port);
        }
    }
}

/// Reads the `port` entry; negative or missing values map to port 0 and an
/// unrepresentable port to one no source knows about.
pub(crate) fn read_port(params: &crate::params::ParamPackage) -> usize {
    usize::try_from(params.get_int("port", 0)).unwrap_or(usize::MAX)
}
