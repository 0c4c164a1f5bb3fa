/// Coalesces bursts of viewport resize events.
///
/// The engine applies every visible-count change in full, so adapters should feed it
/// debounced widths. `poll` yields the latest width once `delay_ms` has elapsed without a new
/// event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeDebounce {
    delay_ms: u64,
    pending: Option<f32>,
    last_event_ms: Option<u64>,
}

impl ResizeDebounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
            last_event_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn on_resize(&mut self, width: f32, now_ms: u64) {
        self.pending = Some(width);
        self.last_event_ms = Some(now_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<f32> {
        let last = self.last_event_ms?;
        if now_ms.saturating_sub(last) < self.delay_ms {
            return None;
        }
        self.flush()
    }

    /// Takes the pending width immediately, regardless of the delay.
    pub fn flush(&mut self) -> Option<f32> {
        self.last_event_ms = None;
        self.pending.take()
    }
}
