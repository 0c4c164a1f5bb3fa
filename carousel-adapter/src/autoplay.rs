use alloc::sync::Arc;

use carousel::{Error, Result};

/// The action run on every autoplay tick.
pub type TickCallback<T> = Arc<dyn Fn(&mut T) + Send + Sync>;

/// A deterministic, adapter-driven periodic driver.
///
/// The timer never reads a clock. Adapters pass the current time into `start`, `resume`, and
/// `advance`, typically from a frame loop or a host timer. A paused or stopped timer holds no
/// deadline, so it cannot fire.
///
/// At most one tick fires per `advance` call; periods missed while the host was not calling
/// `advance` (e.g. a backgrounded tab) are skipped rather than replayed.
pub struct AutoplayTimer<T> {
    interval_ms: u64,
    on_tick: Option<TickCallback<T>>,
    next_tick_at: Option<u64>,
    paused: bool,
}

impl<T> Clone for AutoplayTimer<T> {
    fn clone(&self) -> Self {
        Self {
            interval_ms: self.interval_ms,
            on_tick: self.on_tick.clone(),
            next_tick_at: self.next_tick_at,
            paused: self.paused,
        }
    }
}

impl<T> Default for AutoplayTimer<T> {
    fn default() -> Self {
        Self {
            interval_ms: 0,
            on_tick: None,
            next_tick_at: None,
            paused: false,
        }
    }
}

impl<T> AutoplayTimer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the timer. The first tick is due at `now_ms + interval_ms`.
    pub fn start(
        &mut self,
        interval_ms: u64,
        now_ms: u64,
        on_tick: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> Result<()> {
        if interval_ms == 0 {
            return Err(Error::ZeroAutoplayInterval);
        }
        cdebug!(interval_ms, now_ms, "AutoplayTimer::start");
        self.interval_ms = interval_ms;
        self.on_tick = Some(Arc::new(on_tick));
        self.paused = false;
        self.next_tick_at = Some(now_ms.saturating_add(interval_ms));
        Ok(())
    }

    /// Suspends ticking. The pending deadline is discarded.
    pub fn pause(&mut self) {
        if self.on_tick.is_none() || self.paused {
            return;
        }
        ctrace!("AutoplayTimer::pause");
        self.paused = true;
        self.next_tick_at = None;
    }

    /// Resumes a paused timer; the cadence restarts from `now_ms`.
    pub fn resume(&mut self, now_ms: u64) {
        if self.on_tick.is_none() || !self.paused {
            return;
        }
        ctrace!(now_ms, "AutoplayTimer::resume");
        self.paused = false;
        self.next_tick_at = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Pushes the next tick a full interval past `now_ms` without pausing.
    ///
    /// Used after manual navigation so autoplay does not fire right after a click.
    pub fn reset(&mut self, now_ms: u64) {
        if self.is_running() {
            self.next_tick_at = Some(now_ms.saturating_add(self.interval_ms));
        }
    }

    /// Cancels the timer and releases the tick callback.
    pub fn stop(&mut self) {
        if self.on_tick.is_some() {
            cdebug!("AutoplayTimer::stop");
        }
        self.on_tick = None;
        self.next_tick_at = None;
        self.paused = false;
    }

    /// Fires the tick callback on `target` if a tick is due at `now_ms`.
    ///
    /// Returns `true` when a tick fired.
    pub fn advance(&mut self, now_ms: u64, target: &mut T) -> bool {
        let (Some(due), Some(on_tick)) = (self.next_tick_at, self.on_tick.as_ref()) else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        on_tick(target);
        let next = due.saturating_add(self.interval_ms);
        self.next_tick_at = Some(if next <= now_ms {
            now_ms.saturating_add(self.interval_ms)
        } else {
            next
        });
        true
    }

    /// `true` while started and not paused.
    pub fn is_running(&self) -> bool {
        self.on_tick.is_some() && !self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_stopped(&self) -> bool {
        self.on_tick.is_none()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn next_tick_at(&self) -> Option<u64> {
        self.next_tick_at
    }
}

impl<T> core::fmt::Debug for AutoplayTimer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutoplayTimer")
            .field("interval_ms", &self.interval_ms)
            .field("next_tick_at", &self.next_tick_at)
            .field("paused", &self.paused)
            .field("stopped", &self.on_tick.is_none())
            .finish()
    }
}
