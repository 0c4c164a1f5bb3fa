use carousel::{BreakpointTable, CarouselEngine, Error, Geometry, Result};

use crate::{AutoplayTimer, DragGesture, ResizeDebounce};

/// Configuration for a [`Controller`].
#[derive(Clone, Debug)]
pub struct ControllerOptions {
    pub breakpoints: BreakpointTable,
    /// Autoplay cadence; `None` disables autoplay.
    pub autoplay_interval_ms: Option<u64>,
    /// Minimum pointer travel before a drag navigates.
    pub drag_threshold_px: f32,
    /// Quiet period before a resize is applied.
    pub resize_debounce_ms: u64,
    /// Pause autoplay while the pointer hovers the carousel.
    pub pause_on_hover: bool,
}

impl ControllerOptions {
    pub fn new(breakpoints: BreakpointTable) -> Self {
        Self {
            breakpoints,
            autoplay_interval_ms: None,
            drag_threshold_px: 50.0,
            resize_debounce_ms: 150,
            pause_on_hover: true,
        }
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: Option<u64>) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_drag_threshold_px(mut self, threshold_px: f32) -> Self {
        self.drag_threshold_px = threshold_px;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }
}

/// A framework-neutral controller that wraps a [`CarouselEngine`] and provides common adapter
/// workflows (debounced resize, drag/swipe, autoplay).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_resize` / `on_pointer_*` / `on_hover` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for debounced resize and autoplay)
///
/// Autoplay is paused while a drag is in progress (and while hovered, if configured), and is
/// stopped when the controller is dropped.
#[derive(Clone, Debug)]
pub struct Controller {
    engine: CarouselEngine,
    breakpoints: BreakpointTable,
    autoplay: AutoplayTimer<CarouselEngine>,
    drag: DragGesture,
    resize: ResizeDebounce,
    drag_threshold_px: f32,
    pause_on_hover: bool,
    hovered: bool,
}

impl Controller {
    /// Creates a controller for `item_count` items at viewport `width`.
    ///
    /// Fails on an invalid drag threshold or a zero autoplay interval.
    pub fn new(
        item_count: usize,
        width: f32,
        options: ControllerOptions,
        now_ms: u64,
    ) -> Result<Self> {
        if !options.drag_threshold_px.is_finite() || options.drag_threshold_px < 0.0 {
            cwarn!(
                threshold_px = options.drag_threshold_px,
                "Controller::new: invalid drag threshold"
            );
            return Err(Error::InvalidDragThreshold(options.drag_threshold_px));
        }
        let engine = CarouselEngine::with_breakpoints(item_count, &options.breakpoints, width);
        let mut autoplay = AutoplayTimer::new();
        if let Some(interval_ms) = options.autoplay_interval_ms {
            autoplay.start(interval_ms, now_ms, |e: &mut CarouselEngine| {
                e.step_forward_wrapping();
            })?;
        }
        Ok(Self {
            engine,
            breakpoints: options.breakpoints,
            autoplay,
            drag: DragGesture::new(),
            resize: ResizeDebounce::new(options.resize_debounce_ms),
            drag_threshold_px: options.drag_threshold_px,
            pause_on_hover: options.pause_on_hover,
            hovered: false,
        })
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine {
        &mut self.engine
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    pub fn geometry(&self) -> Geometry {
        self.engine.geometry()
    }

    /// Geometry with the track following an in-progress drag.
    pub fn live_geometry(&self, item_px: f32) -> Geometry {
        let mut g = self.engine.geometry();
        g.translate = self.drag.live_translate(g, item_px);
        g
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn autoplay(&self) -> &AutoplayTimer<CarouselEngine> {
        &self.autoplay
    }

    /// Manual "next" (right arrow). Restarts the autoplay cadence.
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.autoplay.reset(now_ms);
        self.engine.step_forward()
    }

    /// Manual "previous" (left arrow). Restarts the autoplay cadence.
    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.autoplay.reset(now_ms);
        self.engine.step_backward()
    }

    /// Pager-dot navigation. Restarts the autoplay cadence.
    pub fn go_to(&mut self, page: usize, now_ms: u64) -> bool {
        self.autoplay.reset(now_ms);
        self.engine.jump_to(isize::try_from(page).unwrap_or(isize::MAX))
    }

    /// Replaces the item count (dataset/tab swap).
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        self.engine.set_item_count(item_count)
    }

    /// Records a viewport width; it is applied by `tick` once the debounce window passes.
    pub fn on_resize(&mut self, width: f32, now_ms: u64) {
        self.resize.on_resize(width, now_ms);
    }

    pub fn on_pointer_down(&mut self, x: f32) {
        self.drag.begin(x);
        self.autoplay.pause();
    }

    pub fn on_pointer_move(&mut self, x: f32) {
        self.drag.update(x);
    }

    /// Finishes a drag and navigates if it crossed the threshold.
    ///
    /// `item_px` is the rendered width of one item. Returns whether the offset changed.
    pub fn on_pointer_up(&mut self, x: f32, item_px: f32, now_ms: u64) -> Result<bool> {
        let outcome = self.drag.end(x, item_px, self.drag_threshold_px);
        self.maybe_resume(now_ms);
        Ok(self.engine.apply_drag(outcome?))
    }

    pub fn on_pointer_cancel(&mut self, now_ms: u64) {
        self.drag.cancel();
        self.maybe_resume(now_ms);
    }

    pub fn on_hover(&mut self, hovered: bool, now_ms: u64) {
        self.hovered = hovered;
        if !self.pause_on_hover {
            return;
        }
        if hovered {
            self.autoplay.pause();
        } else {
            self.maybe_resume(now_ms);
        }
    }

    /// Cancels autoplay for the rest of the controller's life.
    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Advances the controller.
    ///
    /// Applies a debounced resize (if due), then runs autoplay. Returns whether the carousel
    /// state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let before = self.engine.state();
        if let Some(width) = self.resize.poll(now_ms) {
            self.engine.apply_breakpoints(&self.breakpoints, width);
        }
        self.autoplay.advance(now_ms, &mut self.engine);
        self.engine.state() != before
    }

    fn maybe_resume(&mut self, now_ms: u64) {
        if self.drag.is_active() || (self.pause_on_hover && self.hovered) {
            return;
        }
        self.autoplay.resume(now_ms);
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.autoplay.stop();
    }
}
