use alloc::sync::Arc;

use crate::breakpoints::{BreakpointTable, resolve_visible_count};
use crate::options::{CarouselOptions, OnChangeCallback};
use crate::{CarouselState, DragOutcome, Error, Geometry, Result, WindowRange};

/// A headless windowed carousel.
///
/// The engine owns the item count, the visible count, and the offset of the leftmost visible
/// item. After every mutation it re-establishes
/// `0 <= offset <= max(0, item_count - visible_count)`.
///
/// It does not read any ambient environment: viewport widths, timers, and pointer positions
/// are all passed in by the adapter. Navigation at a boundary is a no-op, not an error.
///
/// For autoplay, drag tracking, and debounced resizing, see the `carousel-adapter` crate.
#[derive(Clone)]
pub struct CarouselEngine {
    state: CarouselState,
    on_change: Option<OnChangeCallback>,
}

impl CarouselEngine {
    /// Creates a new engine from options.
    ///
    /// Fails with [`Error::ZeroVisibleCount`] when `options.visible_count` is 0. The initial
    /// offset is clamped into the valid window.
    pub fn new(options: CarouselOptions) -> Result<Self> {
        if options.visible_count == 0 {
            cwarn!(
                item_count = options.item_count,
                "CarouselEngine::new: zero visible count"
            );
            return Err(Error::ZeroVisibleCount);
        }
        cdebug!(
            item_count = options.item_count,
            visible_count = options.visible_count,
            initial_offset = options.initial_offset,
            "CarouselEngine::new"
        );
        let mut state = CarouselState {
            item_count: options.item_count,
            visible_count: options.visible_count,
            offset: 0,
        };
        state.offset = options.initial_offset.min(state.max_offset());
        Ok(Self {
            state,
            on_change: options.on_change,
        })
    }

    /// Creates an engine whose visible count is resolved from `table` at `width`.
    pub fn with_breakpoints(item_count: usize, table: &BreakpointTable, width: f32) -> Self {
        Self {
            state: CarouselState {
                item_count,
                visible_count: resolve_visible_count(width, table),
                offset: 0,
            },
            on_change: None,
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&CarouselEngine) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count
    }

    pub fn visible_count(&self) -> usize {
        self.state.visible_count
    }

    pub fn offset(&self) -> usize {
        self.state.offset
    }

    pub fn max_offset(&self) -> usize {
        self.state.max_offset()
    }

    pub fn at_start(&self) -> bool {
        self.state.at_start()
    }

    pub fn at_end(&self) -> bool {
        self.state.at_end()
    }

    pub fn can_step_backward(&self) -> bool {
        !self.at_start()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.at_end()
    }

    /// Replaces the item count (e.g. after a dataset/tab swap) and re-clamps the offset.
    ///
    /// Returns `true` when the observable state changed.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        let mut next = self.state;
        next.item_count = item_count;
        next.offset = next.offset.min(next.max_offset());
        ctrace!(
            item_count,
            offset = next.offset,
            "CarouselEngine::set_item_count"
        );
        self.commit(next)
    }

    /// Replaces the visible count (the resize path) and re-clamps the offset.
    ///
    /// A count of 0 is rejected with [`Error::InvalidVisibleCount`] and leaves the state
    /// untouched.
    pub fn set_visible_count(&mut self, visible_count: usize) -> Result<bool> {
        if visible_count == 0 {
            cwarn!("CarouselEngine::set_visible_count: rejected 0");
            return Err(Error::InvalidVisibleCount(visible_count));
        }
        let mut next = self.state;
        next.visible_count = visible_count;
        next.offset = next.offset.min(next.max_offset());
        ctrace!(
            visible_count,
            offset = next.offset,
            "CarouselEngine::set_visible_count"
        );
        Ok(self.commit(next))
    }

    /// Resolves `width` against `table` and applies the resulting visible count.
    pub fn apply_breakpoints(&mut self, table: &BreakpointTable, width: f32) -> bool {
        let mut next = self.state;
        next.visible_count = resolve_visible_count(width, table);
        next.offset = next.offset.min(next.max_offset());
        self.commit(next)
    }

    pub fn step_backward(&mut self) -> bool {
        self.set_offset(self.state.offset.saturating_sub(1))
    }

    pub fn step_forward(&mut self) -> bool {
        self.set_offset(self.state.offset.saturating_add(1))
    }

    /// Steps forward, wrapping to the first offset when already at the right boundary.
    ///
    /// This is the autoplay step: rotating heroes loop indefinitely.
    pub fn step_forward_wrapping(&mut self) -> bool {
        if self.at_end() {
            return self.set_offset(0);
        }
        self.step_forward()
    }

    /// Sets the offset directly (pager dots, drag-release snapping).
    ///
    /// Negative and out-of-range targets are clamped.
    pub fn jump_to(&mut self, target: isize) -> bool {
        let target = usize::try_from(target).unwrap_or(0);
        self.set_offset(target)
    }

    pub fn apply_drag(&mut self, outcome: DragOutcome) -> bool {
        match outcome {
            DragOutcome::None => false,
            DragOutcome::StepBackward => self.step_backward(),
            DragOutcome::StepForward => self.step_forward(),
        }
    }

    /// Moves the window by the smallest amount that puts `index` on screen.
    ///
    /// Returns `false` when `index` is out of bounds or already visible.
    pub fn ensure_visible(&mut self, index: usize) -> bool {
        if index >= self.state.item_count {
            return false;
        }
        let range = self.visible_range();
        if range.contains(index) {
            return false;
        }
        if index < range.start_index {
            return self.set_offset(index);
        }
        // index >= offset + visible_count here, so this cannot underflow.
        self.set_offset(index + 1 - self.state.visible_count)
    }

    pub fn geometry(&self) -> Geometry {
        let item_width = 100.0 / self.state.visible_count as f32;
        Geometry {
            item_width,
            track_width: self.state.item_count as f32 * item_width,
            translate: self.state.offset as f32 * item_width,
        }
    }

    /// The items currently on screen.
    pub fn visible_range(&self) -> WindowRange {
        let start = self.state.offset;
        let end = start
            .saturating_add(self.state.visible_count)
            .min(self.state.item_count);
        WindowRange {
            start_index: start.min(end),
            end_index: end,
        }
    }

    /// Number of distinct window positions (pager dots). `0` for an empty dataset.
    pub fn page_count(&self) -> usize {
        if self.state.item_count == 0 {
            return 0;
        }
        self.max_offset() + 1
    }

    pub fn is_page_active(&self, page: usize) -> bool {
        self.state.item_count > 0 && self.state.offset == page
    }

    fn set_offset(&mut self, offset: usize) -> bool {
        let mut next = self.state;
        next.offset = offset.min(next.max_offset());
        self.commit(next)
    }

    fn commit(&mut self, next: CarouselState) -> bool {
        debug_assert!(next.visible_count > 0, "visible_count must stay >= 1");
        debug_assert!(next.offset <= next.max_offset(), "offset out of window");
        if next == self.state {
            return false;
        }
        self.state = next;
        if let Some(cb) = &self.on_change {
            cb(self);
        }
        true
    }
}

impl core::fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Decides whether a finished drag should navigate.
///
/// `delta_px` is the pointer travel from drag start to release. Travel below `threshold_px`
/// (in either direction) is ignored so accidental touch jitter never navigates. Dragging the
/// content left (`delta_px < 0`) reveals the next item.
///
/// `item_px` is the rendered width of one item; it must be finite and positive.
pub fn resolve_drag_delta(delta_px: f32, item_px: f32, threshold_px: f32) -> Result<DragOutcome> {
    if !threshold_px.is_finite() || threshold_px < 0.0 {
        return Err(Error::InvalidDragThreshold(threshold_px));
    }
    if !item_px.is_finite() || item_px <= 0.0 {
        return Err(Error::InvalidItemWidth(item_px));
    }
    if !delta_px.is_finite() || delta_px.abs() < threshold_px {
        return Ok(DragOutcome::None);
    }
    Ok(if delta_px < 0.0 {
        DragOutcome::StepForward
    } else if delta_px > 0.0 {
        DragOutcome::StepBackward
    } else {
        DragOutcome::None
    })
}
