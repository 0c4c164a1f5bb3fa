use alloc::sync::Arc;

use crate::breakpoints::{BreakpointTable, resolve_visible_count};
use crate::engine::CarouselEngine;

/// A callback fired after a carousel's observable state changed.
pub type OnChangeCallback = Arc<dyn Fn(&CarouselEngine) + Send + Sync>;

/// Configuration for [`crate::CarouselEngine`].
///
/// This type is cheap to clone: the callback is stored in an `Arc`.
pub struct CarouselOptions {
    pub item_count: usize,
    /// Must be at least 1; validated by `CarouselEngine::new`.
    pub visible_count: usize,
    /// Requested starting offset. Clamped into the valid window on construction.
    pub initial_offset: usize,
    /// Optional callback fired when offset, item count, or visible count changes.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            visible_count: self.visible_count,
            initial_offset: self.initial_offset,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            item_count,
            visible_count,
            initial_offset: 0,
            on_change: None,
        }
    }

    /// Creates options whose visible count is resolved from `table` at the given viewport
    /// `width`.
    pub fn from_breakpoints(item_count: usize, table: &BreakpointTable, width: f32) -> Self {
        Self::new(item_count, resolve_visible_count(width, table))
    }

    pub fn with_initial_offset(mut self, initial_offset: usize) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&CarouselEngine) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("item_count", &self.item_count)
            .field("visible_count", &self.visible_count)
            .field("initial_offset", &self.initial_offset)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
