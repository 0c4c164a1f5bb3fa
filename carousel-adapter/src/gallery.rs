use alloc::vec::Vec;

use carousel::{
    CarouselEngine, CarouselOptions, ControlledIndex, DragOutcome, ReconcileValue, Result,
    SyncState,
};

/// An image-gallery style composition: a thumbnail strip (windowed carousel) plus a
/// parent-controlled selection.
///
/// Whenever the selection moves, the strip scrolls by the smallest amount that keeps the
/// selected thumbnail visible.
#[derive(Clone, Debug)]
pub struct Gallery<T> {
    strip: CarouselEngine,
    selection: ControlledIndex<T>,
}

impl<T: ReconcileValue + Clone> Gallery<T> {
    /// Creates an empty gallery showing `visible_count` thumbnails at once.
    pub fn new(visible_count: usize) -> Result<Self> {
        Ok(Self {
            strip: CarouselEngine::new(CarouselOptions::new(0, visible_count))?,
            selection: ControlledIndex::new(),
        })
    }

    pub fn strip(&self) -> &CarouselEngine {
        &self.strip
    }

    pub fn selection(&self) -> &ControlledIndex<T> {
        &self.selection
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.internal_index()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selection.current_value()
    }

    pub fn sync_state(&self) -> SyncState {
        self.selection.state()
    }

    /// Replaces the images. Returns a value to emit to the parent when the gallery selected
    /// its first image on its own.
    pub fn set_items(&mut self, items: Vec<T>) -> Option<T> {
        let len = items.len();
        let emitted = self.selection.set_items(items);
        self.strip.set_item_count(len);
        self.follow_selection();
        emitted
    }

    /// Applies the parent's current value. Returns whether the selection moved.
    pub fn on_external_value(&mut self, value: Option<T>) -> bool {
        let changed = self.selection.on_external_value(value);
        self.follow_selection();
        changed
    }

    /// Thumbnail click. Returns the value to emit to the parent.
    pub fn select(&mut self, index: usize) -> Option<T> {
        let emitted = self.selection.navigate_to(index);
        self.follow_selection();
        emitted
    }

    /// Main-image "next" arrow, wrapping at the end.
    pub fn next(&mut self) -> Option<T> {
        let emitted = self.selection.step_forward_wrapping();
        self.follow_selection();
        emitted
    }

    /// Main-image "previous" arrow, wrapping at the start.
    pub fn prev(&mut self) -> Option<T> {
        let emitted = self.selection.step_backward_wrapping();
        self.follow_selection();
        emitted
    }

    /// Re-resolved thumbnail count after a resize.
    pub fn set_visible_count(&mut self, visible_count: usize) -> Result<bool> {
        let changed = self.strip.set_visible_count(visible_count)?;
        self.follow_selection();
        Ok(changed)
    }

    /// Swiping the thumbnail strip scrolls it without changing the selection.
    pub fn apply_strip_drag(&mut self, outcome: DragOutcome) -> bool {
        self.strip.apply_drag(outcome)
    }

    fn follow_selection(&mut self) {
        if let Some(index) = self.selection.internal_index() {
            self.strip.ensure_visible(index);
        }
    }
}
