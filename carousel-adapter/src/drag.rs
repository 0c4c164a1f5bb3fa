use carousel::{DragOutcome, Geometry, Result, resolve_drag_delta};

/// Tracks a single horizontal drag/swipe from pointer-down to pointer-up.
///
/// Positions are in the adapter's pixel space; only the difference between the start and the
/// current position matters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragGesture {
    start_x: Option<f32>,
    current_x: f32,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.current_x = x;
    }

    /// Records pointer movement. Ignored when no drag is active.
    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.current_x = x;
        }
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Pointer travel since `begin`; `0.0` when idle.
    pub fn delta(&self) -> f32 {
        self.start_x.map_or(0.0, |start| self.current_x - start)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Finishes the drag at `x` and decides whether it navigates.
    ///
    /// Ending a drag that was never started resolves to [`DragOutcome::None`].
    pub fn end(&mut self, x: f32, item_px: f32, threshold_px: f32) -> Result<DragOutcome> {
        let Some(start) = self.start_x.take() else {
            return Ok(DragOutcome::None);
        };
        self.current_x = x;
        resolve_drag_delta(x - start, item_px, threshold_px)
    }

    /// The track translation (percent) while the content follows the pointer.
    ///
    /// `item_px` is the rendered width of one item; non-positive widths disable following.
    pub fn live_translate(&self, geometry: Geometry, item_px: f32) -> f32 {
        if !self.is_active() || item_px.is_nan() || item_px <= 0.0 {
            return geometry.translate;
        }
        geometry.translate - self.delta() / item_px * geometry.item_width
    }
}
