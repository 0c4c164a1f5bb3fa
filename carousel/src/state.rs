/// A lightweight snapshot of a carousel's window state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub item_count: usize,
    pub visible_count: usize,
    /// Index of the leftmost visible item.
    pub offset: usize,
}

impl CarouselState {
    /// Largest valid offset: `max(0, item_count - visible_count)`.
    pub fn max_offset(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    pub fn at_start(&self) -> bool {
        self.offset == 0
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset()
    }
}
