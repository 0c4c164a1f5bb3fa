/// Layout fractions for a carousel track, expressed in percent of the viewport width.
///
/// A renderer typically applies these as:
/// - each item: `width: {item_width}%` of the viewport
/// - the track: `width: {track_width}%`
/// - the track transform: `translateX(-{translate}%)`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_width: f32,
    pub track_width: f32,
    pub translate: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Result of resolving a finished drag/swipe gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragOutcome {
    /// The drag stayed below the threshold.
    #[default]
    None,
    StepBackward,
    StepForward,
}
