use alloc::string::String;
use alloc::vec::Vec;

/// Values that can be reconciled against an item list.
///
/// Exact matching uses `PartialEq`; the closest-match fallback compares `match_text()`
/// case-insensitively.
pub trait ReconcileValue: PartialEq {
    fn match_text(&self) -> &str;
}

impl<T: PartialEq + AsRef<str>> ReconcileValue for T {
    fn match_text(&self) -> &str {
        self.as_ref()
    }
}

/// Where a [`ControlledIndex`] stands relative to its parent's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyncState {
    /// No external value has been supplied yet.
    #[default]
    Uncontrolled,
    /// The last external value has been reconciled. The index follows it when it matched an
    /// item and is kept otherwise.
    Synced,
    /// An internal navigation was emitted and its echo has not arrived yet.
    Pending,
}

/// Reconciles a parent-controlled "current value" with an internally tracked index.
///
/// The parent owns the value; the component owns the index. Navigating internally emits a
/// value for the parent and arms a one-shot suppression so the parent's echo of that value is
/// absorbed instead of being re-matched. This breaks the
/// internal change -> parent update -> external value -> internal change loop.
///
/// External values that do not match any item exactly fall back to a case-insensitive
/// substring match in either direction, used only when exactly one item qualifies. Otherwise
/// the previous index is kept, so a transient non-match never resets the user's place.
#[derive(Clone, Debug)]
pub struct ControlledIndex<T> {
    items: Vec<T>,
    external: Option<T>,
    internal: Option<usize>,
    suppress_next_external_sync: bool,
    state: SyncState,
    initialized: bool,
}

impl<T> Default for ControlledIndex<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            external: None,
            internal: None,
            suppress_next_external_sync: false,
            state: SyncState::Uncontrolled,
            initialized: false,
        }
    }
}

impl<T: ReconcileValue + Clone> ControlledIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn internal_index(&self) -> Option<usize> {
        self.internal
    }

    pub fn external_value(&self) -> Option<&T> {
        self.external.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The item at the internal index, if any.
    pub fn current_value(&self) -> Option<&T> {
        self.internal.and_then(|i| self.items.get(i))
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppress_next_external_sync
    }

    /// Navigates internally and returns the value to emit to the parent.
    ///
    /// Out-of-bounds indexes are ignored and return `None`.
    pub fn navigate_to(&mut self, index: usize) -> Option<T> {
        let Some(value) = self.items.get(index).cloned() else {
            cwarn!(
                index,
                len = self.items.len(),
                "ControlledIndex::navigate_to: out-of-bounds index"
            );
            return None;
        };
        ctrace!(index, "ControlledIndex::navigate_to");
        self.internal = Some(index);
        self.suppress_next_external_sync = true;
        self.state = SyncState::Pending;
        Some(value)
    }

    /// Navigates to the next item, wrapping past the end.
    pub fn step_forward_wrapping(&mut self) -> Option<T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let next = self.internal.map_or(0, |i| (i + 1) % len);
        self.navigate_to(next)
    }

    /// Navigates to the previous item, wrapping past the start.
    pub fn step_backward_wrapping(&mut self) -> Option<T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let prev = match self.internal {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.navigate_to(prev)
    }

    /// Applies a value asserted by the parent.
    ///
    /// Returns `true` when the internal index changed.
    pub fn on_external_value(&mut self, value: Option<T>) -> bool {
        self.external = value;
        if self.suppress_next_external_sync {
            ctrace!("ControlledIndex::on_external_value: absorbed echo");
            self.suppress_next_external_sync = false;
            self.state = SyncState::Synced;
            return false;
        }
        self.sync_from_external()
    }

    /// Replaces the item list.
    ///
    /// The first time a non-empty list arrives while the parent has not supplied a value, the
    /// first item is selected and returned for emission. Otherwise the current external value
    /// is re-matched against the new list, unless an internal navigation is still waiting for
    /// its echo.
    pub fn set_items(&mut self, items: Vec<T>) -> Option<T> {
        self.items = items;
        if let Some(i) = self.internal {
            self.internal = match self.items.len() {
                0 => None,
                len => Some(i.min(len - 1)),
            };
        }
        if self.suppress_next_external_sync {
            // `external` still holds the value from before our navigation; the echo decides.
            ctrace!("ControlledIndex::set_items: navigation pending, skipping re-match");
            return None;
        }
        if self.external.is_none() && !self.items.is_empty() && !self.initialized {
            self.initialized = true;
            cdebug!(
                len = self.items.len(),
                "ControlledIndex::set_items: initializing to first item"
            );
            return self.navigate_to(0);
        }
        self.sync_from_external();
        None
    }

    fn sync_from_external(&mut self) -> bool {
        let Some(value) = self.external.as_ref() else {
            return false;
        };
        let Some(index) = find_match(&self.items, value) else {
            ctrace!("ControlledIndex: no match, keeping previous index");
            if self.state == SyncState::Uncontrolled {
                self.state = SyncState::Synced;
            }
            return false;
        };
        // A parent value supersedes any earlier first-item initialization.
        self.initialized = true;
        self.state = SyncState::Synced;
        let changed = self.internal != Some(index);
        self.internal = Some(index);
        changed
    }
}

/// Finds the position of `value` in `items`: exact match first, then a unique
/// case-insensitive substring match in either direction.
pub fn find_match<T: ReconcileValue>(items: &[T], value: &T) -> Option<usize> {
    if let Some(i) = items.iter().position(|item| item == value) {
        return Some(i);
    }
    let needle = value.match_text().to_lowercase();
    let mut found = None;
    for (i, item) in items.iter().enumerate() {
        let hay: String = item.match_text().to_lowercase();
        if hay.contains(needle.as_str()) || needle.contains(hay.as_str()) {
            if found.is_some() {
                return None;
            }
            found = Some(i);
        }
    }
    found
}
