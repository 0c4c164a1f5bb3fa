use alloc::vec::Vec;

use crate::{Error, Result};

/// One row of a [`BreakpointTable`]: viewports up to and including `max_width` show
/// `visible_count` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub max_width: u32,
    pub visible_count: usize,
}

impl Breakpoint {
    pub const fn new(max_width: u32, visible_count: usize) -> Self {
        Self {
            max_width,
            visible_count,
        }
    }
}

/// An ordered set of width breakpoints plus the count used for wider viewports.
///
/// Tables are validated on construction and immutable afterwards, so resolving a width never
/// fails. Entries are kept sorted ascending by `max_width`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
    default_count: usize,
}

impl BreakpointTable {
    /// Builds a table from `entries` and the `default_count` used when a width exceeds every
    /// entry.
    ///
    /// Fails with a configuration error when `entries` is empty or any count is zero.
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>, default_count: usize) -> Result<Self> {
        let mut entries: Vec<Breakpoint> = entries.into_iter().collect();
        if entries.is_empty() {
            cwarn!("BreakpointTable::new: empty table");
            return Err(Error::EmptyBreakpointTable);
        }
        if let Some(bad) = entries.iter().find(|b| b.visible_count == 0) {
            cwarn!(max_width = bad.max_width, "BreakpointTable::new: zero visible count");
            return Err(Error::ZeroBreakpointCount {
                max_width: bad.max_width,
            });
        }
        if default_count == 0 {
            return Err(Error::ZeroDefaultCount);
        }
        entries.sort_by_key(|b| b.max_width);
        cdebug!(
            entries = entries.len(),
            default_count,
            "BreakpointTable::new"
        );
        Ok(Self {
            entries,
            default_count,
        })
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// The count used for the narrowest viewports.
    pub fn narrowest(&self) -> usize {
        self.entries
            .first()
            .map_or(self.default_count, |b| b.visible_count)
    }

    /// The count used for viewports wider than every entry.
    pub fn widest(&self) -> usize {
        self.default_count
    }

    pub fn resolve(&self, width: f32) -> usize {
        resolve_visible_count(width, self)
    }
}

/// Maps a viewport width to a visible item count.
///
/// Returns the count of the first entry whose `max_width >= width` (inclusive), or the table's
/// default when the width exceeds every entry. Non-positive and NaN widths fall into the
/// narrowest bucket.
pub fn resolve_visible_count(width: f32, table: &BreakpointTable) -> usize {
    if width.is_nan() || width <= 0.0 {
        return table.narrowest();
    }
    table
        .entries
        .iter()
        .find(|b| b.max_width as f32 >= width)
        .map_or(table.default_count, |b| b.visible_count)
}
