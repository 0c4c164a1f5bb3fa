//! Error types for the carousel engine.

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Both kinds are programmer errors: they are never retried and never recovered from
/// internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid construction input (empty breakpoint table, zero counts, bad drag parameters).
    Configuration,
    /// Invalid runtime mutation of an already constructed engine.
    InvalidConfig,
}

/// All possible errors from the carousel engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    // Configuration errors
    #[error("breakpoint table has no entries")]
    EmptyBreakpointTable,

    #[error("breakpoint at max_width {max_width} has a visible count of 0")]
    ZeroBreakpointCount { max_width: u32 },

    #[error("default visible count of a breakpoint table must be at least 1")]
    ZeroDefaultCount,

    #[error("visible count must be at least 1")]
    ZeroVisibleCount,

    #[error("drag threshold must be finite and non-negative, got {0}")]
    InvalidDragThreshold(f32),

    #[error("item pixel width must be finite and positive, got {0}")]
    InvalidItemWidth(f32),

    #[error("autoplay interval must be at least 1ms")]
    ZeroAutoplayInterval,

    // Runtime mutation errors
    #[error("cannot set visible count to {0}: must be at least 1")]
    InvalidVisibleCount(usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVisibleCount(_) => ErrorKind::InvalidConfig,
            Self::EmptyBreakpointTable
            | Self::ZeroBreakpointCount { .. }
            | Self::ZeroDefaultCount
            | Self::ZeroVisibleCount
            | Self::InvalidDragThreshold(_)
            | Self::InvalidItemWidth(_)
            | Self::ZeroAutoplayInterval => ErrorKind::Configuration,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = core::result::Result<T, Error>;
