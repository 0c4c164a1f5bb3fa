//! A headless windowed carousel engine.
//!
//! For adapter-level utilities (autoplay, drag tracking, debounced resize), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the state behind sliders and carousels: mapping a viewport width to a
//! visible item count, keeping a window offset clamped while datasets and viewports change,
//! deriving the layout fractions a renderer needs, and reconciling a parent-controlled
//! "current value" with an internally navigated index.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the item count (or item values, for controlled selection)
//! - viewport width measurements
//! - discrete interaction events (prev/next, pager dots, drag release)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod breakpoints;
mod engine;
mod error;
mod options;
mod reconcile;
mod state;
mod types;


pub use breakpoints::{Breakpoint, BreakpointTable, resolve_visible_count};
pub use engine::{CarouselEngine, resolve_drag_delta};
pub use error::{Error, ErrorKind, Result};
pub use options::{CarouselOptions, OnChangeCallback};
pub use reconcile::{ControlledIndex, ReconcileValue, SyncState, find_match};
pub use state::CarouselState;
pub use types::{DragOutcome, Geometry, WindowRange};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}
