//! Adapter utilities for the `carousel-engine` crate.
//!
//! The engine crate is UI-agnostic and focuses on the core window math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Autoplay for rotating heroes and story widgets
//! - Drag/swipe tracking with a navigation threshold
//! - Debounced viewport resizing
//! - A gallery composition (thumbnail strip + parent-controlled selection)
//!
//! Time is always passed in as `now_ms`; nothing here reads a clock or spawns a timer.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod controller;
mod drag;
mod gallery;
mod resize;

#[cfg(test)]
mod tests;

pub use autoplay::{AutoplayTimer, TickCallback};
pub use controller::{Controller, ControllerOptions};
pub use drag::DragGesture;
pub use gallery::Gallery;
pub use resize::ResizeDebounce;
