//! Logging plumbing.
//!
//! All events go through `__carousel_log!`, which forwards to `tracing` when this crate's
//! `tracing` feature is enabled and expands to nothing otherwise. The level is a `tracing`
//! macro name and the target is fixed per crate by the short wrappers below; the adapter
//! crate defines its own wrappers over the same entry point.

#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! __carousel_log {
    ($level:ident, $target:literal, $($tt:tt)*) => {
        $crate::__private::tracing::$level!(target: $target, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __carousel_log {
    ($level:ident, $target:literal, $($tt:tt)*) => {};
}

macro_rules! ctrace {
    ($($tt:tt)*) => { $crate::__carousel_log!(trace, "carousel", $($tt)*) };
}

macro_rules! cdebug {
    ($($tt:tt)*) => { $crate::__carousel_log!(debug, "carousel", $($tt)*) };
}

macro_rules! cwarn {
    ($($tt:tt)*) => { $crate::__carousel_log!(warn, "carousel", $($tt)*) };
}
