// Same entry point as the core crate, tagged with this crate's target. Events are emitted when
// `carousel/tracing` is on, which this crate's `tracing` feature enables.

macro_rules! ctrace {
    ($($tt:tt)*) => { carousel::__carousel_log!(trace, "carousel_adapter", $($tt)*) };
}

macro_rules! cdebug {
    ($($tt:tt)*) => { carousel::__carousel_log!(debug, "carousel_adapter", $($tt)*) };
}

macro_rules! cwarn {
    ($($tt:tt)*) => { carousel::__carousel_log!(warn, "carousel_adapter", $($tt)*) };
}
