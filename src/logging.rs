//! Internal logging macros.
//!
//! Records go through the `log` facade when the `logging` feature is on and
//! expand to nothing otherwise. The library never installs a logger.

#[cfg(feature = "logging")]
macro_rules! engine_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "chess_rules", $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
macro_rules! engine_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "chess_rules", $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_trace {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use engine_debug;
pub(crate) use engine_trace;
