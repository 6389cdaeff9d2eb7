// Forwards to the `log` facade when the `log` feature is enabled and
// expands to nothing otherwise.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}
