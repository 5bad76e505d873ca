#![macro_use]

macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: "seqkit", $($arg)+);
    )
}

macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: "seqkit", $($arg)+);
    )
}

/// Traces a buffer reallocation if the capacity moved between `before` and `after`.
macro_rules! trace_realloc {
    ($op:expr, $before:expr, $after:expr) => ({
        let (op, before, after): (&str, usize, usize) = ($op, $before, $after);
        if before != after {
            trace!("{}: capacity {} -> {}", op, before, after);
        }
        #[cfg(not(feature = "logging"))]
        let _ = op;
    })
}
