//! Logging shim so driver code can log through defmt when the feature is
//! enabled and compile to an empty block when it is not.
//!
//! The macros are named to avoid colliding with the built-in `warn`
//! attribute and re-exported under the short names for call sites.

macro_rules! log_warn {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    }};
}

macro_rules! log_debug {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
    }};
}

pub(crate) use {log_debug as debug, log_warn as warn};
