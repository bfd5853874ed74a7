//! Emission macros, one per severity.
//!
//! ```ignore
//! lvlog::warn!(logger, "disk low: {}%", 87);  // format template
//! lvlog::error!(logger; "conn lost", peer);   // values, space separated
//! ```
//!
//! Both forms expand to a direct method call at the invocation site, so the
//! recorded call site is the macro's, and nothing is formatted when the
//! logger's threshold suppresses the call.

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($logger:expr, $values:ident, $template:ident; $($value:expr),+ $(,)?) => {
        $logger.$values($crate::logger::Values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
    ($logger:expr, $values:ident, $template:ident, $($arg:tt)+) => {
        $logger.$template(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!($logger, debug, debugf; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, debug, debugf, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!($logger, info, infof; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, info, infof, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!($logger, warn, warnf; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, warn, warnf, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!($logger, error, errorf; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, error, errorf, $($arg)+)
    };
}

/// Exits the process with status 1 after writing, unless suppressed.
#[macro_export]
macro_rules! fatal {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit!($logger, fatal, fatalf; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, fatal, fatalf, $($arg)+)
    };
}
