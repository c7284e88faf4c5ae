//! Logging entry points
//!
//! Each macro captures its own call site and writes one line to stdout:
//!
//! ```
//! dnis::info!("listening");
//! dnis::warning!("retry {} of {}", 2, 5);
//! let cause = String::from("sink closed");
//! dnis::error!(cause);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __dnis_log {
    ($level:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::logging::log(
            $level,
            &$crate::call_site!(),
            ::core::format_args!($fmt $(, $($arg)+)?),
        )
    };
    ($level:expr, $msg:expr $(,)?) => {
        $crate::logging::log($level, &$crate::call_site!(), &$msg)
    };
}

/// Log at debug severity.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__dnis_log!($crate::logging::Severity::Debug, $($arg)+)
    };
}

/// Log at info severity.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__dnis_log!($crate::logging::Severity::Info, $($arg)+)
    };
}

/// Log at warning severity.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::__dnis_log!($crate::logging::Severity::Warning, $($arg)+)
    };
}

/// Log at error severity.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__dnis_log!($crate::logging::Severity::Error, $($arg)+)
    };
}
