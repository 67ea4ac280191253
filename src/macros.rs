//! Call-site macros. They format with `format_args!` (checked at compile time) and capture
//! the source location, which the logger keeps only when location prefixing is on.
//!
//! ```
//! use lightlog::{Logger, Level, output::TerminalOutput};
//!
//! let log = Logger::builder().level(Level::Info).output(TerminalOutput::plain()).build();
//! lightlog::error!(log, "Disk {}", "full");
//! lightlog::info!(log, tag: "NET", "connected to {}:{}", "10.0.0.1", 80);
//! assert!(lightlog::debug!(log, "x={}", 5));
//! ```

/// Path of the enclosing function, e.g. `my_app::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

#[macro_export]
macro_rules! location {
    () => {
        $crate::fmt::Location::new(file!(), line!(), $crate::function_name!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            ::std::option::Option::Some($tag),
            ::std::option::Option::Some($crate::location!()),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $logger:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            ::std::option::Option::None,
            ::std::option::Option::Some($crate::location!()),
            format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! critical {
    ($($t:tt)+) => { $crate::__log!($crate::Level::Critical, $($t)+) };
}

#[macro_export]
macro_rules! error {
    ($($t:tt)+) => { $crate::__log!($crate::Level::Error, $($t)+) };
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)+) => { $crate::__log!($crate::Level::Warn, $($t)+) };
}

#[macro_export]
macro_rules! info {
    ($($t:tt)+) => { $crate::__log!($crate::Level::Info, $($t)+) };
}

#[macro_export]
macro_rules! verbose {
    ($($t:tt)+) => { $crate::__log!($crate::Level::Verbose, $($t)+) };
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)+) => { $crate::__log!($crate::Level::Debug, $($t)+) };
}

/// Styled, level-less line: `formatted!(log, Attribute::Bold, Color::Cyan, "...")`.
#[macro_export]
macro_rules! formatted {
    ($logger:expr, tag: $tag:expr, $attr:expr, $color:expr, $($arg:tt)+) => {
        $logger.formatted(::std::option::Option::Some($tag), $attr, $color, format_args!($($arg)+))
    };
    ($logger:expr, $attr:expr, $color:expr, $($arg:tt)+) => {
        $logger.formatted(::std::option::Option::None, $attr, $color, format_args!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_func {
    ($level:expr, $logger:expr) => {
        $crate::__log!($level, $logger, "Entering: {}.", $crate::function_name!())
    };
}

/// `Entering: <function>.` at INFO.
#[macro_export]
macro_rules! info_func {
    ($logger:expr) => {
        $crate::__log_func!($crate::Level::Info, $logger)
    };
}

/// `Entering: <function>.` at VERBOSE.
#[macro_export]
macro_rules! verbose_func {
    ($logger:expr) => {
        $crate::__log_func!($crate::Level::Verbose, $logger)
    };
}

/// `Entering: <function>.` at DEBUG.
#[macro_export]
macro_rules! debug_func {
    ($logger:expr) => {
        $crate::__log_func!($crate::Level::Debug, $logger)
    };
}

/// Same as [`debug_func!`].
#[macro_export]
macro_rules! log_func {
    ($logger:expr) => {
        $crate::debug_func!($logger)
    };
}

/// INFO, but only the first time this call site runs. Always evaluates to INFO's
/// nominal result.
#[macro_export]
macro_rules! info_once {
    ($logger:expr, $($arg:tt)+) => {{
        static ONCE: ::std::sync::Once = ::std::sync::Once::new();
        ONCE.call_once(|| {
            let _ = $crate::info!($logger, $($arg)+);
        });
        $crate::Level::Info.nominal_result()
    }};
}
