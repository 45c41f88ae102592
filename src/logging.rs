/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. Errors should continue using
/// `leptos::logging::error!` directly so they always reach the console.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use junction_map::logging::log;
///
/// let count = 3;
/// log!("Loaded {} junctions", count);
/// ```
/// Conditionally log in development builds
///
/// Forwards to `leptos::logging::log!`, which writes to the browser console on
/// wasm and to stderr elsewhere. In production release builds it compiles to
/// nothing.
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg)+);
        }
    };
}

pub use crate::log;
