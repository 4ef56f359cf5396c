//! Debug logging infrastructure for frame layout and lowering.
//!
//! This module provides feature-gated debug logging that compiles to nothing
//! when the `debug-lowering` feature is disabled, ensuring zero runtime cost
//! in production builds.

/// Debug logging macro that compiles to nothing when `debug-lowering` feature is disabled.
///
/// # Examples
///
/// ```ignore
/// debug_lowering!("argument_displacement(index={}): offset={}, own={}", index, offset, own);
/// ```
#[cfg(feature = "debug-lowering")]
#[macro_export]
macro_rules! debug_lowering {
    ($($arg:tt)*) => {
        {
            // Use core::fmt for no_std compatibility
            // In tests, this will print to stderr via std::eprintln!
            #[cfg(test)]
            {
                extern crate std;
                std::eprintln!("[DEBUG] {}", core::format_args!($($arg)*));
            }
            #[cfg(not(test))]
            {
                let _ = core::format_args!($($arg)*);
            }
        }
    };
}

/// Debug logging macro that compiles to nothing when `debug-lowering` feature is disabled.
#[cfg(not(feature = "debug-lowering"))]
#[macro_export]
macro_rules! debug_lowering {
    ($($arg:tt)*) => {
        // Compile to nothing when feature is disabled
    };
}
