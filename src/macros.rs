//! Small crate-wide convenience macros.

/// Log to the browser console, but only in debug builds.
///
/// Release builds skip the call (the `cfg!` branch is constant-folded).
///
/// ```rust,ignore
/// debug_log!("search {:?} -> {} options", query, options.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::macros::console_log(&format!($($arg)*));
        }
    };
}

/// Mutable borrow of component state.  Callers keep the guard inside one
/// synchronous step; it is never held across an `.await`.
#[macro_export]
macro_rules! mut_borrow {
    ($cell:expr) => {
        $cell.borrow_mut()
    };
}

/// Console sink behind `debug_log!`.  Native test builds have no console, so
/// they print to stderr instead of calling into JS.
#[doc(hidden)]
pub fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", msg);
}

/// Warning counterpart of [`console_log`]; used for absorbed failures.
pub fn console_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {}", msg);
}
