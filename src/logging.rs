//! Console Logging
//!
//! `console_log!` and `console_warn!` are debug-only. `console_error!` is
//! always emitted. On wasm32 they write to the browser console, elsewhere
//! to stderr.

#[doc(hidden)]
pub fn emit(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Info => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[{:?}] {}", level, message);
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub enum Level {
    Info,
    Warn,
    Error,
}

macro_rules! console_log {
    ($($arg:tt)*) => {{
        if cfg!(debug_assertions) {
            $crate::logging::emit($crate::logging::Level::Info, &format!($($arg)*));
        }
    }};
}

macro_rules! console_warn {
    ($($arg:tt)*) => {{
        if cfg!(debug_assertions) {
            $crate::logging::emit($crate::logging::Level::Warn, &format!($($arg)*));
        }
    }};
}

macro_rules! console_error {
    ($($arg:tt)*) => {{
        $crate::logging::emit($crate::logging::Level::Error, &format!($($arg)*));
    }};
}
