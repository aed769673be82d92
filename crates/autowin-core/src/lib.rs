//! autowin-core: thin bindings for desktop window automation.
//!
//! This library wraps two external automation layers without reimplementing
//! any of their logic:
//!
//! - [`window`] - a window-identity model over the native automation DLL on
//!   Windows. A window is addressed by a (title, text) match pair, never by a
//!   cached handle; every accessor re-resolves the window through the native
//!   layer and surfaces native failures as typed errors.
//! - [`xdo`] - a facade over the X11 command-line toolchain (xdotool, xsel,
//!   xwininfo, xkill). Each operation shells out and parses stdout.
//!
//! # Main Entry Points
//!
//! - [`window::Window`] - open a window handle and query/mutate it
//! - [`xdo`] - X11 tool invocations
//! - [`config`] - configuration loading
//! - [`logging::init_logging`] - structured JSON logging setup

pub mod config;
pub mod errors;
pub mod logging;
pub mod native;
pub mod window;
pub mod xdo;

// Re-export commonly used types at crate root for convenience
pub use config::AutowinConfig;
pub use errors::AutowinError;
pub use native::{NativeBackend, NativeError};
pub use window::{ControlRef, Window, WindowIdent, WindowRect, WindowState};

// Re-export logging initialization
pub use logging::init_logging;

/// Library version, read from the co-located `VERSION` file.
pub fn version() -> &'static str {
    include_str!("../VERSION").trim()
}
