//! Native automation boundary.
//!
//! Everything the window-identity model needs from the native automation
//! library is expressed as one trait method per capability, returning an
//! explicit `Result`. The native layer's process-wide error flag never
//! escapes this module: the Windows backend folds it into the return value
//! of each call.

use std::sync::Arc;

mod wide;

#[cfg(windows)]
mod autoit;
#[cfg(not(windows))]
mod stub;

#[cfg(windows)]
pub use autoit::AutoItBackend;
#[cfg(not(windows))]
pub use stub::StubBackend;

pub use wide::{from_wide, to_wide};

/// Size of the fixed output buffers handed to native text-returning calls.
pub const BUFFER_SIZE: usize = 65_536;

/// Fixed arity of the native menu-selection call: one menu plus seven
/// submenu levels.
pub const MENU_ITEM_SLOTS: usize = 8;

/// Raw failure outcomes the native boundary can report beyond success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NativeError {
    /// The native layer flagged the preceding call as failed.
    #[error("native call failed")]
    Failed,

    /// The capability is not supported on this platform or OS version.
    #[error("capability not supported on this platform")]
    Unsupported,
}

/// One method per native capability.
///
/// All methods take the (title, text) match pair; the native layer performs
/// the actual window resolution on every call. Implementations must be safe
/// to share across threads; the Windows backend serializes calls internally
/// because the underlying library is not thread-safe.
pub trait NativeBackend: Send + Sync {
    fn win_exists(&self, title: &str, text: &str) -> bool;

    /// Block until a matching window appears or `timeout_secs` elapses.
    /// A timeout of 0 waits indefinitely. Returns whether a match was found.
    fn win_wait(&self, title: &str, text: &str, timeout_secs: u32) -> bool;

    /// Request focus. Callers confirm with [`NativeBackend::win_active`].
    fn win_activate(&self, title: &str, text: &str);

    fn win_active(&self, title: &str, text: &str) -> bool;

    /// Combined state bitmask (exists/visible/enabled/active/min/max).
    fn win_state(&self, title: &str, text: &str) -> Result<u32, NativeError>;

    fn win_pos_x(&self, title: &str, text: &str) -> Result<i32, NativeError>;
    fn win_pos_y(&self, title: &str, text: &str) -> Result<i32, NativeError>;
    fn win_width(&self, title: &str, text: &str) -> Result<i32, NativeError>;
    fn win_height(&self, title: &str, text: &str) -> Result<i32, NativeError>;

    fn win_text(&self, title: &str, text: &str) -> Result<String, NativeError>;
    fn win_title(&self, title: &str, text: &str) -> Result<String, NativeError>;

    /// Numeric window handle as the native layer's string rendering.
    fn win_handle(&self, title: &str, text: &str) -> Result<String, NativeError>;

    fn win_pid(&self, title: &str, text: &str) -> Result<u32, NativeError>;

    /// Raw newline-delimited class-list buffer, unparsed.
    fn win_class_list(&self, title: &str, text: &str) -> Result<String, NativeError>;

    /// Graceful close request (close-button click equivalent).
    fn win_close(&self, title: &str, text: &str);

    /// Forced termination. Native failure is a normal outcome for some
    /// window classes and is not reported.
    fn win_kill(&self, title: &str, text: &str);

    fn win_move(
        &self,
        title: &str,
        text: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), NativeError>;

    fn win_set_on_top(&self, title: &str, text: &str, on_top: bool) -> Result<(), NativeError>;

    /// Set window transparency. `Unsupported` is the native 0-return
    /// sentinel for OS versions without transparency support.
    fn win_set_trans(&self, title: &str, text: &str, level: u8) -> Result<(), NativeError>;

    /// Select a menu item path. The slice always has [`MENU_ITEM_SLOTS`]
    /// entries; unused slots are empty strings.
    fn win_menu_select(
        &self,
        title: &str,
        text: &str,
        items: &[String; MENU_ITEM_SLOTS],
    ) -> Result<(), NativeError>;

    fn statusbar_text(&self, title: &str, text: &str, part: u32) -> Result<String, NativeError>;

    /// Class-name identifier of the control holding input focus within the
    /// window.
    fn control_with_focus(&self, title: &str, text: &str) -> Result<String, NativeError>;
}

/// The process default backend for this platform.
#[cfg(windows)]
pub fn default_backend() -> Arc<dyn NativeBackend> {
    Arc::new(AutoItBackend)
}

/// The process default backend for this platform.
///
/// Off Windows the native automation library is unavailable; every
/// capability reports [`NativeError::Unsupported`].
#[cfg(not(windows))]
pub fn default_backend() -> Arc<dyn NativeBackend> {
    Arc::new(StubBackend)
}
