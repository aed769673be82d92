//! Window-identity model over the native automation library.
//!
//! A window is addressed by a (title, text) match pair, not a handle. The
//! pair is re-resolved by the native layer on every call, so a window that
//! closes after construction is only noticed on the next access.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::WindowError;
pub use handler::{Window, exists, wait};
pub use types::{ControlRef, WindowIdent, WindowRect, WindowState};
