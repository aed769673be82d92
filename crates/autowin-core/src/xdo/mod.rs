//! Facade over the X11 command-line automation toolchain.
//!
//! Every operation shells out to one of the declared executables and parses
//! its stdout textually. The tools own all of the actual X11 protocol work;
//! nothing here talks to the display server directly.

pub mod errors;
pub mod handler;
pub mod tools;

pub use errors::XdoError;
pub use handler::{
    Selection, activate_window, active_window, kill_window, read_selection, search,
    window_geometry, write_selection,
};
pub use tools::XTool;
