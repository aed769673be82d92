//! Non-Windows stand-in for the native automation backend.
//!
//! The automation DLL only exists on Windows. Off Windows every capability
//! reports `Unsupported` so library consumers get a typed error instead of a
//! link failure, and the crate's unit tests run everywhere through injected
//! mock backends.

use super::{MENU_ITEM_SLOTS, NativeBackend, NativeError};

pub struct StubBackend;

impl NativeBackend for StubBackend {
    fn win_exists(&self, _title: &str, _text: &str) -> bool {
        false
    }

    fn win_wait(&self, _title: &str, _text: &str, _timeout_secs: u32) -> bool {
        false
    }

    fn win_activate(&self, _title: &str, _text: &str) {}

    fn win_active(&self, _title: &str, _text: &str) -> bool {
        false
    }

    fn win_state(&self, _title: &str, _text: &str) -> Result<u32, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_pos_x(&self, _title: &str, _text: &str) -> Result<i32, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_pos_y(&self, _title: &str, _text: &str) -> Result<i32, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_width(&self, _title: &str, _text: &str) -> Result<i32, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_height(&self, _title: &str, _text: &str) -> Result<i32, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_text(&self, _title: &str, _text: &str) -> Result<String, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_title(&self, _title: &str, _text: &str) -> Result<String, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_handle(&self, _title: &str, _text: &str) -> Result<String, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_pid(&self, _title: &str, _text: &str) -> Result<u32, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_class_list(&self, _title: &str, _text: &str) -> Result<String, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_close(&self, _title: &str, _text: &str) {}

    fn win_kill(&self, _title: &str, _text: &str) {}

    fn win_move(
        &self,
        _title: &str,
        _text: &str,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
    ) -> Result<(), NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_set_on_top(&self, _title: &str, _text: &str, _on_top: bool) -> Result<(), NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_set_trans(&self, _title: &str, _text: &str, _level: u8) -> Result<(), NativeError> {
        Err(NativeError::Unsupported)
    }

    fn win_menu_select(
        &self,
        _title: &str,
        _text: &str,
        _items: &[String; MENU_ITEM_SLOTS],
    ) -> Result<(), NativeError> {
        Err(NativeError::Unsupported)
    }

    fn statusbar_text(&self, _title: &str, _text: &str, _part: u32) -> Result<String, NativeError> {
        Err(NativeError::Unsupported)
    }

    fn control_with_focus(&self, _title: &str, _text: &str) -> Result<String, NativeError> {
        Err(NativeError::Unsupported)
    }
}
