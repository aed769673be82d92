//! Windows backend over the AutoItX3 automation DLL.
//!
//! Every capability is a fixed-signature import: wide strings in, a long
//! out, or a wide output buffer plus length. The DLL reports failure of the
//! immediately preceding call through a process-wide flag (`AU3_error`), so
//! each call-plus-flag-read pair runs under one mutex and the flag is folded
//! into the returned `Result` before the lock is released. The DLL itself is
//! still single-threaded; the mutex makes concurrent use safe, not parallel.

use std::sync::Mutex;

use super::wide::{from_wide, to_wide};
use super::{BUFFER_SIZE, MENU_ITEM_SLOTS, NativeBackend, NativeError};

// SAFETY: FFI declarations for the AutoItX3 automation DLL. All functions
// take NUL-terminated UTF-16 strings; text-returning functions fill a
// caller-provided buffer of `nBufSize` wide characters.
#[link(name = "AutoItX3")]
unsafe extern "system" {
    fn AU3_error() -> i32;
    fn AU3_WinExists(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinWait(title: *const u16, text: *const u16, timeout: i32) -> i32;
    fn AU3_WinActivate(title: *const u16, text: *const u16);
    fn AU3_WinActive(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinGetState(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinGetPosX(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinGetPosY(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinGetPosWidth(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinGetPosHeight(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinGetText(title: *const u16, text: *const u16, buf: *mut u16, buf_size: i32);
    fn AU3_WinGetTitle(title: *const u16, text: *const u16, buf: *mut u16, buf_size: i32);
    fn AU3_WinGetHandle(title: *const u16, text: *const u16, buf: *mut u16, buf_size: i32);
    fn AU3_WinGetProcess(title: *const u16, text: *const u16, buf: *mut u16, buf_size: i32);
    fn AU3_WinGetClassList(title: *const u16, text: *const u16, buf: *mut u16, buf_size: i32);
    fn AU3_WinClose(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinKill(title: *const u16, text: *const u16) -> i32;
    fn AU3_WinMove(
        title: *const u16,
        text: *const u16,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> i32;
    fn AU3_WinSetOnTop(title: *const u16, text: *const u16, flag: i32) -> i32;
    fn AU3_WinSetTrans(title: *const u16, text: *const u16, level: i32) -> i32;
    fn AU3_WinMenuSelectItem(
        title: *const u16,
        text: *const u16,
        item1: *const u16,
        item2: *const u16,
        item3: *const u16,
        item4: *const u16,
        item5: *const u16,
        item6: *const u16,
        item7: *const u16,
        item8: *const u16,
    ) -> i32;
    fn AU3_StatusbarGetText(
        title: *const u16,
        text: *const u16,
        part: i32,
        buf: *mut u16,
        buf_size: i32,
    );
    fn AU3_ControlGetFocus(title: *const u16, text: *const u16, buf: *mut u16, buf_size: i32);
}

/// Serializes every DLL call with its error-flag read.
static CALL_LOCK: Mutex<()> = Mutex::new(());

/// Run a native call and fold the error flag into the result.
fn checked<T>(call: impl FnOnce() -> T) -> Result<T, NativeError> {
    let _guard = CALL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let value = call();
    if unsafe { AU3_error() } != 0 {
        Err(NativeError::Failed)
    } else {
        Ok(value)
    }
}

/// Run a native call whose return value alone carries the outcome.
fn unchecked<T>(call: impl FnOnce() -> T) -> T {
    let _guard = CALL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    call()
}

/// Run a buffer-filling native call and decode the result.
fn read_buffer(fill: impl FnOnce(*mut u16, i32)) -> Result<String, NativeError> {
    let mut buf = vec![0u16; BUFFER_SIZE];
    checked(|| fill(buf.as_mut_ptr(), BUFFER_SIZE as i32))?;
    Ok(from_wide(&buf))
}

/// Zero-state backend; all capabilities are statically linked imports.
pub struct AutoItBackend;

impl NativeBackend for AutoItBackend {
    fn win_exists(&self, title: &str, text: &str) -> bool {
        let (t, x) = (to_wide(title), to_wide(text));
        unchecked(|| unsafe { AU3_WinExists(t.as_ptr(), x.as_ptr()) }) != 0
    }

    fn win_wait(&self, title: &str, text: &str, timeout_secs: u32) -> bool {
        let (t, x) = (to_wide(title), to_wide(text));
        // No lock here: the wait can block indefinitely and reads no flag.
        unsafe { AU3_WinWait(t.as_ptr(), x.as_ptr(), timeout_secs as i32) != 0 }
    }

    fn win_activate(&self, title: &str, text: &str) {
        let (t, x) = (to_wide(title), to_wide(text));
        unchecked(|| unsafe { AU3_WinActivate(t.as_ptr(), x.as_ptr()) });
    }

    fn win_active(&self, title: &str, text: &str) -> bool {
        let (t, x) = (to_wide(title), to_wide(text));
        unchecked(|| unsafe { AU3_WinActive(t.as_ptr(), x.as_ptr()) }) != 0
    }

    fn win_state(&self, title: &str, text: &str) -> Result<u32, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        let state = checked(|| unsafe { AU3_WinGetState(t.as_ptr(), x.as_ptr()) })?;
        Ok(state as u32)
    }

    fn win_pos_x(&self, title: &str, text: &str) -> Result<i32, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        checked(|| unsafe { AU3_WinGetPosX(t.as_ptr(), x.as_ptr()) })
    }

    fn win_pos_y(&self, title: &str, text: &str) -> Result<i32, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        checked(|| unsafe { AU3_WinGetPosY(t.as_ptr(), x.as_ptr()) })
    }

    fn win_width(&self, title: &str, text: &str) -> Result<i32, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        checked(|| unsafe { AU3_WinGetPosWidth(t.as_ptr(), x.as_ptr()) })
    }

    fn win_height(&self, title: &str, text: &str) -> Result<i32, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        checked(|| unsafe { AU3_WinGetPosHeight(t.as_ptr(), x.as_ptr()) })
    }

    fn win_text(&self, title: &str, text: &str) -> Result<String, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        read_buffer(|buf, size| unsafe { AU3_WinGetText(t.as_ptr(), x.as_ptr(), buf, size) })
    }

    fn win_title(&self, title: &str, text: &str) -> Result<String, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        read_buffer(|buf, size| unsafe { AU3_WinGetTitle(t.as_ptr(), x.as_ptr(), buf, size) })
    }

    fn win_handle(&self, title: &str, text: &str) -> Result<String, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        read_buffer(|buf, size| unsafe { AU3_WinGetHandle(t.as_ptr(), x.as_ptr(), buf, size) })
    }

    fn win_pid(&self, title: &str, text: &str) -> Result<u32, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        let raw = read_buffer(|buf, size| unsafe {
            AU3_WinGetProcess(t.as_ptr(), x.as_ptr(), buf, size)
        })?;
        raw.trim().parse::<u32>().map_err(|_| NativeError::Failed)
    }

    fn win_class_list(&self, title: &str, text: &str) -> Result<String, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        read_buffer(|buf, size| unsafe { AU3_WinGetClassList(t.as_ptr(), x.as_ptr(), buf, size) })
    }

    fn win_close(&self, title: &str, text: &str) {
        let (t, x) = (to_wide(title), to_wide(text));
        unchecked(|| unsafe { AU3_WinClose(t.as_ptr(), x.as_ptr()) });
    }

    fn win_kill(&self, title: &str, text: &str) {
        let (t, x) = (to_wide(title), to_wide(text));
        // Return value deliberately dropped: some window classes cannot be
        // killed and the DLL treats that as a normal outcome.
        unchecked(|| unsafe { AU3_WinKill(t.as_ptr(), x.as_ptr()) });
    }

    fn win_move(
        &self,
        title: &str,
        text: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), NativeError> {
        let (t, tx) = (to_wide(title), to_wide(text));
        let ret =
            checked(|| unsafe { AU3_WinMove(t.as_ptr(), tx.as_ptr(), x, y, width, height) })?;
        if ret == 0 {
            return Err(NativeError::Failed);
        }
        Ok(())
    }

    fn win_set_on_top(&self, title: &str, text: &str, on_top: bool) -> Result<(), NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        let flag = if on_top { 1 } else { 0 };
        let ret = checked(|| unsafe { AU3_WinSetOnTop(t.as_ptr(), x.as_ptr(), flag) })?;
        if ret == 0 {
            return Err(NativeError::Failed);
        }
        Ok(())
    }

    fn win_set_trans(&self, title: &str, text: &str, level: u8) -> Result<(), NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        let ret = checked(|| unsafe { AU3_WinSetTrans(t.as_ptr(), x.as_ptr(), level as i32) })?;
        // Documented sentinel: 0 means the OS version has no transparency
        // support, not that the window was missing.
        if ret == 0 {
            return Err(NativeError::Unsupported);
        }
        Ok(())
    }

    fn win_menu_select(
        &self,
        title: &str,
        text: &str,
        items: &[String; MENU_ITEM_SLOTS],
    ) -> Result<(), NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        let wide: Vec<Vec<u16>> = items.iter().map(|s| to_wide(s)).collect();
        let ret = checked(|| unsafe {
            AU3_WinMenuSelectItem(
                t.as_ptr(),
                x.as_ptr(),
                wide[0].as_ptr(),
                wide[1].as_ptr(),
                wide[2].as_ptr(),
                wide[3].as_ptr(),
                wide[4].as_ptr(),
                wide[5].as_ptr(),
                wide[6].as_ptr(),
                wide[7].as_ptr(),
            )
        })?;
        if ret == 0 {
            return Err(NativeError::Failed);
        }
        Ok(())
    }

    fn statusbar_text(&self, title: &str, text: &str, part: u32) -> Result<String, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        read_buffer(|buf, size| unsafe {
            AU3_StatusbarGetText(t.as_ptr(), x.as_ptr(), part as i32, buf, size)
        })
    }

    fn control_with_focus(&self, title: &str, text: &str) -> Result<String, NativeError> {
        let (t, x) = (to_wide(title), to_wide(text));
        read_buffer(|buf, size| unsafe { AU3_ControlGetFocus(t.as_ptr(), x.as_ptr(), buf, size) })
    }
}
