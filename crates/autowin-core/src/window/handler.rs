use std::sync::Arc;

use tracing::{debug, info, warn};

use super::errors::WindowError;
use super::types::{ControlRef, WindowIdent, WindowRect, WindowState};
use crate::native::{self, MENU_ITEM_SLOTS, NativeBackend, NativeError};

/// Maximum number of submenu entries after the top-level menu. The native
/// selection call has fixed arity: one menu plus seven submenu levels.
pub const MAX_MENU_DEPTH: usize = MENU_ITEM_SLOTS - 1;

/// Check whether any window matches the (title, text) pair right now.
pub fn exists(title: &str, text: &str) -> bool {
    native::default_backend().win_exists(title, text)
}

/// Block until a matching window appears or `timeout_secs` elapses.
///
/// A timeout of 0 waits indefinitely; there is no cancellation beyond the
/// timeout. Returns whether a match was found.
pub fn wait(title: &str, text: &str, timeout_secs: u32) -> bool {
    info!(
        event = "core.window.wait_started",
        title = title,
        text = text,
        timeout_secs = timeout_secs
    );
    let found = native::default_backend().win_wait(title, text, timeout_secs);
    info!(event = "core.window.wait_completed", title = title, found = found);
    found
}

/// Handle on a window addressed by its (title, text) identity.
///
/// Construction only proves a matching window existed at that instant. The
/// OS window can close at any later moment without notification, so every
/// accessor can independently fail with [`WindowError::Vanished`]; staleness
/// is detected lazily on the next use, never proactively. No native handle
/// is cached — each call re-resolves the identity through the native layer.
pub struct Window {
    ident: WindowIdent,
    backend: Arc<dyn NativeBackend>,
}

impl Window {
    /// Open a handle on a currently existing window.
    pub fn open(ident: WindowIdent) -> Result<Self, WindowError> {
        Self::with_backend(ident, native::default_backend())
    }

    /// Open a handle using an explicit native backend.
    ///
    /// This is the seam for tests and embedders; [`Window::open`] uses the
    /// process default.
    pub fn with_backend(
        ident: WindowIdent,
        backend: Arc<dyn NativeBackend>,
    ) -> Result<Self, WindowError> {
        info!(event = "core.window.open_started", ident = %ident);

        if !backend.win_exists(ident.title(), ident.text()) {
            warn!(event = "core.window.open_failed", ident = %ident);
            return Err(WindowError::NotFound {
                title: ident.title().to_string(),
                text: ident.text().to_string(),
            });
        }

        info!(event = "core.window.open_completed", ident = %ident);
        Ok(Self { ident, backend })
    }

    pub fn ident(&self) -> &WindowIdent {
        &self.ident
    }

    /// Whether a matching window still exists right now.
    pub fn exists(&self) -> bool {
        self.backend.win_exists(self.ident.title(), self.ident.text())
    }

    /// Block until a matching window appears or `timeout_secs` elapses
    /// (0 = wait indefinitely). Returns whether a match was found.
    pub fn wait(&self, timeout_secs: u32) -> bool {
        info!(
            event = "core.window.wait_started",
            ident = %self.ident,
            timeout_secs = timeout_secs
        );
        let found = self
            .backend
            .win_wait(self.ident.title(), self.ident.text(), timeout_secs);
        info!(event = "core.window.wait_completed", ident = %self.ident, found = found);
        found
    }

    /// Request focus, then re-query and return the confirmed active state.
    ///
    /// The native layer can accept the request without granting focus, so
    /// the return value is the post-call state, not the request outcome.
    pub fn activate(&self) -> bool {
        info!(event = "core.window.activate_started", ident = %self.ident);
        self.backend.win_activate(self.ident.title(), self.ident.text());
        let active = self.active();
        info!(
            event = "core.window.activate_completed",
            ident = %self.ident,
            active = active
        );
        active
    }

    /// Whether the window currently holds input focus. A dedicated native
    /// call, not a bit test on [`Window::state`].
    pub fn active(&self) -> bool {
        self.backend.win_active(self.ident.title(), self.ident.text())
    }

    /// Fetch the combined state bitmask in one native call.
    pub fn state(&self) -> Result<WindowState, WindowError> {
        let bits = self
            .backend
            .win_state(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("state", e))?;
        debug!(event = "core.window.state_fetched", ident = %self.ident, bits = bits);
        Ok(WindowState::from_bits(bits))
    }

    pub fn visible(&self) -> Result<bool, WindowError> {
        Ok(self.state()?.visible())
    }

    pub fn enabled(&self) -> Result<bool, WindowError> {
        Ok(self.state()?.enabled())
    }

    pub fn minimized(&self) -> Result<bool, WindowError> {
        Ok(self.state()?.minimized())
    }

    pub fn maximized(&self) -> Result<bool, WindowError> {
        Ok(self.state()?.maximized())
    }

    /// Window geometry from four independent native calls.
    ///
    /// Known race: the window can move or resize between the first and last
    /// sub-call, yielding a rect that mixes old and new values. The native
    /// layer offers no atomic geometry query.
    pub fn rect(&self) -> Result<WindowRect, WindowError> {
        let (title, text) = (self.ident.title(), self.ident.text());
        let x = self
            .backend
            .win_pos_x(title, text)
            .map_err(|e| self.map_native("rect", e))?;
        let y = self
            .backend
            .win_pos_y(title, text)
            .map_err(|e| self.map_native("rect", e))?;
        let width = self
            .backend
            .win_width(title, text)
            .map_err(|e| self.map_native("rect", e))?;
        let height = self
            .backend
            .win_height(title, text)
            .map_err(|e| self.map_native("rect", e))?;
        Ok(WindowRect::new(x, y, width, height))
    }

    /// Visible and hidden text of the window.
    pub fn text(&self) -> Result<String, WindowError> {
        self.backend
            .win_text(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("text", e))
    }

    /// Full title of the matched window (the identity title can be partial).
    pub fn title(&self) -> Result<String, WindowError> {
        self.backend
            .win_title(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("title", e))
    }

    /// Numeric window handle as the native layer's string rendering.
    ///
    /// Callers may convert it; the binding neither stores it nor uses it for
    /// matching.
    pub fn handle(&self) -> Result<String, WindowError> {
        self.backend
            .win_handle(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("handle", e))
    }

    /// Process id of the window's owning process.
    pub fn pid(&self) -> Result<u32, WindowError> {
        self.backend
            .win_pid(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("pid", e))
    }

    /// Class names of the window's controls, in native enumeration order.
    pub fn class_list(&self) -> Result<Vec<String>, WindowError> {
        let raw = self
            .backend
            .win_class_list(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("class_list", e))?;
        Ok(parse_class_list(&raw))
    }

    /// Request a graceful close (close-button click equivalent).
    ///
    /// No termination guarantee: the window may intercept and ignore it.
    pub fn close(&self) {
        info!(event = "core.window.close_requested", ident = %self.ident);
        self.backend.win_close(self.ident.title(), self.ident.text());
    }

    /// Request forced termination.
    ///
    /// Some window classes (file-manager shell windows among them) cannot be
    /// killed; the native layer treats that as a normal outcome, so failure
    /// is silent here too.
    pub fn kill(&self) {
        info!(event = "core.window.kill_requested", ident = %self.ident);
        self.backend.win_kill(self.ident.title(), self.ident.text());
    }

    /// Select `menu` then descend through up to [`MAX_MENU_DEPTH`] submenu
    /// items.
    ///
    /// More than seven submenu entries fails with
    /// [`WindowError::MenuDepthExceeded`] before any native call is made;
    /// unused slots are padded with empty strings to match the native fixed
    /// arity.
    pub fn select_menu_item(&self, menu: &str, items: &[&str]) -> Result<(), WindowError> {
        if items.len() > MAX_MENU_DEPTH {
            return Err(WindowError::MenuDepthExceeded {
                given: items.len(),
                max: MAX_MENU_DEPTH,
            });
        }

        let mut slots: [String; MENU_ITEM_SLOTS] = Default::default();
        slots[0] = menu.to_string();
        for (slot, item) in slots[1..].iter_mut().zip(items) {
            *slot = (*item).to_string();
        }

        info!(
            event = "core.window.menu_select_started",
            ident = %self.ident,
            menu = menu,
            depth = items.len()
        );
        self.backend
            .win_menu_select(self.ident.title(), self.ident.text(), &slots)
            .map_err(|e| match e {
                // One native failure covers both a missing window and a
                // missing menu path; neither can be singled out here.
                NativeError::Failed => WindowError::NativeFailure {
                    operation: "select_menu_item",
                    title: self.ident.title().to_string(),
                    text: self.ident.text().to_string(),
                },
                NativeError::Unsupported => self.map_native("select_menu_item", e),
            })
    }

    /// Set window transparency (0 = invisible, 255 = opaque).
    ///
    /// OS versions without transparency support surface as
    /// [`WindowError::Unsupported`], distinct from the vanished-window path.
    pub fn set_transparency(&self, level: u8) -> Result<(), WindowError> {
        info!(
            event = "core.window.set_trans_started",
            ident = %self.ident,
            level = level
        );
        self.backend
            .win_set_trans(self.ident.title(), self.ident.text(), level)
            .map_err(|e| self.map_native("set_transparency", e))
    }

    /// Set or clear the always-on-top flag.
    pub fn set_on_top(&self, on_top: bool) -> Result<(), WindowError> {
        info!(
            event = "core.window.set_on_top_started",
            ident = %self.ident,
            on_top = on_top
        );
        self.backend
            .win_set_on_top(self.ident.title(), self.ident.text(), on_top)
            .map_err(|e| self.map_native("set_on_top", e))
    }

    /// Move and resize the window.
    pub fn move_to(&self, x: i32, y: i32, width: i32, height: i32) -> Result<(), WindowError> {
        info!(
            event = "core.window.move_started",
            ident = %self.ident,
            x = x,
            y = y,
            width = width,
            height = height
        );
        self.backend
            .win_move(self.ident.title(), self.ident.text(), x, y, width, height)
            .map_err(|e| self.map_native("move_to", e))
    }

    /// Text of statusbar part `part` (1-based).
    ///
    /// The native layer reports one failure for three indistinguishable
    /// causes — no statusbar, non-standard statusbar control, part out of
    /// range — so they all surface as
    /// [`WindowError::StatusbarUnavailable`].
    pub fn statusbar_text(&self, part: u32) -> Result<String, WindowError> {
        self.backend
            .statusbar_text(self.ident.title(), self.ident.text(), part)
            .map_err(|e| match e {
                NativeError::Failed => WindowError::StatusbarUnavailable {
                    part,
                    title: self.ident.title().to_string(),
                    text: self.ident.text().to_string(),
                },
                NativeError::Unsupported => self.map_native("statusbar_text", e),
            })
    }

    /// Reference to the control currently holding input focus.
    ///
    /// The reference is only usable while this window holds input focus;
    /// that precondition is documented, not checked.
    pub fn focused_control(&self) -> Result<ControlRef, WindowError> {
        let control_id = self
            .backend
            .control_with_focus(self.ident.title(), self.ident.text())
            .map_err(|e| self.map_native("focused_control", e))?;
        Ok(ControlRef::new(self.ident.clone(), control_id))
    }

    /// Default mapping from a boundary failure to a window error: a flagged
    /// failure after successful construction means the window vanished.
    fn map_native(&self, operation: &'static str, error: NativeError) -> WindowError {
        match error {
            NativeError::Failed => WindowError::Vanished {
                operation,
                title: self.ident.title().to_string(),
                text: self.ident.text().to_string(),
            },
            NativeError::Unsupported => WindowError::Unsupported {
                operation,
                title: self.ident.title().to_string(),
                text: self.ident.text().to_string(),
            },
        }
    }
}

/// Split a newline-delimited native class-list buffer into class names.
///
/// Entries are trimmed; blank lines are dropped; native ordering is kept.
fn parse_class_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
