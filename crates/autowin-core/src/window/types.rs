use serde::{Deserialize, Serialize};

/// The (title, text) pair used to match a live on-screen window.
///
/// This is a match key, not a stable handle: the native layer re-resolves it
/// on every call, and the matched window can disappear between any two calls.
/// An empty `text` means "match by title only".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowIdent {
    title: String,
    text: String,
}

impl WindowIdent {
    /// Match by title only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
        }
    }

    /// Match by title plus a secondary window-text key.
    pub fn with_text(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for WindowIdent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "'{}'", self.title)
        } else {
            write!(f, "'{}' (text '{}')", self.title, self.text)
        }
    }
}

/// Combined window state bitmask, queried fresh on each call.
///
/// The derived predicates are pure bit tests; nothing is cached between
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowState(u32);

impl WindowState {
    pub const EXISTS: u32 = 1;
    pub const VISIBLE: u32 = 2;
    pub const ENABLED: u32 = 4;
    pub const ACTIVE: u32 = 8;
    pub const MINIMIZED: u32 = 16;
    pub const MAXIMIZED: u32 = 32;

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn exists(&self) -> bool {
        self.0 & Self::EXISTS != 0
    }

    pub fn visible(&self) -> bool {
        self.0 & Self::VISIBLE != 0
    }

    pub fn enabled(&self) -> bool {
        self.0 & Self::ENABLED != 0
    }

    pub fn active(&self) -> bool {
        self.0 & Self::ACTIVE != 0
    }

    pub fn minimized(&self) -> bool {
        self.0 & Self::MINIMIZED != 0
    }

    pub fn maximized(&self) -> bool {
        self.0 & Self::MAXIMIZED != 0
    }
}

/// Window geometry assembled from four independent native calls.
///
/// There is no atomicity across the four sub-calls: a window that moves
/// mid-query can yield a rect mixing old and new coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Reference to the control holding input focus within a window.
///
/// Only meaningful while the owning window holds input focus; once focus
/// moves elsewhere the reference silently points at nothing. Checking that
/// is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRef {
    window: WindowIdent,
    control_id: String,
}

impl ControlRef {
    pub fn new(window: WindowIdent, control_id: impl Into<String>) -> Self {
        Self {
            window,
            control_id: control_id.into(),
        }
    }

    pub fn window(&self) -> &WindowIdent {
        &self.window
    }

    /// The native layer's class-name identifier for the control.
    pub fn control_id(&self) -> &str {
        &self.control_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_defaults_to_empty_text() {
        let ident = WindowIdent::new("Editor");
        assert_eq!(ident.title(), "Editor");
        assert_eq!(ident.text(), "");
    }

    #[test]
    fn test_ident_with_text() {
        let ident = WindowIdent::with_text("Editor", "Ln 1, Col 1");
        assert_eq!(ident.title(), "Editor");
        assert_eq!(ident.text(), "Ln 1, Col 1");
    }

    #[test]
    fn test_ident_display_omits_empty_text() {
        assert_eq!(WindowIdent::new("Editor").to_string(), "'Editor'");
        assert_eq!(
            WindowIdent::with_text("Editor", "ready").to_string(),
            "'Editor' (text 'ready')"
        );
    }

    #[test]
    fn test_state_flag_values() {
        assert_eq!(WindowState::EXISTS, 1);
        assert_eq!(WindowState::VISIBLE, 2);
        assert_eq!(WindowState::ENABLED, 4);
        assert_eq!(WindowState::ACTIVE, 8);
        assert_eq!(WindowState::MINIMIZED, 16);
        assert_eq!(WindowState::MAXIMIZED, 32);
    }

    #[test]
    fn test_state_predicates_are_bit_tests_for_all_values() {
        // Every predicate must agree with the raw bit test across the whole
        // 6-flag value space.
        for bits in 0..64u32 {
            let state = WindowState::from_bits(bits);
            assert_eq!(state.exists(), bits & 1 != 0, "exists at {bits}");
            assert_eq!(state.visible(), bits & 2 != 0, "visible at {bits}");
            assert_eq!(state.enabled(), bits & 4 != 0, "enabled at {bits}");
            assert_eq!(state.active(), bits & 8 != 0, "active at {bits}");
            assert_eq!(state.minimized(), bits & 16 != 0, "minimized at {bits}");
            assert_eq!(state.maximized(), bits & 32 != 0, "maximized at {bits}");
        }
    }

    #[test]
    fn test_state_round_trips_bits() {
        let state = WindowState::from_bits(0b101010);
        assert_eq!(state.bits(), 0b101010);
    }

    #[test]
    fn test_rect_getters() {
        let rect = WindowRect::new(10, 20, 800, 600);
        assert_eq!(rect.x(), 10);
        assert_eq!(rect.y(), 20);
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_control_ref_carries_owning_ident() {
        let ident = WindowIdent::new("Editor");
        let control = ControlRef::new(ident.clone(), "Edit1");
        assert_eq!(control.window(), &ident);
        assert_eq!(control.control_id(), "Edit1");
    }

    #[test]
    fn test_state_serializes_as_plain_number() {
        let json = serde_json::to_string(&WindowState::from_bits(15)).unwrap();
        assert_eq!(json, "15");
    }
}
