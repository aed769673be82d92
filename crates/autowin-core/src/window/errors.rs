use crate::errors::AutowinError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window not found: title '{title}', text '{text}'")]
    NotFound { title: String, text: String },

    #[error("Window vanished during {operation}: title '{title}', text '{text}'")]
    Vanished {
        operation: &'static str,
        title: String,
        text: String,
    },

    #[error("{operation} is not supported on this platform or OS version: title '{title}', text '{text}'")]
    Unsupported {
        operation: &'static str,
        title: String,
        text: String,
    },

    /// The native layer reports one failure for three causes: the window has
    /// no statusbar, the statusbar is not a standard common control, or the
    /// part index is out of range. They cannot be told apart here.
    #[error("Statusbar text unavailable for part {part} (no statusbar, non-standard statusbar control, or part out of range): title '{title}', text '{text}'")]
    StatusbarUnavailable {
        part: u32,
        title: String,
        text: String,
    },

    #[error("Menu path too deep: {given} submenu items given, maximum is {max}")]
    MenuDepthExceeded { given: usize, max: usize },

    #[error("Native {operation} call failed: title '{title}', text '{text}'")]
    NativeFailure {
        operation: &'static str,
        title: String,
        text: String,
    },
}

impl AutowinError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::NotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::Vanished { .. } => "WINDOW_VANISHED",
            WindowError::Unsupported { .. } => "WINDOW_UNSUPPORTED",
            WindowError::StatusbarUnavailable { .. } => "WINDOW_STATUSBAR_UNAVAILABLE",
            WindowError::MenuDepthExceeded { .. } => "WINDOW_MENU_DEPTH_EXCEEDED",
            WindowError::NativeFailure { .. } => "WINDOW_NATIVE_FAILURE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::NotFound { .. }
                | WindowError::Vanished { .. }
                | WindowError::StatusbarUnavailable { .. }
                | WindowError::MenuDepthExceeded { .. }
        )
    }
}
