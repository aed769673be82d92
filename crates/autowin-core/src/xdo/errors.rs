use crate::errors::AutowinError;

/// Failures of the X11 tool facade.
///
/// Two kinds only: the tool could not do the work, or it did something and
/// produced stdout this facade cannot make sense of.
#[derive(Debug, thiserror::Error)]
pub enum XdoError {
    #[error("Automation failed: {message}")]
    Automation { message: String },

    #[error("Failed to parse tool output: {message}")]
    Parse { message: String },
}

impl AutowinError for XdoError {
    fn error_code(&self) -> &'static str {
        match self {
            XdoError::Automation { .. } => "XDO_AUTOMATION_FAILED",
            XdoError::Parse { .. } => "XDO_PARSE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, XdoError::Automation { .. })
    }
}
