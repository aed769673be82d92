//! External executable declarations for the X11 facade.

use serde::Serialize;

/// The command-line tools this facade shells out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XTool {
    /// Window search, activation, geometry, input synthesis.
    Xdotool,
    /// X selection (clipboard) read/write.
    Xsel,
    /// Window attribute dumps.
    Xwininfo,
    /// Forced client termination.
    Xkill,
}

impl XTool {
    pub const ALL: [XTool; 4] = [XTool::Xdotool, XTool::Xsel, XTool::Xwininfo, XTool::Xkill];

    /// The executable name looked up on PATH.
    pub fn command(&self) -> &'static str {
        match self {
            XTool::Xdotool => "xdotool",
            XTool::Xsel => "xsel",
            XTool::Xwininfo => "xwininfo",
            XTool::Xkill => "xkill",
        }
    }

    /// Check if the tool is installed and available in PATH.
    pub fn is_available(&self) -> bool {
        which::which(self.command()).is_ok()
    }
}

impl std::fmt::Display for XTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(XTool::Xdotool.command(), "xdotool");
        assert_eq!(XTool::Xsel.command(), "xsel");
        assert_eq!(XTool::Xwininfo.command(), "xwininfo");
        assert_eq!(XTool::Xkill.command(), "xkill");
    }

    #[test]
    fn test_all_lists_every_tool() {
        assert_eq!(XTool::ALL.len(), 4);
    }

    #[test]
    fn test_display_matches_command() {
        for tool in XTool::ALL {
            assert_eq!(tool.to_string(), tool.command());
        }
    }

    #[test]
    fn test_availability_probe_does_not_panic() {
        // Result depends on the host; the probe itself must never panic.
        for tool in XTool::ALL {
            let _ = tool.is_available();
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&XTool::Xdotool).unwrap();
        assert_eq!(json, "\"xdotool\"");
    }
}
