use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use super::errors::XdoError;
use super::tools::XTool;
use crate::window::types::WindowRect;

/// Which X selection the clipboard operations target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Primary,
    Clipboard,
}

impl Selection {
    fn flag(&self) -> &'static str {
        match self {
            Selection::Primary => "-p",
            Selection::Clipboard => "-b",
        }
    }
}

/// Spawn a tool to completion, capturing stdout and stderr.
///
/// Missing executables and spawn failures are automation errors; exit
/// status interpretation is left to the caller.
fn capture(tool: XTool, args: &[&str]) -> Result<std::process::Output, XdoError> {
    if !tool.is_available() {
        return Err(XdoError::Automation {
            message: format!("{} not found in PATH", tool),
        });
    }

    debug!(event = "core.xdo.tool_started", tool = %tool, args = ?args);

    Command::new(tool.command())
        .args(args)
        .output()
        .map_err(|e| XdoError::Automation {
            message: format!("Failed to execute {}: {}", tool, e),
        })
}

/// Run a tool and return its stdout, folding every failure mode into
/// [`XdoError::Automation`].
fn run_tool(tool: XTool, args: &[&str]) -> Result<String, XdoError> {
    let output = capture(tool, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            event = "core.xdo.tool_failed",
            tool = %tool,
            stderr = %stderr.trim()
        );
        return Err(XdoError::Automation {
            message: format!("{} exited with {}: {}", tool, output.status, stderr.trim()),
        });
    }

    debug!(event = "core.xdo.tool_completed", tool = %tool);
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Id of the currently active window.
pub fn active_window() -> Result<u64, XdoError> {
    let stdout = run_tool(XTool::Xdotool, &["getactivewindow"])?;
    parse_window_id(&stdout)
}

/// Ids of all windows whose name matches `pattern` (a tool-side regex).
///
/// No match is a normal outcome and yields an empty list.
pub fn search(pattern: &str) -> Result<Vec<u64>, XdoError> {
    info!(event = "core.xdo.search_started", pattern = pattern);

    let output = capture(XTool::Xdotool, &["search", "--name", pattern])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    // The search tool exits non-zero when nothing matches, with empty
    // output; that is a normal outcome, not a failure.
    if !output.status.success() && stdout.trim().is_empty() {
        info!(event = "core.xdo.search_completed", count = 0usize);
        return Ok(Vec::new());
    }

    let ids = parse_id_lines(&stdout)?;
    info!(event = "core.xdo.search_completed", count = ids.len());
    Ok(ids)
}

/// Give a window input focus.
pub fn activate_window(id: u64) -> Result<(), XdoError> {
    info!(event = "core.xdo.activate_started", id = id);
    run_tool(XTool::Xdotool, &["windowactivate", "--sync", &id.to_string()])?;
    info!(event = "core.xdo.activate_completed", id = id);
    Ok(())
}

/// Geometry of a window.
pub fn window_geometry(id: u64) -> Result<WindowRect, XdoError> {
    let stdout = run_tool(
        XTool::Xdotool,
        &["getwindowgeometry", "--shell", &id.to_string()],
    )?;
    parse_geometry(&stdout)
}

/// Force-terminate the client owning a window.
pub fn kill_window(id: u64) -> Result<(), XdoError> {
    info!(event = "core.xdo.kill_started", id = id);
    run_tool(XTool::Xkill, &["-id", &id.to_string()])?;
    info!(event = "core.xdo.kill_completed", id = id);
    Ok(())
}

/// Read the given X selection.
pub fn read_selection(selection: Selection) -> Result<String, XdoError> {
    run_tool(XTool::Xsel, &[selection.flag(), "-o"])
}

/// Replace the given X selection.
pub fn write_selection(selection: Selection, text: &str) -> Result<(), XdoError> {
    let tool = XTool::Xsel;
    if !tool.is_available() {
        return Err(XdoError::Automation {
            message: format!("{} not found in PATH", tool),
        });
    }

    debug!(event = "core.xdo.selection_write_started", selection = ?selection);

    let mut child = Command::new(tool.command())
        .args([selection.flag(), "-i"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| XdoError::Automation {
            message: format!("Failed to execute {}: {}", tool, e),
        })?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| XdoError::Automation {
                message: format!("Failed to write to {} stdin: {}", tool, e),
            })?;
    }

    let output = child.wait_with_output().map_err(|e| XdoError::Automation {
        message: format!("Failed to wait for {}: {}", tool, e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(XdoError::Automation {
            message: format!("{} exited with {}: {}", tool, output.status, stderr.trim()),
        });
    }

    debug!(event = "core.xdo.selection_write_completed");
    Ok(())
}

/// Parse a single decimal window id from tool stdout.
fn parse_window_id(stdout: &str) -> Result<u64, XdoError> {
    let trimmed = stdout.trim();
    trimmed.parse::<u64>().map_err(|_| XdoError::Parse {
        message: format!("expected a window id, got '{}'", trimmed),
    })
}

/// Parse one decimal window id per line, skipping blank lines.
fn parse_id_lines(stdout: &str) -> Result<Vec<u64>, XdoError> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u64>().map_err(|_| XdoError::Parse {
                message: format!("expected a window id, got '{}'", line),
            })
        })
        .collect()
}

/// Parse `KEY=VALUE` shell-style geometry output into a rect.
fn parse_geometry(stdout: &str) -> Result<WindowRect, XdoError> {
    let field = |key: &str| -> Result<i32, XdoError> {
        let prefix = format!("{}=", key);
        let line = stdout
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with(&prefix))
            .ok_or_else(|| XdoError::Parse {
                message: format!("missing {} in geometry output", key),
            })?;
        line[prefix.len()..].parse::<i32>().map_err(|_| XdoError::Parse {
            message: format!("malformed {} in geometry output: '{}'", key, line),
        })
    };

    Ok(WindowRect::new(
        field("X")?,
        field("Y")?,
        field("WIDTH")?,
        field("HEIGHT")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AutowinError;

    #[test]
    fn test_parse_window_id_accepts_decimal() {
        assert_eq!(parse_window_id("41943045\n").unwrap(), 41943045);
    }

    #[test]
    fn test_parse_window_id_rejects_garbage() {
        let error = parse_window_id("banana\n").unwrap_err();
        assert_eq!(error.error_code(), "XDO_PARSE_ERROR");
        assert!(error.to_string().contains("banana"));
    }

    #[test]
    fn test_parse_id_lines_skips_blanks_and_keeps_order() {
        let ids = parse_id_lines("100\n\n200\n 300 \n").unwrap();
        assert_eq!(ids, vec![100, 200, 300]);
    }

    #[test]
    fn test_parse_id_lines_empty_output_is_no_matches() {
        assert_eq!(parse_id_lines("").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_parse_id_lines_propagates_malformed_line() {
        let error = parse_id_lines("100\nnope\n").unwrap_err();
        assert_eq!(error.error_code(), "XDO_PARSE_ERROR");
    }

    #[test]
    fn test_parse_geometry_shell_output() {
        let stdout = "WINDOW=41943045\nX=10\nY=32\nWIDTH=1280\nHEIGHT=688\nSCREEN=0\n";
        let rect = parse_geometry(stdout).unwrap();
        assert_eq!(rect, WindowRect::new(10, 32, 1280, 688));
    }

    #[test]
    fn test_parse_geometry_missing_key_is_parse_error() {
        let stdout = "WINDOW=41943045\nX=10\nY=32\nWIDTH=1280\n";
        let error = parse_geometry(stdout).unwrap_err();
        assert_eq!(error.error_code(), "XDO_PARSE_ERROR");
        assert!(error.to_string().contains("HEIGHT"));
    }

    #[test]
    fn test_parse_geometry_malformed_value_is_parse_error() {
        let stdout = "X=ten\nY=32\nWIDTH=1280\nHEIGHT=688\n";
        let error = parse_geometry(stdout).unwrap_err();
        assert_eq!(error.error_code(), "XDO_PARSE_ERROR");
    }

    #[test]
    fn test_selection_flags() {
        assert_eq!(Selection::Primary.flag(), "-p");
        assert_eq!(Selection::Clipboard.flag(), "-b");
    }

    #[test]
    fn test_run_tool_reports_missing_tool_as_automation_error() {
        // XTool commands are fixed; simulate a missing tool by probing for
        // one only present on X11 hosts and skipping when it exists.
        if XTool::Xkill.is_available() {
            return;
        }
        let error = kill_window(1).unwrap_err();
        assert_eq!(error.error_code(), "XDO_AUTOMATION_FAILED");
        assert!(error.to_string().contains("xkill"));
    }
}
