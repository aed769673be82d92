use clap::{Arg, ArgAction, Command};

/// Add the window-identity arguments shared by every window subcommand.
fn with_window_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("title")
            .help("Full or partial window title to match")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::new("text")
            .long("text")
            .short('t')
            .help("Secondary window-text match key (default: match by title only)")
            .default_value(""),
    )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("autowin")
        .version(autowin_core::version())
        .about("Desktop window automation bindings")
        .long_about(
            "autowin wraps the native window automation layer (window lookup by \
             title/text, state, geometry, menus, transparency) and the X11 \
             command-line toolchain (xdotool, xsel, xwininfo, xkill). It adds no \
             automation logic of its own; every command forwards to the wrapped \
             layer.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(with_window_args(
            Command::new("exists").about("Check whether a matching window exists right now"),
        ))
        .subcommand(
            with_window_args(
                Command::new("wait")
                    .about("Block until a matching window appears or the timeout elapses"),
            )
            .arg(
                Arg::new("timeout")
                    .long("timeout")
                    .help("Timeout in seconds, 0 = wait indefinitely (default: from config)")
                    .value_parser(clap::value_parser!(u32)),
            ),
        )
        .subcommand(with_window_args(
            Command::new("activate")
                .about("Request focus for a window and report the confirmed state"),
        ))
        .subcommand(
            with_window_args(Command::new("state").about("Print the window state bitmask"))
                .arg(json_flag()),
        )
        .subcommand(
            with_window_args(Command::new("rect").about("Print window position and size"))
                .arg(json_flag()),
        )
        .subcommand(
            with_window_args(
                Command::new("classes").about("List the window's control class names"),
            )
            .arg(json_flag()),
        )
        .subcommand(with_window_args(
            Command::new("text").about("Print the window's visible and hidden text"),
        ))
        .subcommand(with_window_args(
            Command::new("title").about("Print the full title of the matched window"),
        ))
        .subcommand(with_window_args(
            Command::new("handle").about("Print the native window handle"),
        ))
        .subcommand(with_window_args(
            Command::new("pid").about("Print the owning process id"),
        ))
        .subcommand(with_window_args(
            Command::new("close").about("Request a graceful window close"),
        ))
        .subcommand(with_window_args(
            Command::new("kill").about("Request forced window termination (best-effort)"),
        ))
        .subcommand(
            with_window_args(Command::new("menu").about("Select a menu item path"))
                .arg(
                    Arg::new("items")
                        .help("Menu followed by up to 7 submenu items")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                ),
        )
        .subcommand(
            with_window_args(Command::new("trans").about("Set window transparency")).arg(
                Arg::new("level")
                    .help("Transparency level (0 = invisible, 255 = opaque)")
                    .required(true)
                    .value_parser(clap::value_parser!(u8))
                    .index(2),
            ),
        )
        .subcommand(
            with_window_args(Command::new("ontop").about("Set or clear the always-on-top flag"))
                .arg(
                    Arg::new("flag")
                        .help("on or off")
                        .required(true)
                        .value_parser(["on", "off"])
                        .index(2),
                ),
        )
        .subcommand(
            with_window_args(Command::new("move").about("Move and resize a window"))
                .arg(
                    Arg::new("x")
                        .required(true)
                        .value_parser(clap::value_parser!(i32))
                        .index(2),
                )
                .arg(
                    Arg::new("y")
                        .required(true)
                        .value_parser(clap::value_parser!(i32))
                        .index(3),
                )
                .arg(
                    Arg::new("width")
                        .required(true)
                        .value_parser(clap::value_parser!(i32))
                        .index(4),
                )
                .arg(
                    Arg::new("height")
                        .required(true)
                        .value_parser(clap::value_parser!(i32))
                        .index(5),
                ),
        )
        .subcommand(
            with_window_args(Command::new("statusbar").about("Print statusbar text")).arg(
                Arg::new("part")
                    .long("part")
                    .help("Statusbar part, 1-based")
                    .value_parser(clap::value_parser!(u32))
                    .default_value("1"),
            ),
        )
        .subcommand(with_window_args(
            Command::new("focused")
                .about("Print the control holding input focus within the window"),
        ))
        .subcommand(
            Command::new("tools")
                .about("Report availability of the X11 command-line tools")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("x")
                .about("X11 tool operations")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("active").about("Print the active window id"))
                .subcommand(
                    Command::new("search")
                        .about("List window ids matching a name pattern")
                        .arg(Arg::new("pattern").required(true).index(1)),
                )
                .subcommand(
                    Command::new("activate")
                        .about("Give a window input focus")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(u64))
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("geometry")
                        .about("Print window geometry")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(u64))
                                .index(1),
                        )
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("kill")
                        .about("Force-terminate the client owning a window")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(u64))
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("clip")
                        .about("Read or write the X selection")
                        .subcommand_required(true)
                        .arg_required_else_help(true)
                        .subcommand(Command::new("read").about("Print the selection contents"))
                        .subcommand(
                            Command::new("write")
                                .about("Replace the selection contents")
                                .arg(Arg::new("content").required(true).index(1)),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds_without_panicking() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_exists_parses_title_and_text() {
        let matches = build_cli()
            .try_get_matches_from(["autowin", "exists", "Editor", "--text", "ready"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "exists");
        assert_eq!(sub.get_one::<String>("title").unwrap(), "Editor");
        assert_eq!(sub.get_one::<String>("text").unwrap(), "ready");
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let matches = build_cli()
            .try_get_matches_from(["autowin", "exists", "Editor"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("text").unwrap(), "");
    }

    #[test]
    fn test_menu_collects_items() {
        let matches = build_cli()
            .try_get_matches_from(["autowin", "menu", "Editor", "File", "Save As"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let items: Vec<&String> = sub.get_many::<String>("items").unwrap().collect();
        assert_eq!(items, ["File", "Save As"]);
    }

    #[test]
    fn test_trans_rejects_out_of_range_level() {
        let result = build_cli().try_get_matches_from(["autowin", "trans", "Editor", "300"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_x_geometry_parses_id() {
        let matches = build_cli()
            .try_get_matches_from(["autowin", "x", "geometry", "41943045"])
            .unwrap();
        let (_, x) = matches.subcommand().unwrap();
        let (name, sub) = x.subcommand().unwrap();
        assert_eq!(name, "geometry");
        assert_eq!(*sub.get_one::<u64>("id").unwrap(), 41943045);
    }
}
