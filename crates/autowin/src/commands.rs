use clap::ArgMatches;
use tracing::{error, info};

use autowin_core::config;
use autowin_core::errors::AutowinError;
use autowin_core::window::{self, Window, WindowIdent};
use autowin_core::xdo::{self, Selection, XTool};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("exists", sub)) => handle_exists(sub),
        Some(("wait", sub)) => handle_wait(sub),
        Some(("activate", sub)) => handle_activate(sub),
        Some(("state", sub)) => handle_state(sub),
        Some(("rect", sub)) => handle_rect(sub),
        Some(("classes", sub)) => handle_classes(sub),
        Some(("text", sub)) => handle_text(sub),
        Some(("title", sub)) => handle_title(sub),
        Some(("handle", sub)) => handle_handle(sub),
        Some(("pid", sub)) => handle_pid(sub),
        Some(("close", sub)) => handle_close(sub),
        Some(("kill", sub)) => handle_kill(sub),
        Some(("menu", sub)) => handle_menu(sub),
        Some(("trans", sub)) => handle_trans(sub),
        Some(("ontop", sub)) => handle_ontop(sub),
        Some(("move", sub)) => handle_move(sub),
        Some(("statusbar", sub)) => handle_statusbar(sub),
        Some(("focused", sub)) => handle_focused(sub),
        Some(("tools", sub)) => handle_tools(sub),
        Some(("x", sub)) => handle_x_command(sub),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn ident_from(matches: &ArgMatches) -> WindowIdent {
    let title = matches
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_default();
    let text = matches
        .get_one::<String>("text")
        .cloned()
        .unwrap_or_default();
    if text.is_empty() {
        WindowIdent::new(title)
    } else {
        WindowIdent::with_text(title, text)
    }
}

fn open_window(matches: &ArgMatches) -> Result<Window, Box<dyn std::error::Error>> {
    let ident = ident_from(matches);
    Window::open(ident).map_err(|e| {
        eprintln!("{}", e);
        error!(event = "cli.window_open_failed", code = e.error_code(), error = %e);
        e.into()
    })
}

fn fail(e: impl AutowinError) -> Box<dyn std::error::Error> {
    eprintln!("{}", e);
    error!(event = "cli.command_failed", code = e.error_code(), error = %e);
    Box::new(e)
}

fn handle_exists(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let ident = ident_from(matches);
    let found = window::exists(ident.title(), ident.text());
    info!(event = "cli.exists_completed", ident = %ident, found = found);
    println!("{}", found);
    Ok(())
}

fn handle_wait(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let ident = ident_from(matches);
    let timeout = match matches.get_one::<u32>("timeout") {
        Some(timeout) => *timeout,
        None => config::load_hierarchy().map_err(fail)?.wait.default_timeout_secs,
    };

    if window::wait(ident.title(), ident.text(), timeout) {
        println!("true");
        Ok(())
    } else {
        eprintln!("Window {} did not appear within {}s", ident, timeout);
        Err("wait timed out".into())
    }
}

fn handle_activate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let active = window.activate();
    println!("{}", active);
    Ok(())
}

fn handle_state(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let state = window.state().map_err(fail)?;

    if matches.get_flag("json") {
        let value = serde_json::json!({
            "bits": state.bits(),
            "exists": state.exists(),
            "visible": state.visible(),
            "enabled": state.enabled(),
            "active": state.active(),
            "minimized": state.minimized(),
            "maximized": state.maximized(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("bits: {}", state.bits());
        println!("exists: {}", state.exists());
        println!("visible: {}", state.visible());
        println!("enabled: {}", state.enabled());
        println!("active: {}", state.active());
        println!("minimized: {}", state.minimized());
        println!("maximized: {}", state.maximized());
    }
    Ok(())
}

fn handle_rect(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let rect = window.rect().map_err(fail)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&rect)?);
    } else {
        println!("{} {} {} {}", rect.x(), rect.y(), rect.width(), rect.height());
    }
    Ok(())
}

fn handle_classes(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let classes = window.class_list().map_err(fail)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&classes)?);
    } else {
        for class in classes {
            println!("{}", class);
        }
    }
    Ok(())
}

fn handle_text(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    println!("{}", window.text().map_err(fail)?);
    Ok(())
}

fn handle_title(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    println!("{}", window.title().map_err(fail)?);
    Ok(())
}

fn handle_handle(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    println!("{}", window.handle().map_err(fail)?);
    Ok(())
}

fn handle_pid(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    println!("{}", window.pid().map_err(fail)?);
    Ok(())
}

fn handle_close(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    window.close();
    println!("close requested");
    Ok(())
}

fn handle_kill(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    window.kill();
    println!("kill requested");
    Ok(())
}

fn handle_menu(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;

    let items: Vec<&String> = matches
        .get_many::<String>("items")
        .map(|values| values.collect())
        .unwrap_or_default();
    let (menu, rest) = items.split_first().ok_or("menu is required")?;
    let rest: Vec<&str> = rest.iter().map(|s| s.as_str()).collect();

    window.select_menu_item(menu, &rest).map_err(fail)?;
    println!("menu item selected");
    Ok(())
}

fn handle_trans(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let level = *matches.get_one::<u8>("level").ok_or("level is required")?;
    window.set_transparency(level).map_err(fail)?;
    println!("transparency set to {}", level);
    Ok(())
}

fn handle_ontop(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let on = matches
        .get_one::<String>("flag")
        .map(|f| f == "on")
        .unwrap_or(false);
    window.set_on_top(on).map_err(fail)?;
    println!("always-on-top {}", if on { "set" } else { "cleared" });
    Ok(())
}

fn handle_move(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let coord = |name: &str| -> Result<i32, Box<dyn std::error::Error>> {
        matches
            .get_one::<i32>(name)
            .copied()
            .ok_or_else(|| format!("{} is required", name).into())
    };
    window
        .move_to(coord("x")?, coord("y")?, coord("width")?, coord("height")?)
        .map_err(fail)?;
    println!("window moved");
    Ok(())
}

fn handle_statusbar(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let part = matches.get_one::<u32>("part").copied().unwrap_or(1);
    println!("{}", window.statusbar_text(part).map_err(fail)?);
    Ok(())
}

fn handle_focused(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let window = open_window(matches)?;
    let control = window.focused_control().map_err(fail)?;
    println!("{}", control.control_id());
    Ok(())
}

fn handle_tools(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let availability: Vec<(XTool, bool)> =
        XTool::ALL.iter().map(|t| (*t, t.is_available())).collect();

    if matches.get_flag("json") {
        let value: Vec<serde_json::Value> = availability
            .iter()
            .map(|(tool, available)| {
                serde_json::json!({ "tool": tool.command(), "available": available })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for (tool, available) in availability {
            println!(
                "{}: {}",
                tool,
                if available { "available" } else { "missing" }
            );
        }
    }
    Ok(())
}

fn handle_x_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("active", _)) => {
            println!("{}", xdo::active_window().map_err(fail)?);
            Ok(())
        }
        Some(("search", sub)) => {
            let pattern = sub
                .get_one::<String>("pattern")
                .ok_or("pattern is required")?;
            for id in xdo::search(pattern).map_err(fail)? {
                println!("{}", id);
            }
            Ok(())
        }
        Some(("activate", sub)) => {
            let id = *sub.get_one::<u64>("id").ok_or("id is required")?;
            xdo::activate_window(id).map_err(fail)?;
            println!("window {} activated", id);
            Ok(())
        }
        Some(("geometry", sub)) => {
            let id = *sub.get_one::<u64>("id").ok_or("id is required")?;
            let rect = xdo::window_geometry(id).map_err(fail)?;
            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&rect)?);
            } else {
                println!("{} {} {} {}", rect.x(), rect.y(), rect.width(), rect.height());
            }
            Ok(())
        }
        Some(("kill", sub)) => {
            let id = *sub.get_one::<u64>("id").ok_or("id is required")?;
            xdo::kill_window(id).map_err(fail)?;
            println!("window {} killed", id);
            Ok(())
        }
        Some(("clip", sub)) => handle_clip_command(sub),
        _ => {
            error!(event = "cli.x_subcommand_unknown");
            Err("Unknown x subcommand".into())
        }
    }
}

fn handle_clip_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let selection = if config::load_hierarchy().map_err(fail)?.selection.use_clipboard {
        Selection::Clipboard
    } else {
        Selection::Primary
    };

    match matches.subcommand() {
        Some(("read", _)) => {
            print!("{}", xdo::read_selection(selection).map_err(fail)?);
            Ok(())
        }
        Some(("write", sub)) => {
            let content = sub
                .get_one::<String>("content")
                .ok_or("content is required")?;
            xdo::write_selection(selection, content).map_err(fail)?;
            Ok(())
        }
        _ => {
            error!(event = "cli.clip_subcommand_unknown");
            Err("Unknown clip subcommand".into())
        }
    }
}
