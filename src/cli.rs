// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help text.
use crate::store::EventStore;
use crate::timeline::{TimelineAxis, layout_blocks, render_text};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_PRINT_WIDTH: u16 = 72;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tui,
    Help,
    Print {
        /// `None` prints every day.
        date: Option<NaiveDate>,
        width: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
}

/// Parses the arguments after the binary name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let mut root = None;
    let mut command = Command::Tui;
    let mut date = None;
    let mut width = DEFAULT_PRINT_WIDTH;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => command = Command::Help,
            "-r" | "--root" => {
                let value = iter.next().context("--root needs a path")?;
                root = Some(PathBuf::from(value));
            }
            "print" => {
                if command != Command::Help {
                    command = Command::Print { date: None, width };
                }
            }
            "--date" => {
                let value = iter.next().context("--date needs a YYYY-MM-DD value")?;
                date = Some(
                    NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .with_context(|| format!("Invalid date '{}'", value))?,
                );
            }
            "--width" => {
                let value = iter.next().context("--width needs a number")?;
                width = value
                    .parse()
                    .with_context(|| format!("Invalid width '{}'", value))?;
            }
            other => anyhow::bail!("Unknown argument '{}'. Try --help.", other),
        }
    }

    if let Command::Print { .. } = command {
        command = Command::Print { date, width };
    } else if date.is_some() && command == Command::Tui {
        anyhow::bail!("--date only applies to the print command");
    }

    Ok(CliArgs { root, command })
}

/// Text for the `print` command: one day, or every day in order.
pub fn render_print(
    store: &EventStore,
    axis: &TimelineAxis,
    date: Option<NaiveDate>,
    width: u16,
) -> String {
    let blocks = match date {
        Some(day) => store.blocks_on(Some(day)),
        None => store.blocks(),
    };
    if blocks.is_empty() {
        return "No events.\n".to_string();
    }
    render_text(&layout_blocks(&blocks, axis), axis, width)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Eventline v{} - Event announcements on a prioritized day timeline (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!(
        "    {} print [--date <YYYY-MM-DD>] [--width <cols>]",
        binary_name
    );
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("PRINT COMMAND:");
    println!(
        "    {} print                         Print every day's timeline",
        binary_name
    );
    println!(
        "    {} print --date 2025-03-10       Print a single day",
        binary_name
    );
    println!(
        "    {} print --width 100 > day.txt   Wider tracks, saved to a file",
        binary_name
    );
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!("    Enter or a mouse click on an event opens its source link.");
    println!();
    println!("CATEGORIES (highest priority first):");
    println!("    {}", crate::model::KnownCategory::prompt_list());
    println!("    Ranks can be changed with [priority_overrides] in config.toml.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_starts_tui() {
        let args = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(args.command, Command::Tui);
        assert_eq!(args.root, None);
    }

    #[test]
    fn print_with_options_in_any_order() {
        let args = parse_args(["--width", "90", "print", "--date", "2025-03-10"]).unwrap();
        assert_eq!(
            args.command,
            Command::Print {
                date: NaiveDate::from_ymd_opt(2025, 3, 10),
                width: 90
            }
        );
    }

    #[test]
    fn root_is_captured() {
        let args = parse_args(["-r", "/tmp/ev"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/tmp/ev")));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse_args(["print", "--date", "tomorrow"]).is_err());
        assert!(parse_args(["--frobnicate"]).is_err());
        assert!(parse_args(["--date", "2025-01-01"]).is_err());
    }

    #[test]
    fn help_wins() {
        let args = parse_args(["print", "--help"]).unwrap();
        assert_eq!(args.command, Command::Help);
    }
}
