// File: ./src/logging.rs
// Logger setup for the binaries. The library only talks to the `log` facade.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;

fn log_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Appends to `eventline.log` in the data directory.
/// Used while the TUI owns the terminal.
pub fn init_file_logging(ctx: &dyn AppContext, level: LevelFilter) -> Result<()> {
    let path = ctx.get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;
    WriteLogger::init(level, log_config(), file).context("Logger already initialized")?;
    Ok(())
}

/// Logs to stderr so stdout stays clean for printed output.
pub fn init_stderr_logging(level: LevelFilter) -> Result<()> {
    TermLogger::init(level, log_config(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Logger already initialized")?;
    Ok(())
}
