use crate::error::{Error, ErrorKind, Result};

use std::fmt;
use std::io;

use fern::FormatCallback;
use fern::colors::Color;

fn log_header(level: log::Level, target: &str) -> String {
    match (level, target) {
        (log::Level::Info, "render") => "render: ".to_owned(),
        (log::Level::Info, "check") => "check: ".to_owned(),
        (log::Level::Warn, _) => "[WARNING] ".to_owned(),
        (log::Level::Error, _) => "[ERROR] ".to_owned(),
        (log::Level::Info, _) => "".to_owned(),
        (log::Level::Debug, _) => "".to_owned(),
        (log::Level::Trace, s) => s.to_owned() + " - ",
    }
}

fn log_color(level: log::Level, target: &str) -> Color {
    match (level, target) {
        (log::Level::Trace, "error") => Color::Red,
        (log::Level::Trace, _) => Color::BrightBlack,
        (log::Level::Debug, _) => Color::BrightBlue,
        (log::Level::Info, "render") => Color::Green,
        (log::Level::Info, "check") => Color::Blue,
        (log::Level::Info, _) => Color::White,
        (log::Level::Warn, _) => Color::Magenta,
        (log::Level::Error, _) => Color::Red,
    }
}

fn log_format(out: FormatCallback, message: &fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "\x1B[{color}m{header}{message}\x1B[0m",
        color = log_color(record.level(), record.target()).to_fg_str(),
        header = log_header(record.level(), record.target()),
    ))
}

fn level_filter(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Setup logging in function of verbosity.
pub fn setup_logging(verbosity: u8) -> Result<()> {
    let stdout_config = fern::Dispatch::new().format(log_format).chain(io::stdout());

    fern::Dispatch::new()
        .level(level_filter(verbosity))
        .chain(stdout_config)
        .apply()
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    Ok(())
}
