use crate::error::{CliError, Result as CliErrorResult};

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file or when
///   stderr is not a terminal)
///
/// Stdout is reserved for command output.
#[track_caller]
pub fn initialize(
    log_level: cc_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {e}",
                        log_path.display()
                    ))
                })?;
            plain().chain(file)
        }
        None if use_color(colored, std::io::stderr().is_terminal()) => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{target}]",
                        date = humantime::format_rfc3339_seconds(SystemTime::now()),
                        level = colors.color(record.level()),
                        target = record.target(),
                    ))
                })
                .chain(std::io::stderr())
        }
        None => plain().chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        // HTTP internals are noise at the client's debug level.
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={level_filter:?}, file={}",
            path.display()
        ),
        None => debug!("Logger initialized: level={level_filter:?}, stderr"),
    }

    Ok(())
}

/// Colors only reach a terminal; piped stderr stays plain.
pub(crate) fn use_color(requested: bool, stderr_is_terminal: bool) -> bool {
    requested && stderr_is_terminal
}

fn plain() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{target}]",
            date = humantime::format_rfc3339_seconds(SystemTime::now()),
            level = record.level(),
            target = record.target(),
        ))
    })
}
