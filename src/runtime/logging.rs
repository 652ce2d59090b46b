use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::{self, LogLevelSetting, LogSettings};

pub fn level_filter(level: LogLevelSetting) -> LevelFilter {
    match level {
        LogLevelSetting::Off => LevelFilter::Off,
        LogLevelSetting::Error => LevelFilter::Error,
        LogLevelSetting::Warn => LevelFilter::Warn,
        LogLevelSetting::Info => LevelFilter::Info,
        LogLevelSetting::Debug => LevelFilter::Debug,
        LogLevelSetting::Trace => LevelFilter::Trace,
    }
}

/// Where log lines go: the configured file, else the XDG state directory.
pub fn log_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(config::default_log_path)
}

/// Install a file logger. The terminal belongs to the TUI, so nothing is
/// ever written to stdout or stderr.
///
/// Returns the log file path, or `None` when logging is off.
pub fn init(settings: &LogSettings) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let level = level_filter(settings.level);
    if level == LevelFilter::Off {
        return Ok(None);
    }
    let Some(path) = log_path(settings) else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let log_config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level, log_config, file)?;

    Ok(Some(path))
}
