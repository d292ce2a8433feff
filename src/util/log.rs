// src/util/log.rs

//! File-based logging for the TUI. Nothing may be written to stdout while the
//! terminal is in raw mode, so every level goes to its own file instead.
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::{LazyLock, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global logger instance. `None` when the log directory could not be created.
pub static LOGGER: LazyLock<Option<Logger>> = LazyLock::new(|| {
    let dir = LOG_DIR.get().cloned().unwrap_or_else(|| PathBuf::from("./logs"));
    Logger::new(&dir).ok()
});

/// Point the global logger at `dir`. Only effective before the first log line.
pub fn init_log_dir(dir: impl Into<PathBuf>) -> bool {
    LOG_DIR.set(dir.into()).is_ok()
}

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Logger that writes to separate files by severity
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl Logger {
    /// Create a new logger with the specified directory
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        DEBUG_ENABLED.get_or_init(|| {
            std::env::var("DEBUG").unwrap_or_default() == "true"
        });

        let log_dir = log_dir.to_path_buf();
        create_dir_all(&log_dir)?;

        // Start fresh each session
        let error_file = File::create(log_dir.join("error.log"))?;
        let warn_file = File::create(log_dir.join("warn.log"))?;
        let info_file = File::create(log_dir.join("info.log"))?;
        let debug_file = File::create(log_dir.join("debug.log"))?;

        Ok(Self {
            log_dir,
            error_file: Mutex::new(error_file),
            warn_file: Mutex::new(warn_file),
            info_file: Mutex::new(info_file),
            debug_file: Mutex::new(debug_file),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            logger.error(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            logger.warn(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
            logger.info(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            if let Some(logger) = $crate::util::log::LOGGER.as_ref() {
                logger.debug(&format!($($arg)*));
            }
        }
    }};
}
