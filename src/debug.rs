//! Debug log backend for tabdeck
//!
//! Controlled by the DEBUG_LEVEL environment variable unless a level is
//! passed explicitly:
//! - 0 or unset: No debugging
//! - 1: Errors only
//! - 2: Info level (mount, open/close, preference changes)
//! - 3: Debug level (navigation, scroll scheduling, no-op operations)
//! - 4: Trace level
//!
//! Output goes to tabdeck_debug.log in the system temp directory so stdout
//! stays clean for CLI output. When RUST_LOG is set, records are mirrored to
//! stderr as well.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Self {
        std::env::var("DEBUG_LEVEL")
            .ok()
            .and_then(|val| val.trim().parse::<u8>().ok())
            .map_or(DebugLevel::Off, Self::from_number)
    }

    fn from_number(n: u8) -> Self {
        match n {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Info,
            3 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    /// Matching `log` filter. Warnings ride along with errors.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Warn,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("tabdeck_debug.log")
}

struct LogBridge {
    level: log::LevelFilter,
    file: Option<Mutex<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn new(level: log::LevelFilter) -> Self {
        let file = if level == log::LevelFilter::Off {
            None
        } else {
            // Unopenable log files are silently ignored
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
                .ok()
        };

        let bridge = Self {
            level,
            file: file.map(Mutex::new),
            mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
        };
        bridge.write_raw(&format!(
            "{}\ntabdeck debug session started at {} (level={})\n{}\n",
            "=".repeat(80),
            timestamp(),
            level,
            "=".repeat(80)
        ));
        bridge
    }

    fn write_raw(&self, msg: &str) {
        if let Some(file) = &self.file {
            let mut file = file.lock();
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        self.write_raw(&line);
        if self.mirror_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Route `log` records to the debug log file.
///
/// `level` (from `--log-level`) takes precedence over DEBUG_LEVEL. Calling
/// this more than once keeps the first logger.
pub fn init_log_bridge(level: Option<log::LevelFilter>) {
    let level = level.unwrap_or_else(|| DebugLevel::from_env().to_level_filter());
    let bridge = BRIDGE.get_or_init(|| LogBridge::new(level));
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}
