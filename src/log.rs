// src/log.rs
//
// Thin macro layer over `tracing`. Call sites keep the short logf!/logd!/logw!/loge!
// forms; `init` decides where the events end up (debug file for the GUI,
// stderr for the CLI).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `.store/debug.log` (GUI)
    File,
    /// Human-facing stderr (CLI)
    Stderr,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Returns false if one was already set
/// (tests, or a second call) or the log file could not be opened.
pub fn init(target: LogTarget) -> bool {
    match target {
        LogTarget::File => {
            if fs::create_dir_all(STORE_DIR).is_err() {
                return false;
            }
            let path = Path::new(STORE_DIR).join(LOG_FILE);
            let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
                return false;
            };
            fmt()
                .with_env_filter(env_filter("info"))
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        LogTarget::Stderr => fmt()
            .with_env_filter(env_filter("warn"))
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!("{}", format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!("{}", format!($($arg)*))
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!("{}", format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!("{}", format!($($arg)*))
    };
}
