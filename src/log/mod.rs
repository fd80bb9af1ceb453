use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "buddy_debug.log";

/// Directory for log files inside the work dir
pub fn log_dir(work_dir: &Path) -> PathBuf {
    work_dir.join("temp")
}

/// Route tracing output to `<dir>/buddy_debug.log`.
///
/// The terminal is owned by the TUI, so nothing is written to stdout or
/// stderr. `RUST_LOG` takes precedence over `level` when set.
pub fn init(dir: &Path, level: Level) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let level = level.as_str().to_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("buddy_capture={level},buddy_tui={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
