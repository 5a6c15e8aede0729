//! Logging bootstrap.
//!
//! The terminal UI owns the screen, so logs go to a file when one is
//! configured. One-shot commands may log to stderr instead. Initialisation is
//! safe to call more than once; only the first call installs a subscriber.

use crate::error::{MemoPadError, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

pub fn init_logging(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(MemoPadError::Io)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(MemoPadError::Io)?;
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        "memopad starting"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_target_creates_log_file_and_tolerates_reinit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("memopad.log");

        init_logging(LogTarget::File(&path), false).unwrap();
        assert!(path.exists());

        init_logging(LogTarget::File(&path), true).unwrap();
        init_logging(LogTarget::Off, false).unwrap();
    }
}
