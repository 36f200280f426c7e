//! Logging setup for the CLI
//!
//! While serving MCP over stdio, stdout belongs to the protocol, so logs go to
//! `~/.geekbot-mcp/<GEEKBOT_MCP_LOG_FILE or mcp.log>` instead. Every other
//! command logs to stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Directory under the home directory holding MCP logs
pub const LOG_DIR_NAME: &str = ".geekbot-mcp";

/// Environment variable overriding the MCP log file name
pub const LOG_FILE_ENV: &str = "GEEKBOT_MCP_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "mcp.log";

/// Writer that flushes after every write so the log is readable while the
/// server is still attached to its client.
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Wrap a shared log file
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

/// Pick the log level from the command-line flags.
///
/// MCP mode always logs at debug level since nothing reaches a terminal.
pub fn log_level(mcp_mode: bool, quiet: bool, debug: bool, verbose: bool) -> Level {
    if mcp_mode {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

/// Location of the MCP log file
pub fn mcp_log_path() -> PathBuf {
    let log_dir = match dirs::home_dir() {
        Some(home) => home.join(LOG_DIR_NAME),
        None => PathBuf::from(LOG_DIR_NAME),
    };
    let file_name = std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    log_dir.join(file_name)
}

fn open_log_file(path: &PathBuf) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global tracing subscriber
pub fn init(level: Level, mcp_mode: bool) {
    if mcp_mode {
        let path = mcp_log_path();
        match open_log_file(&path) {
            Ok(file) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_max_level(level)
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                // Stderr is still free in MCP mode; fall back to it
                eprintln!("Failed to open log file {}: {e}", path.display());
            }
        }
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_precedence() {
        assert_eq!(log_level(true, true, false, false), Level::DEBUG);
        assert_eq!(log_level(false, true, true, true), Level::ERROR);
        assert_eq!(log_level(false, false, true, true), Level::DEBUG);
        assert_eq!(log_level(false, false, false, true), Level::TRACE);
        assert_eq!(log_level(false, false, false, false), Level::INFO);
    }

    #[test]
    fn test_mcp_log_path_is_under_log_dir() {
        let path = mcp_log_path();
        let parent = path.parent().unwrap();
        assert!(parent.ends_with(LOG_DIR_NAME));
    }

    #[test]
    fn test_file_writer_guard_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcp.log");
        let file = File::create(&path).unwrap();
        let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));

        guard.write_all(b"hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
