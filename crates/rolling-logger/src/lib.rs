//! Rolling Logger
//!
//! File logger for console applications:
//! - size-based rotation (`app.log`, `app.log.1`, ... `app.log.N`)
//! - in-memory circular buffer of the most recent lines
//! - installed as the global `tracing` subscriber, `log` records included

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the current file would grow past this size
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Number of rolled files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;
/// Lines kept in memory for `recent_lines`
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("failed to prepare log file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
    #[error("logger not initialized")]
    NotInitialized,
}

/// Rotation and buffer limits
#[derive(Debug, Clone, Copy)]
pub struct RollingOptions {
    pub max_bytes: u64,
    pub max_files: usize,
    pub buffer_lines: usize,
}

impl Default for RollingOptions {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            buffer_lines: DEFAULT_BUFFER_LINES,
        }
    }
}

struct Inner {
    path: PathBuf,
    file: File,
    written: u64,
    options: RollingOptions,
    recent: VecDeque<String>,
    partial: String,
}

impl Inner {
    fn rolled_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", n));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.options.max_files > 0 {
            // Shift app.log.(n-1) -> app.log.n, oldest falls off
            for n in (1..self.options.max_files).rev() {
                let from = self.rolled_path(n);
                if from.exists() {
                    fs::rename(&from, self.rolled_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.rolled_path(1))?;
        }
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.recent.len() == self.options.buffer_lines {
                self.recent.pop_front();
            }
            if self.options.buffer_lines > 0 {
                self.recent.push_back(line.trim_end().to_string());
            }
        }
    }
}

/// Shared handle to the active log file; cheap to clone
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

impl RollingWriter {
    /// Open (or append to) `<dir>/<app_name>.log`
    pub fn open(dir: impl AsRef<Path>, app_name: &str, options: RollingOptions) -> Result<Self, LoggerError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                path,
                file,
                written,
                options,
                recent: VecDeque::with_capacity(options.buffer_lines),
                partial: String::new(),
            })),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().recent.iter().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panic while holding the lock leaves the buffer usable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock();
        if inner.written > 0 && inner.written + buf.len() as u64 > inner.options.max_bytes {
            inner.rotate()?;
        }
        inner.file.write_all(buf)?;
        inner.written += buf.len() as u64;
        inner.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger writing into `log_dir`
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingOptions::default())
}

pub fn init_logger_with(log_dir: impl AsRef<Path>, app_name: &str, options: RollingOptions) -> Result<(), LoggerError> {
    let writer = RollingWriter::open(log_dir, app_name, options)?;

    tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    let _ = LOGGER.set(writer);
    log::info!("logger started for {}", app_name);
    Ok(())
}

/// Log an info line through the global logger
pub fn info(msg: &str) -> Result<(), LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::info!("{}", msg);
    Ok(())
}

/// Log an error line through the global logger
pub fn error(msg: &str) -> Result<(), LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::error!("{}", msg);
    Ok(())
}

/// Recent lines of the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|w| w.recent_lines()).unwrap_or_default()
}

/// Path of the active log file, once initialized
pub fn log_path() -> Option<PathBuf> {
    LOGGER.get().map(|w| w.path())
}
