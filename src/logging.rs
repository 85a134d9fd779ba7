//! Append-only file logging.
//!
//! Implements the `log` facade with a sink that appends timestamped lines
//! to the configured log file and mirrors every record to stderr. The
//! parent directory is created on first use; if the file cannot be opened
//! the sink degrades to stderr only; logging problems never stop the run.

use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

struct FileLogger {
    file: Option<Mutex<File>>,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        );
        eprintln!("{}", line);
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global logger writing to `path`.
///
/// Returns whether the file sink is active; `false` means stderr-only.
pub fn init(path: &Path) -> bool {
    let file = match open_append(path) {
        Ok(file) => Some(Mutex::new(file)),
        Err(e) => {
            eprintln!("monmenu: cannot open log file {}: {}", path.display(), e);
            None
        }
    };
    let file_active = file.is_some();
    // A second install only happens in tests; ignore it.
    let _ = log::set_boxed_logger(Box::new(FileLogger { file }));
    log::set_max_level(LevelFilter::Info);
    file_active
}
