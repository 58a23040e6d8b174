//! Debug log sink.
//!
//! The crate logs through the `log` facade. A file-backed sink is
//! installed once at plugin initialization; unless debugging is enabled
//! in the settings document the facade level stays `Off` and every
//! `log::debug!` in the crate is filtered out before reaching the sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

struct FileLog {
    path: PathBuf,
    // Serializes writers; the file itself is opened per message so the
    // log stays readable while the plugin runs.
    lock: Mutex<()>,
}

impl Log for FileLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "{stamp}: {}", record.args());
        }
    }

    fn flush(&self) {}
}

fn level_for(enabled: bool) -> LevelFilter {
    if enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    }
}

/// Install the file sink at `path`, removing any log left over from a
/// previous run. Safe to call more than once: if a sink is already
/// installed only the filter level is updated.
pub fn init(path: &Path, enabled: bool) {
    let _ = std::fs::remove_file(path);
    let sink = Box::new(FileLog {
        path: path.to_path_buf(),
        lock: Mutex::new(()),
    });
    let _ = log::set_boxed_logger(sink);
    log::set_max_level(level_for(enabled));
}

/// Adjust filtering after a settings reload.
pub fn set_enabled(enabled: bool) {
    log::set_max_level(level_for(enabled));
}
