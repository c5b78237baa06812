use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Appends every record to a log file and echoes warnings and errors to stderr.
pub struct Logger {
    file_output: Mutex<File>,
    level: LevelFilter,
}

impl Logger {
    pub fn new(log_path: &Path, level: LevelFilter) -> std::io::Result<Self> {
        Ok(Logger {
            file_output: Mutex::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_path)?,
            ),
            level,
        })
    }

    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!(
            "{}, {}, {}",
            record.args(),
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0)
        );
        if let Ok(mut file_handle) = self.file_output.lock() {
            let _ = writeln!(file_handle, "{}", message);
            let _ = file_handle.flush();
        }
        if record.level() <= Level::Warn {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file_handle) = self.file_output.lock() {
            let _ = file_handle.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_records_at_or_above_the_level() {
        let path = std::env::temp_dir().join(format!("apipuncher-log-{}", std::process::id()));
        let logger = Logger::new(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Info)
                .file(Some("main.rs"))
                .line(Some(7))
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents, "kept, main.rs, 7\n");
    }
}
