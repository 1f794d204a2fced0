use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

struct LogFile {
    path: PathBuf,
    file: File,
}

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<LogFile>> = Mutex::new(None);
}

/// Opens (or creates) the log file. Until this succeeds `log` discards messages.
pub fn init(path: &Path) {
    if let Ok(mut logger) = LOGGER.lock()
        && logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(LogFile {
            path: path.to_path_buf(),
            file,
        });
    }
}

/// Path of the file messages currently go to, if any.
pub fn log_path() -> Option<PathBuf> {
    LOGGER
        .lock()
        .ok()
        .and_then(|logger| logger.as_ref().map(|l| l.path.clone()))
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(target) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(target.file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    lazy_static::lazy_static! {
        // Outlives every test so the file the logger holds is never removed under it.
        static ref LOG_DIR: tempfile::TempDir = tempfile::tempdir().unwrap();
    }

    fn shared_log_path() -> PathBuf {
        LOG_DIR.path().join("quiz.log")
    }

    #[test]
    fn test_logger_writes_to_file() {
        init(&shared_log_path());
        log("Test log message");

        let active = log_path().expect("logger was initialised");
        assert_eq!(active, shared_log_path());
        let contents = std::fs::read_to_string(&active).unwrap();
        assert!(contents.contains("Test log message"));
        assert!(contents.starts_with('['));
    }

    #[test]
    fn test_second_init_keeps_first_file() {
        init(&shared_log_path());
        let other = tempfile::tempdir().unwrap();
        let second = other.path().join("second.log");
        init(&second);
        assert_eq!(log_path(), Some(shared_log_path()));
        assert!(!second.exists());
    }

    #[test]
    fn test_log_before_init_is_harmless() {
        log("nobody is listening");
    }
}
