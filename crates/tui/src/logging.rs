use directories::ProjectDirs;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV: &str = "SHIPBOOK_LOG";
const LOG_FILE_NAME: &str = "shipbook.log";

pub fn log_file_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "shipbook", "shipbook").map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
}

/// Sends tracing output to the log file; the terminal belongs to the UI.
/// Logging stays off when the file cannot be created.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
