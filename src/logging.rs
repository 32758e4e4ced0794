use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::Path;
use thiserror::Error;

/// Start logging to the file at `path`, appending to it if it already exists.
/// Parent directories are created as needed.
///
/// Logging goes to a file rather than stderr because the terminal is taken
/// over by the game display.
pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<(), LogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Open)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)?;
    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;
    log::info!("{} {} starting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Init(#[from] log::SetLoggerError),
}
