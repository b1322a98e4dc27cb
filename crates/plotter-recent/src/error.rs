use plotter_prefs::PrefsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecentFilesError {
    #[error("recent files menu label must not be blank")]
    EmptyLabel,
    #[error("recent files capacity must be at least 1")]
    ZeroCapacity,
    #[error("recent file index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("recent file is no longer listed: {id}")]
    UnknownItem { id: String },
    #[error("recent files storage error: {0}")]
    Storage(#[from] PrefsError),
}

pub type Result<T> = std::result::Result<T, RecentFilesError>;
