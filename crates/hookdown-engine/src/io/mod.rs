use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid draft path: {0}")]
    InvalidDraftPath(String),
}

/// Read a message draft
pub fn read_draft(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a message draft, treating a missing file as an empty draft
pub fn read_draft_or_empty(path: &Path) -> Result<String, IoError> {
    match read_draft(path) {
        Err(IoError::NotFound(_)) => Ok(String::new()),
        other => other,
    }
}

/// Write a message draft
pub fn write_draft(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// A draft path must not name a directory. It may not exist yet.
pub fn validate_draft_path(path: &Path) -> Result<(), IoError> {
    if path.is_dir() {
        return Err(IoError::InvalidDraftPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    Ok(())
}
