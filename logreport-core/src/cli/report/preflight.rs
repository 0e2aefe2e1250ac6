use crate::error::PreflightError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Refuse to start unless `log_path` is a file and `output_dir` is free.
pub fn check(log_path: &Path, output_dir: &Path) -> Result<(), PreflightError> {
    if output_dir.exists() {
        return Err(PreflightError::OutputExists {
            path: output_dir.to_path_buf(),
        });
    }

    let metadata = fs::metadata(log_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PreflightError::LogNotFound {
            path: log_path.to_path_buf(),
        },
        _ => PreflightError::LogUnreadable {
            path: log_path.to_path_buf(),
            source: e,
        },
    })?;

    if metadata.is_dir() {
        return Err(PreflightError::LogIsDirectory {
            path: log_path.to_path_buf(),
        });
    }
    if !metadata.is_file() {
        return Err(PreflightError::LogNotAFile {
            path: log_path.to_path_buf(),
        });
    }

    Ok(())
}
