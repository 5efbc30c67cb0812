//! Database backup for SimetricGym
//!
//! Copies the database file to a timestamped destination under the user's
//! Documents folder. One attempt, no retry; whatever the copy leaves behind
//! on failure is the end state.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Backup error type
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("source database not found: {0}")]
    SourceMissing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not resolve the Documents folder")]
    NoDocumentsDir,
}

/// Backup filename for a given moment, minute granularity.
///
/// Two backups taken within the same minute share a name and overwrite
/// each other.
pub fn backup_file_name(stamp: DateTime<Local>) -> String {
    format!("backup_simetricdb_{}.sqlite", stamp.format("%Y-%m-%d_%H-%M"))
}

/// Default backup directory under the user's Documents folder
pub fn default_backup_dir() -> Result<PathBuf, BackupError> {
    dirs::document_dir()
        .map(|d| d.join("SimetricGym_Backups"))
        .ok_or(BackupError::NoDocumentsDir)
}

/// Copy `source` into `dest_dir` under a timestamped name.
///
/// Creates `dest_dir` (and missing ancestors) if absent. Returns the full
/// destination path on success.
pub fn create_backup(
    source: &Path,
    dest_dir: &Path,
    stamp: DateTime<Local>,
) -> Result<PathBuf, BackupError> {
    if !source.exists() {
        return Err(BackupError::SourceMissing(source.to_path_buf()));
    }

    fs::create_dir_all(dest_dir)?;

    let dest = dest_dir.join(backup_file_name(stamp));
    fs::copy(source, &dest)?;

    tracing::info!("Database backed up to {:?}", dest);
    Ok(dest)
}
