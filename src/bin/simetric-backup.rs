//! SimetricGym backup utility
//!
//! Copies the client database to a timestamped file under
//! ~/Documents/SimetricGym_Backups/. Takes no arguments; meant to be run
//! manually or from an external scheduler.
//!
//! Usage:
//!   simetric-backup

use chrono::Local;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use simetric_gym_lib::backup::{create_backup, default_backup_dir};
use simetric_gym_lib::db::get_db_path;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    match run() {
        Ok(dest) => {
            println!("Respaldo creado exitosamente en: {}", dest);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error al crear respaldo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, simetric_gym_lib::backup::BackupError> {
    let source = get_db_path();
    let dest_dir = default_backup_dir()?;
    let dest = create_backup(&source, &dest_dir, Local::now())?;
    Ok(dest.display().to_string())
}
