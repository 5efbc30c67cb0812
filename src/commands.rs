//! Tauri commands for SimetricGym

use crate::db::{get_app_data_dir, get_db_path, Client, Database, NewClient};
use crate::error::CommandError;
use crate::AppState;
use tauri::State;

/// Result of application initialization
#[derive(Debug, serde::Serialize)]
pub struct InitResult {
    pub db_path: String,
    pub client_count: i64,
}

/// Initialize the application
#[tauri::command]
pub async fn initialize_app(state: State<'_, AppState>) -> Result<InitResult, CommandError> {
    // Ensure app data directory exists
    let app_dir = get_app_data_dir();
    std::fs::create_dir_all(&app_dir)
        .map_err(|e| CommandError::from(crate::db::DbError::Io(e)))?;

    // Open database
    let db_path = get_db_path();
    let db = Database::open(&db_path)?;
    db.initialize()?;

    let client_count = db.count_clients()?;

    let mut db_lock = state
        .db
        .lock()
        .map_err(|_| CommandError::not_initialized())?;
    *db_lock = Some(db);

    Ok(InitResult {
        db_path: db_path.display().to_string(),
        client_count,
    })
}

/// Register a new client. Resolves with the assigned id, or rejects with
/// kind `constraint_violation` when the cedula is already registered.
#[tauri::command]
pub async fn add_client(
    state: State<'_, AppState>,
    client: NewClient,
) -> Result<i64, CommandError> {
    let db_lock = state
        .db
        .lock()
        .map_err(|_| CommandError::not_initialized())?;
    let db = db_lock.as_ref().ok_or_else(CommandError::not_initialized)?;

    let id = db.add_client(&client)?;
    tracing::info!("Registered client {} (id {})", client.cedula, id);
    Ok(id)
}

/// Full client roster for the window
#[tauri::command]
pub async fn list_clients(state: State<'_, AppState>) -> Result<Vec<Client>, CommandError> {
    let db_lock = state
        .db
        .lock()
        .map_err(|_| CommandError::not_initialized())?;
    let db = db_lock.as_ref().ok_or_else(CommandError::not_initialized)?;

    Ok(db.list_clients()?)
}
