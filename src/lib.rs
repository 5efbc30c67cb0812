//! SimetricGym - Client management desktop app for a gym business

pub mod backup;
pub mod commands;
pub mod db;
pub mod error;

use crate::db::Database;
use std::sync::Mutex;

/// Application state
pub struct AppState {
    pub db: Mutex<Option<Database>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            db: Mutex::new(None),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::default())
        .invoke_handler(tauri::generate_handler![
            commands::initialize_app,
            commands::add_client,
            commands::list_clients,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, _event| {
            // macOS convention: the app stays alive after its last window
            // closes; everywhere else the default exit applies.
            #[cfg(target_os = "macos")]
            if let tauri::RunEvent::ExitRequested { code: None, api, .. } = &_event {
                api.prevent_exit();
            }
        });
}
