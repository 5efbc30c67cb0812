//! Common test utilities for SimetricGym integration tests

use simetric_gym_lib::db::{Database, NewClient};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context holding temporary resources
#[allow(dead_code)]
pub struct TestContext {
    pub temp_dir: TempDir,
    pub db: Database,
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new test context with an initialized database
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("simetricdb.sqlite");
        let db = Database::open(&db_path)?;
        db.initialize()?;

        Ok(Self {
            temp_dir,
            db,
            db_path,
        })
    }
}

/// A fully populated client input with the given cedula
#[allow(dead_code)]
pub fn client_with_cedula(cedula: &str) -> NewClient {
    NewClient {
        nombre: "Ana Ruiz".into(),
        cedula: cedula.into(),
        tipo_membresia: "Gold".into(),
        telefono: "555-0100".into(),
        direccion: "Calle 1".into(),
        correo: "ana@x.com".into(),
        fecha_registro: "2024-01-01".into(),
        fecha_expiracion: "2025-01-01".into(),
    }
}
