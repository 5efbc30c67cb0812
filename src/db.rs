//! Database module for SimetricGym
//! Local SQLite store for the client roster

use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CURRENT_SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Duplicate cedula: a client with this cedula already exists")]
    DuplicateCedula,
    #[error("Database not initialized")]
    NotInitialized,
    #[error("Migration failed: {0}")]
    Migration(String),
    #[error("Database corruption detected")]
    Corruption,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A client record as stored in the `clientes` table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Client {
    pub id: i64,
    pub nombre: String,
    pub cedula: String,
    pub tipo_membresia: String,
    pub telefono: String,
    pub direccion: String,
    pub correo: String,
    pub fecha_registro: String,
    pub fecha_expiracion: String,
}

/// Input for a new client; `id` is assigned by the store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewClient {
    pub nombre: String,
    pub cedula: String,
    pub tipo_membresia: String,
    pub telefono: String,
    pub direccion: String,
    pub correo: String,
    pub fecha_registro: String,
    pub fecha_expiracion: String,
}

/// Database manager for SimetricGym
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open or create the backing database file
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Initialize database schema. Safe to call on every startup.
    pub fn initialize(&self) -> Result<(), DbError> {
        // Run integrity check
        self.check_integrity()?;

        // Get current schema version
        let version = self.get_schema_version()?;

        // Run migrations
        if version < CURRENT_SCHEMA_VERSION {
            self.run_migrations(version)?;
        }

        Ok(())
    }

    /// Check database integrity
    pub fn check_integrity(&self) -> Result<(), DbError> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result != "ok" {
            return Err(DbError::Corruption);
        }

        Ok(())
    }

    /// Get current schema version
    fn get_schema_version(&self) -> Result<i32, DbError> {
        // Create settings table if not exists
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        let version: SqliteResult<String> = self.conn.query_row(
            "SELECT value FROM settings WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        );

        match version {
            Ok(v) => v
                .parse()
                .map_err(|_| DbError::Migration("Invalid schema version".into())),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DbError::Sqlite(e)),
        }
    }

    /// Set schema version
    fn set_schema_version(&self, version: i32) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES ('schema_version', ?)",
            params![version.to_string()],
        )?;
        Ok(())
    }

    /// Run database migrations
    fn run_migrations(&self, from_version: i32) -> Result<(), DbError> {
        let tx = self.conn.unchecked_transaction()?;

        if from_version < 1 {
            self.migrate_v1()?;
        }

        tx.commit()?;
        self.set_schema_version(CURRENT_SCHEMA_VERSION)?;

        tracing::info!(
            "Database schema migrated from v{} to v{}",
            from_version,
            CURRENT_SCHEMA_VERSION
        );

        Ok(())
    }

    /// Migration to v1: Initial schema
    fn migrate_v1(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            r#"
            -- Client roster
            CREATE TABLE IF NOT EXISTS clientes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                cedula TEXT NOT NULL UNIQUE,
                tipo_membresia TEXT NOT NULL,
                telefono TEXT NOT NULL,
                direccion TEXT NOT NULL,
                correo TEXT NOT NULL,
                fecha_registro TEXT NOT NULL,
                fecha_expiracion TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_clientes_cedula ON clientes(cedula);
            "#,
        )?;

        Ok(())
    }

    /// Insert a new client. Returns the assigned id.
    ///
    /// A cedula that already exists in the table fails with
    /// [`DbError::DuplicateCedula`]; the existing row is untouched.
    pub fn add_client(&self, client: &NewClient) -> Result<i64, DbError> {
        let result = self.conn.execute(
            "INSERT INTO clientes
             (nombre, cedula, tipo_membresia, telefono, direccion, correo,
              fecha_registro, fecha_expiracion)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                &client.nombre,
                &client.cedula,
                &client.tipo_membresia,
                &client.telefono,
                &client.direccion,
                &client.correo,
                &client.fecha_registro,
                &client.fecha_expiracion,
            ],
        );

        match result {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(DbError::DuplicateCedula)
            }
            Err(e) => Err(DbError::Sqlite(e)),
        }
    }

    /// List all clients, oldest first
    pub fn list_clients(&self) -> Result<Vec<Client>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, nombre, cedula, tipo_membresia, telefono, direccion,
                    correo, fecha_registro, fecha_expiracion
             FROM clientes
             ORDER BY id",
        )?;

        let clients = stmt
            .query_map([], |row| {
                Ok(Client {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    cedula: row.get(2)?,
                    tipo_membresia: row.get(3)?,
                    telefono: row.get(4)?,
                    direccion: row.get(5)?,
                    correo: row.get(6)?,
                    fecha_registro: row.get(7)?,
                    fecha_expiracion: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(clients)
    }

    /// Count of client rows
    pub fn count_clients(&self) -> Result<i64, DbError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM clientes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get inner connection reference
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Get the application data directory
pub fn get_app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("SimetricGym")
}

/// Get database path
pub fn get_db_path() -> PathBuf {
    get_app_data_dir().join("simetricdb.sqlite")
}
