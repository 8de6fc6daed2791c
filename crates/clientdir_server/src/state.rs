//! Shared application state.

use crate::error::ApiError;
use clientdir_core::{
    ClientGenerator, ClientRepository, ClientSeeder, LookupResponse, LookupService,
    SqliteClientRepository,
};
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};

/// Store handle shared by every worker.
///
/// `rusqlite::Connection` is not `Sync`, so access is serialized by a mutex.
pub struct AppState {
    conn: Mutex<Connection>,
}

impl AppState {
    /// Wraps a connection obtained from `clientdir_core::db::open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Runs a lookup against the shared store.
    pub fn lookup(&self, letter: Option<&str>) -> Result<LookupResponse, ApiError> {
        let conn = self.lock()?;
        let repo = SqliteClientRepository::try_new(&conn)?;
        Ok(LookupService::new(repo).lookup(letter)?)
    }

    /// Seeds `count` generated clients when the store holds none.
    ///
    /// Returns the number of inserted clients (`0` when rows already exist).
    pub fn seed_if_empty(
        &self,
        count: usize,
        generator: impl ClientGenerator,
    ) -> Result<usize, ApiError> {
        let conn = self.lock()?;
        let repo = SqliteClientRepository::try_new(&conn)?;
        if repo.count_clients()? > 0 {
            return Ok(0);
        }

        let ids = ClientSeeder::new(repo, generator).run(count)?;
        Ok(ids.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn.lock().map_err(|_| ApiError::StatePoisoned)
    }
}
