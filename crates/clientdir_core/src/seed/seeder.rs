//! Batch seeding of generated clients.
//!
//! # Invariants
//! - Each record is generated and inserted independently, in order.
//! - There is no transaction around the batch; rows inserted before a
//!   failure stay in the store.

use super::generator::ClientGenerator;
use crate::model::client::{ClientId, NewClient};
use crate::repo::client_repo::{ClientRepository, RepoError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Number of clients inserted by a default seeding run.
pub const DEFAULT_SEED_COUNT: usize = 50;

/// Failure that aborted a seeding batch.
#[derive(Debug)]
pub struct SeedError {
    /// Records successfully inserted before the failure.
    pub inserted: usize,
    pub requested: usize,
    pub source: RepoError,
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "seeding aborted after {} of {} clients: {}",
            self.inserted, self.requested, self.source
        )
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Populates a repository with generated clients.
pub struct ClientSeeder<R: ClientRepository, G: ClientGenerator> {
    repo: R,
    generator: G,
}

impl<R: ClientRepository, G: ClientGenerator> ClientSeeder<R, G> {
    pub fn new(repo: R, generator: G) -> Self {
        Self { repo, generator }
    }

    /// Generates and inserts `count` clients, returning their IDs in
    /// insertion order.
    ///
    /// # Errors
    /// Returns the first repository failure wrapped in `SeedError`.
    pub fn run(&mut self, count: usize) -> Result<Vec<ClientId>, SeedError> {
        let started_at = Instant::now();
        info!("event=seed_run module=seed status=start requested={count}");

        let mut ids = Vec::with_capacity(count.min(DEFAULT_SEED_COUNT));
        for _ in 0..count {
            let name = self.generator.name();
            let phone_number = self.generator.phone_number();
            let client = NewClient::new(name, phone_number);

            match self.repo.insert_client(&client) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    error!(
                        "event=seed_run module=seed status=error requested={count} inserted={} duration_ms={} error={}",
                        ids.len(),
                        started_at.elapsed().as_millis(),
                        err
                    );
                    return Err(SeedError {
                        inserted: ids.len(),
                        requested: count,
                        source: err,
                    });
                }
            }
        }

        info!(
            "event=seed_run module=seed status=ok requested={count} inserted={} duration_ms={}",
            ids.len(),
            started_at.elapsed().as_millis()
        );
        Ok(ids)
    }
}
