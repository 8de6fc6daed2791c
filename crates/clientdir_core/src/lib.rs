//! Core domain logic for the client directory.
//! This crate owns the client model, its SQLite storage, the lookup use-case
//! and sample-data seeding.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, effective_log_level, init_logging, logging_status};
pub use model::client::{derive_initials, Client, ClientId, ClientValidationError, NewClient};
pub use repo::client_repo::{ClientRepository, RepoError, RepoResult, SqliteClientRepository};
pub use seed::generator::{ClientGenerator, FakeClientGenerator};
pub use seed::seeder::{ClientSeeder, SeedError, DEFAULT_SEED_COUNT};
pub use service::lookup_service::{effective_letter, LookupResponse, LookupService, DEFAULT_LETTER};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
