//! HTTP surface for the client directory.
//!
//! # Responsibility
//! - Expose the lookup use-case as `GET /clients?letter=X`.
//! - Serve the frontend bootstrap document.
//!
//! # Invariants
//! - Handlers never touch SQL directly; they go through `clientdir_core`.

pub mod error;
pub mod routes;
pub mod shell;
pub mod state;

pub use error::ApiError;
pub use routes::configure;
pub use shell::ShellConfig;
pub use state::AppState;
