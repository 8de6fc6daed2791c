//! Client lookup use-case.
//!
//! # Responsibility
//! - Resolve the effective starting letter for a lookup request.
//! - Shape repository results into the `{ "clients": [...] }` envelope.
//!
//! # Invariants
//! - A missing or empty letter behaves exactly like `"A"`.
//! - No matches is an empty list, never an error.
//! - Results are the full matching set; there is no limit or paging.

use crate::model::client::Client;
use crate::repo::client_repo::{ClientRepository, RepoResult};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Letter used when the caller does not supply one.
pub const DEFAULT_LETTER: &str = "A";

/// Response envelope returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Matching clients sorted by name ascending.
    pub clients: Vec<Client>,
}

/// Returns the prefix a lookup will actually use.
///
/// Any non-empty input is passed through unchanged, including multi-character
/// prefixes and whitespace.
pub fn effective_letter(letter: Option<&str>) -> &str {
    match letter {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_LETTER,
    }
}

/// Use-case service for name-prefix lookups.
pub struct LookupService<R: ClientRepository> {
    repo: R,
}

impl<R: ClientRepository> LookupService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every client whose name starts with `letter`.
    ///
    /// Store failures are propagated unchanged.
    pub fn lookup(&self, letter: Option<&str>) -> RepoResult<LookupResponse> {
        let started_at = Instant::now();
        let prefix = effective_letter(letter);

        match self.repo.find_by_name_prefix(prefix) {
            Ok(clients) => {
                info!(
                    "event=client_lookup module=service status=ok prefix_chars={} defaulted={} result_count={} duration_ms={}",
                    prefix.chars().count(),
                    letter.map_or(true, str::is_empty),
                    clients.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(LookupResponse { clients })
            }
            Err(err) => {
                error!(
                    "event=client_lookup module=service status=error prefix_chars={} duration_ms={} error={}",
                    prefix.chars().count(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{effective_letter, DEFAULT_LETTER};

    #[test]
    fn effective_letter_defaults_missing_and_empty() {
        assert_eq!(effective_letter(None), DEFAULT_LETTER);
        assert_eq!(effective_letter(Some("")), DEFAULT_LETTER);
    }

    #[test]
    fn effective_letter_passes_through_other_input() {
        assert_eq!(effective_letter(Some("b")), "b");
        assert_eq!(effective_letter(Some("Mar")), "Mar");
        assert_eq!(effective_letter(Some(" ")), " ");
    }
}
