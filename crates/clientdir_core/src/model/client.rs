//! Client domain model.
//!
//! # Responsibility
//! - Define the persisted `Client` record and the `NewClient` insert payload.
//! - Derive initials from a display name.
//!
//! # Invariants
//! - `name` is non-empty for every record written through the repository.
//! - `initials` is a pure function of `name` at creation time; there is no
//!   update path that re-derives it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier for a client row.
pub type ClientId = i64;

/// Validation errors for client payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientValidationError {
    /// `name` is empty or only whitespace.
    EmptyName,
}

impl Display for ClientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "client name cannot be empty"),
        }
    }
}

impl Error for ClientValidationError {}

/// Persisted client record, as returned by lookups.
///
/// Serialized field names are part of the HTTP response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    /// Full display name.
    pub name: String,
    /// Free-form, not validated.
    pub phone_number: String,
    pub initials: String,
}

/// Insert payload for a client that has no ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub phone_number: String,
    pub initials: String,
}

impl NewClient {
    /// Builds an insert payload, deriving `initials` from `name`.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        let name = name.into();
        let initials = derive_initials(&name);
        Self {
            name,
            phone_number: phone_number.into(),
            initials,
        }
    }

    /// Checks the payload before it is written.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClientValidationError::EmptyName);
        }
        Ok(())
    }

    /// Attaches a store-assigned ID, producing the persisted shape.
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            phone_number: self.phone_number,
            initials: self.initials,
        }
    }
}

/// Derives initials from a display name.
///
/// The name is split on single spaces. Empty tokens (from leading, trailing
/// or repeated spaces) are skipped. The first character of each remaining
/// token is uppercased and the results are concatenated in order.
///
/// ```
/// use clientdir_core::derive_initials;
///
/// assert_eq!(derive_initials("Mary Jane Watson"), "MJW");
/// assert_eq!(derive_initials("  jane   doe "), "JD");
/// ```
pub fn derive_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_initials, ClientValidationError, NewClient};

    #[test]
    fn empty_name_yields_empty_initials() {
        assert_eq!(derive_initials(""), "");
        assert_eq!(derive_initials("   "), "");
    }

    #[test]
    fn uppercase_mapping_may_expand() {
        assert_eq!(derive_initials("ßa éclair"), "SSÉ");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let draft = NewClient::new(" \t", "555-0100");
        assert_eq!(draft.validate(), Err(ClientValidationError::EmptyName));
    }
}
