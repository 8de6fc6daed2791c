//! Client directory domain model.
//!
//! # Responsibility
//! - Define the canonical client record and its insert payload.
//! - Own the name-to-initials derivation rule.
//!
//! # Invariants
//! - Every persisted client is identified by a store-assigned `ClientId`.
//! - `initials` is computed from `name` once, at creation time.

pub mod client;
