//! Sample data population for the client directory.
//!
//! # Responsibility
//! - Generate synthetic client names and phone numbers.
//! - Persist a fixed-size batch of generated clients.
//!
//! # Invariants
//! - Generation is pluggable; seeded generators are reproducible.
//! - The first failed insert aborts the batch.

pub mod generator;
pub mod seeder;
