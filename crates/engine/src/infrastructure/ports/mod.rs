//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Enclosure persistence (in-memory today, a database adapter tomorrow)
//! - Randomness (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::EnclosureRepo;
pub use testing::RandomPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockEnclosureRepo;

#[cfg(test)]
pub use testing::MockRandomPort;
