//! Repository port traits for enclosure storage.

use async_trait::async_trait;
use dinopark_domain::{Enclosure, EnclosureId};

use super::error::RepoError;

/// Storage for enclosures and, by cascade, their dinosaurs and securities.
///
/// Writes are two-phase: `persist` stages an enclosure, `flush` commits every
/// staged enclosure at once. Reads only see committed state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnclosureRepo: Send + Sync {
    async fn get(&self, id: EnclosureId) -> Result<Option<Enclosure>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Enclosure>, RepoError>;

    /// Stage an enclosure (with its residents and securities) for saving.
    async fn persist(&self, enclosure: &Enclosure) -> Result<(), RepoError>;
    /// Commit everything staged since the last flush.
    async fn flush(&self) -> Result<(), RepoError>;
}
