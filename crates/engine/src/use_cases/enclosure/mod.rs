//! Enclosure use cases: building populated enclosures and growing dinosaurs into them.

mod build;
mod grow;

pub use build::{EnclosureBuilderService, DEFAULT_DINOSAURS, DEFAULT_SECURITIES};
pub use grow::{GrowDinosaur, GrowError, GrownDinosaur};

use dinopark_domain::EnclosureError;

use crate::infrastructure::ports::RepoError;

/// Why an enclosure build failed. Nothing is persisted in either case.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Enclosure(#[from] EnclosureError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
