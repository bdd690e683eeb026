//! Grow a dinosaur straight into an existing enclosure.

use std::sync::Arc;

use dinopark_domain::{Dinosaur, EnclosureError, EnclosureId};

use crate::infrastructure::ports::{EnclosureRepo, RepoError};
use crate::use_cases::dinosaur::DinosaurFactory;

#[derive(Debug, thiserror::Error)]
pub enum GrowError {
    #[error("Enclosure not found: {0}")]
    NotFound(EnclosureId),
    #[error(transparent)]
    Enclosure(#[from] EnclosureError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// A dinosaur that made it into its enclosure.
#[derive(Debug, Clone)]
pub struct GrownDinosaur {
    pub dinosaur: Dinosaur,
    /// Confirmation shown to the park keeper
    pub message: String,
}

pub struct GrowDinosaur {
    enclosure_repo: Arc<dyn EnclosureRepo>,
    factory: Arc<DinosaurFactory>,
}

impl GrowDinosaur {
    pub fn new(enclosure_repo: Arc<dyn EnclosureRepo>, factory: Arc<DinosaurFactory>) -> Self {
        Self {
            enclosure_repo,
            factory,
        }
    }

    /// Grow a dinosaur from `specification` and add it to the stored enclosure.
    ///
    /// The enclosure's invariants apply as usual; a refused dinosaur leaves
    /// storage untouched.
    pub async fn execute(
        &self,
        enclosure_id: EnclosureId,
        specification: &str,
    ) -> Result<GrownDinosaur, GrowError> {
        let mut enclosure = self
            .enclosure_repo
            .get(enclosure_id)
            .await?
            .ok_or(GrowError::NotFound(enclosure_id))?;

        let mut dinosaur = self.factory.grow_from_specification(specification);
        dinosaur.set_enclosure(enclosure_id);

        if let Err(e) = enclosure.add_dinosaur(dinosaur.clone()) {
            tracing::warn!(
                enclosure_id = %enclosure_id,
                specification,
                error = %e,
                "Refused to grow dinosaur into enclosure"
            );
            return Err(e.into());
        }

        self.enclosure_repo.persist(&enclosure).await?;
        self.enclosure_repo.flush().await?;

        tracing::info!(
            enclosure_id = %enclosure_id,
            genus = dinosaur.genus(),
            length = dinosaur.length(),
            "Grew dinosaur into enclosure"
        );

        Ok(GrownDinosaur {
            message: format!("Grew a {} in enclosure #{}", specification, enclosure_id),
            dinosaur,
        })
    }
}
