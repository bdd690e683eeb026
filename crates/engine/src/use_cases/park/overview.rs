//! Read model of the whole park for display.

use std::sync::Arc;

use dinopark_domain::{Dinosaur, Enclosure, EnclosureId, Security};
use serde::Serialize;

use crate::infrastructure::ports::{EnclosureRepo, RepoError};

/// What a park keeper sees for one enclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnclosureSummary {
    pub id: EnclosureId,
    /// One human-readable line per dinosaur
    pub dinosaurs: Vec<String>,
    pub securities: Vec<String>,
    pub dinosaur_count: usize,
    pub is_security_active: bool,
    /// No active security: the keeper should be able to raise the alarm
    pub needs_alarm: bool,
}

impl From<&Enclosure> for EnclosureSummary {
    fn from(enclosure: &Enclosure) -> Self {
        let is_security_active = enclosure.is_security_active();
        Self {
            id: enclosure.id(),
            dinosaurs: enclosure
                .dinosaurs()
                .iter()
                .map(Dinosaur::specification)
                .collect(),
            securities: enclosure
                .securities()
                .iter()
                .map(|s: &Security| s.name().to_string())
                .collect(),
            dinosaur_count: enclosure.dinosaur_count(),
            is_security_active,
            needs_alarm: !is_security_active,
        }
    }
}

pub struct ParkOverview {
    enclosure_repo: Arc<dyn EnclosureRepo>,
}

impl ParkOverview {
    pub fn new(enclosure_repo: Arc<dyn EnclosureRepo>) -> Self {
        Self { enclosure_repo }
    }

    pub async fn execute(&self) -> Result<Vec<EnclosureSummary>, RepoError> {
        let enclosures = self.enclosure_repo.list_all().await?;
        Ok(enclosures.iter().map(EnclosureSummary::from).collect())
    }
}
