//! In-memory enclosure storage.
//!
//! Keeps staged and committed enclosures behind `RwLock`s. `persist` replaces
//! an already staged enclosure with the same ID; `flush` upserts everything
//! staged into the committed set, keeping first-commit order for listings.

use async_trait::async_trait;
use dinopark_domain::{Enclosure, EnclosureId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{EnclosureRepo, RepoError};

pub struct InMemoryEnclosureRepo {
    staged: RwLock<Vec<Enclosure>>,
    committed: RwLock<Vec<Enclosure>>,
}

impl InMemoryEnclosureRepo {
    pub fn new() -> Self {
        Self {
            staged: RwLock::new(Vec::new()),
            committed: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEnclosureRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn upsert(enclosures: &mut Vec<Enclosure>, enclosure: Enclosure) {
    match enclosures.iter_mut().find(|e| e.id() == enclosure.id()) {
        Some(existing) => *existing = enclosure,
        None => enclosures.push(enclosure),
    }
}

#[async_trait]
impl EnclosureRepo for InMemoryEnclosureRepo {
    async fn get(&self, id: EnclosureId) -> Result<Option<Enclosure>, RepoError> {
        let committed = self.committed.read().await;
        Ok(committed.iter().find(|e| e.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Enclosure>, RepoError> {
        Ok(self.committed.read().await.clone())
    }

    async fn persist(&self, enclosure: &Enclosure) -> Result<(), RepoError> {
        upsert(&mut *self.staged.write().await, enclosure.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<(), RepoError> {
        let staged: Vec<Enclosure> = self.staged.write().await.drain(..).collect();
        if staged.is_empty() {
            return Ok(());
        }

        let mut committed = self.committed.write().await;
        let count = staged.len();
        for enclosure in staged {
            upsert(&mut committed, enclosure);
        }
        tracing::debug!(count, total = committed.len(), "Flushed enclosures");
        Ok(())
    }
}
