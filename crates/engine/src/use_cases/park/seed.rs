//! Starter park data.
//!
//! Three enclosures:
//! - carnivores: three Velociraptors behind an electric fence and a guard
//!   tower, both switched off (the enclosure that needs an alarm)
//! - herbivores: one Triceratops behind an active fence
//! - empty: basic security only
//!
//! Stored state skips the security gate, so the unguarded carnivores can be
//! restored. Each enclosure still holds a single diet.

use std::sync::Arc;

use dinopark_domain::{Dinosaur, Enclosure, EnclosureError, EnclosureId, Security};

use crate::infrastructure::ports::EnclosureRepo;
use crate::use_cases::dinosaur::DinosaurFactory;
use crate::use_cases::enclosure::BuildError;

const VELOCIRAPTOR_LENGTHS: [u32; 3] = [3, 1, 5];

/// IDs of the enclosures created by [`SeedPark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededPark {
    pub carnivorous: EnclosureId,
    pub herbivorous: EnclosureId,
    pub empty: EnclosureId,
}

pub struct SeedPark {
    enclosure_repo: Arc<dyn EnclosureRepo>,
    factory: Arc<DinosaurFactory>,
}

impl SeedPark {
    pub fn new(enclosure_repo: Arc<dyn EnclosureRepo>, factory: Arc<DinosaurFactory>) -> Self {
        Self {
            enclosure_repo,
            factory,
        }
    }

    pub async fn execute(&self) -> Result<SeededPark, BuildError> {
        let carnivorous = self.carnivorous_enclosure()?;
        let herbivorous = self.herbivorous_enclosure()?;
        let empty = Enclosure::with_basic_security();

        for enclosure in [&carnivorous, &herbivorous, &empty] {
            self.enclosure_repo.persist(enclosure).await?;
        }
        self.enclosure_repo.flush().await?;

        tracing::info!(
            carnivorous = %carnivorous.id(),
            herbivorous = %herbivorous.id(),
            empty = %empty.id(),
            "Seeded starter park"
        );

        Ok(SeededPark {
            carnivorous: carnivorous.id(),
            herbivorous: herbivorous.id(),
            empty: empty.id(),
        })
    }

    fn carnivorous_enclosure(&self) -> Result<Enclosure, EnclosureError> {
        let id = EnclosureId::new();
        let raptors = VELOCIRAPTOR_LENGTHS
            .iter()
            .map(|&length| placed(self.factory.grow_velociraptor(length), id))
            .collect();

        Ok(Enclosure::restored(id)
            .with_restored_dinosaurs(raptors)?
            .with_security(Security::new("Electric fence", false, id))
            .with_security(Security::new("Guard tower", false, id)))
    }

    fn herbivorous_enclosure(&self) -> Result<Enclosure, EnclosureError> {
        let id = EnclosureId::new();
        let triceratops = placed(self.factory.grow("Triceratops", false, 7), id);

        Ok(Enclosure::restored(id)
            .with_restored_dinosaurs(vec![triceratops])?
            .with_security(Security::new("Fence", true, id)))
    }
}

fn placed(mut dinosaur: Dinosaur, enclosure_id: EnclosureId) -> Dinosaur {
    dinosaur.set_enclosure(enclosure_id);
    dinosaur
}
