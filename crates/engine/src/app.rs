//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    memory_store::InMemoryEnclosureRepo,
    ports::{EnclosureRepo, RandomPort},
    random::SystemRandom,
};
use crate::use_cases::{
    DinosaurFactory, EnclosureBuilderService, GrowDinosaur, ParkOverview, SeedPark,
};

/// Main application state.
///
/// Holds the injected ports and every use case wired against them.
pub struct App {
    pub enclosures: Arc<dyn EnclosureRepo>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub builder: EnclosureBuilderService,
    pub grow: GrowDinosaur,
    pub seed: SeedPark,
    pub overview: ParkOverview,
}

impl App {
    pub fn new(enclosures: Arc<dyn EnclosureRepo>, random: Arc<dyn RandomPort>) -> Self {
        let factory = Arc::new(DinosaurFactory::new(random.clone()));

        let use_cases = UseCases {
            builder: EnclosureBuilderService::new(enclosures.clone(), factory.clone(), random),
            grow: GrowDinosaur::new(enclosures.clone(), factory.clone()),
            seed: SeedPark::new(enclosures.clone(), factory),
            overview: ParkOverview::new(enclosures.clone()),
        };

        Self {
            enclosures,
            use_cases,
        }
    }

    /// In-memory storage and real randomness.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryEnclosureRepo::new()),
            Arc::new(SystemRandom::new()),
        )
    }
}
