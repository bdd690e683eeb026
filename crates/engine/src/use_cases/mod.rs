//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod dinosaur;
pub mod enclosure;
pub mod park;

pub use dinosaur::{DinosaurFactory, DinosaurLengthDeterminator};
pub use enclosure::{BuildError, EnclosureBuilderService, GrowDinosaur, GrowError};
pub use park::{ParkOverview, SeedPark};
