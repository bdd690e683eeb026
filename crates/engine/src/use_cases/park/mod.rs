//! Park-wide use cases: loading the starter park and listing enclosures.

mod overview;
mod seed;

pub use overview::{EnclosureSummary, ParkOverview};
pub use seed::{SeedPark, SeededPark};
