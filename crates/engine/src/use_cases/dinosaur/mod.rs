//! Dinosaur growth use cases.
//!
//! Turning free-text specifications into dinosaurs needs randomness, so it
//! lives here rather than in the domain.

mod factory;
mod length;

pub use factory::DinosaurFactory;
pub use length::DinosaurLengthDeterminator;
