//! DinoPark domain.
//!
//! Enclosures, the dinosaurs living in them and the security measures
//! guarding them. Everything here is synchronous and free of randomness;
//! growing dinosaurs from free text happens in the engine, which injects a
//! random source.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Enclosure;
pub use entities::{Dinosaur, Security};
pub use error::EnclosureError;
pub use ids::{DinosaurId, EnclosureId, SecurityId};
pub use value_objects::{Diet, SizeClass, HUGE, LARGE};
