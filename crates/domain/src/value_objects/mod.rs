//! Value objects - Immutable objects defined by their attributes

mod diet;
mod size_class;

pub use diet::Diet;
pub use size_class::{SizeClass, HUGE, LARGE};
