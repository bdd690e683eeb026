//! Aggregate roots - domain objects that own their related data
//!
//! An aggregate owns its constituent parts (enforced by Rust ownership),
//! exposes behavior through methods rather than public fields, and rejects
//! mutations that would break its invariants with a typed error.

pub mod enclosure;

pub use enclosure::Enclosure;
