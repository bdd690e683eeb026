//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod memory_store;
pub mod ports;
pub mod random;
