//! Engine configuration read from the environment.
//!
//! `.env` files are loaded by `main` through `dotenvy` before this runs.

use crate::use_cases::enclosure::{DEFAULT_DINOSAURS, DEFAULT_SECURITIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Security measures per enclosure built by quantity
    pub securities: usize,
    /// Dinosaurs per enclosure built by quantity
    pub dinosaurs: usize,
    /// Load the starter park before building anything
    pub seed_park: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            securities: DEFAULT_SECURITIES,
            dinosaurs: DEFAULT_DINOSAURS,
            seed_park: true,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing keys use defaults; unparsable values are logged and also use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            securities: parse_or("DINOPARK_SECURITIES", &lookup, defaults.securities),
            dinosaurs: parse_or("DINOPARK_DINOSAURS", &lookup, defaults.dinosaurs),
            seed_park: parse_or("DINOPARK_SEED_PARK", &lookup, defaults.seed_park),
        }
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, ?default, "Invalid configuration value, using default");
            default
        }),
        None => default,
    }
}
