//! Error types for the domain layer
//!
//! Specification parsing is lenient and never fails, so the only failures the
//! domain produces are the admission checks of the enclosure aggregate.

use thiserror::Error;

/// Reasons an enclosure refuses a new dinosaur.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnclosureError {
    /// The incoming dinosaur's diet differs from the residents' diet.
    #[error("Please do not mix the carnivorous and non-carnivorous dinosaurs!")]
    DietMismatch,

    /// No security measure in the enclosure is currently active.
    #[error("Are you crazy!? No active security in this enclosure")]
    SecurityInactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_mismatch_message() {
        assert_eq!(
            EnclosureError::DietMismatch.to_string(),
            "Please do not mix the carnivorous and non-carnivorous dinosaurs!"
        );
    }

    #[test]
    fn test_security_inactive_message() {
        assert!(EnclosureError::SecurityInactive
            .to_string()
            .starts_with("Are you crazy!?"));
    }
}
