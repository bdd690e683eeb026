//! Diet classification shared by dinosaurs and enclosures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary diet classification of a dinosaur.
///
/// Dinosaurs store their diet as a plain `is_carnivorous` flag; this enum is
/// the typed view used when reasoning about an enclosure's residents or when
/// composing specification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    #[default]
    Herbivorous,
    Carnivorous,
}

impl Diet {
    /// All diets, in the order used for random selection.
    pub fn all() -> &'static [Diet] {
        &[Diet::Herbivorous, Diet::Carnivorous]
    }

    pub fn from_carnivorous(is_carnivorous: bool) -> Self {
        if is_carnivorous {
            Diet::Carnivorous
        } else {
            Diet::Herbivorous
        }
    }

    pub fn is_carnivorous(&self) -> bool {
        matches!(self, Diet::Carnivorous)
    }

    /// The word used for this diet inside a free-text specification.
    ///
    /// Herbivores are described as "herbivore", which the specification
    /// parser does not recognise as carnivorous and therefore defaults to
    /// herbivorous.
    pub fn specification_word(&self) -> &'static str {
        match self {
            Diet::Herbivorous => "herbivore",
            Diet::Carnivorous => "carnivorous",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diet::Herbivorous => write!(f, "herbivorous"),
            Diet::Carnivorous => write!(f, "carnivorous"),
        }
    }
}
