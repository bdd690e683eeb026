use serde::{Deserialize, Serialize};

use crate::ids::{DinosaurId, EnclosureId};
use crate::value_objects::{Diet, HUGE, LARGE};

/// Genus given to dinosaurs built without one.
const UNKNOWN_GENUS: &str = "Unknown";

/// A single animal living in (at most) one enclosure.
///
/// Genus and diet are fixed at construction. Length and the enclosure
/// back-reference may be set afterwards by whoever grows or places the
/// dinosaur; the enclosure does not maintain the back-reference itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dinosaur {
    id: DinosaurId,
    genus: String,
    is_carnivorous: bool,
    /// Length in meters
    length: u32,
    /// Non-owning back-reference to the enclosure holding this dinosaur
    enclosure_id: Option<EnclosureId>,
}

impl Dinosaur {
    pub const LARGE: u32 = LARGE;
    pub const HUGE: u32 = HUGE;

    pub fn new(genus: impl Into<String>, is_carnivorous: bool) -> Self {
        Self {
            id: DinosaurId::new(),
            genus: genus.into(),
            is_carnivorous,
            length: 0,
            enclosure_id: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> DinosaurId {
        self.id
    }

    #[inline]
    pub fn genus(&self) -> &str {
        &self.genus
    }

    #[inline]
    pub fn is_carnivorous(&self) -> bool {
        self.is_carnivorous
    }

    #[inline]
    pub fn diet(&self) -> Diet {
        Diet::from_carnivorous(self.is_carnivorous)
    }

    /// Length in meters.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn enclosure_id(&self) -> Option<EnclosureId> {
        self.enclosure_id
    }

    /// Human-readable description, e.g.
    /// `"The Velociraptor carnivorous dinosaur is 5 meters long"`.
    pub fn specification(&self) -> String {
        format!(
            "The {} {}carnivorous dinosaur is {} meters long",
            self.genus,
            if self.is_carnivorous { "" } else { "non-" },
            self.length
        )
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn set_length(&mut self, length: u32) {
        self.length = length;
    }

    pub fn set_enclosure(&mut self, enclosure_id: EnclosureId) {
        self.enclosure_id = Some(enclosure_id);
    }
}

impl Default for Dinosaur {
    fn default() -> Self {
        Self::new(UNKNOWN_GENUS, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unknown_herbivore_of_zero_length() {
        let dinosaur = Dinosaur::default();
        assert_eq!(dinosaur.genus(), "Unknown");
        assert!(!dinosaur.is_carnivorous());
        assert_eq!(dinosaur.length(), 0);
        assert_eq!(dinosaur.enclosure_id(), None);
    }

    #[test]
    fn length_can_be_set_after_construction() {
        let mut dinosaur = Dinosaur::new("Tyrannosaurus", true);
        dinosaur.set_length(9);
        assert_eq!(dinosaur.length(), 9);
    }

    #[test]
    fn specification_for_carnivore() {
        let dinosaur = Dinosaur::new("Tyrannosaurus", true).with_length(12);
        assert_eq!(
            dinosaur.specification(),
            "The Tyrannosaurus carnivorous dinosaur is 12 meters long"
        );
    }

    #[test]
    fn specification_for_herbivore() {
        let dinosaur = Dinosaur::new("Triceratops", false).with_length(7);
        assert_eq!(
            dinosaur.specification(),
            "The Triceratops non-carnivorous dinosaur is 7 meters long"
        );
    }

    #[test]
    fn enclosure_back_reference_is_optional() {
        let enclosure_id = EnclosureId::new();
        let mut dinosaur = Dinosaur::default();
        dinosaur.set_enclosure(enclosure_id);
        assert_eq!(dinosaur.enclosure_id(), Some(enclosure_id));
        assert_eq!(dinosaur.diet(), Diet::Herbivorous);
    }
}
