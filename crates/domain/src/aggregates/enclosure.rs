//! Enclosure aggregate - dinosaurs kept together behind security measures
//!
//! # Invariants
//!
//! Checked every time a dinosaur is added:
//! - **Dietary homogeneity**: every resident shares one diet. The first
//!   dinosaur establishes it; an empty enclosure accepts either diet.
//! - **Security-gated admission**: at least one security measure must be
//!   active at the moment of the add. Deactivating security later does not
//!   evict residents, it only blocks further additions.
//!
//! The diet check runs before the security check so the two failures stay
//! distinguishable on an unsecured enclosure.

use crate::entities::{Dinosaur, Security};
use crate::error::EnclosureError;
use crate::ids::{EnclosureId, SecurityId};
use crate::value_objects::Diet;

/// Name of the security measure an enclosure is seeded with.
const BASIC_SECURITY_NAME: &str = "Fence";

/// An enclosure owning its dinosaurs and security measures.
///
/// # Example
///
/// ```
/// use dinopark_domain::{Dinosaur, Enclosure, EnclosureError};
///
/// let mut enclosure = Enclosure::with_basic_security();
/// enclosure.add_dinosaur(Dinosaur::new("Velociraptor", true)).unwrap();
///
/// let err = enclosure
///     .add_dinosaur(Dinosaur::new("Triceratops", false))
///     .unwrap_err();
/// assert_eq!(err, EnclosureError::DietMismatch);
/// assert_eq!(enclosure.dinosaur_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Enclosure {
    id: EnclosureId,
    dinosaurs: Vec<Dinosaur>,
    securities: Vec<Security>,
}

impl Enclosure {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a bare enclosure with no dinosaurs and no security.
    pub fn new() -> Self {
        Self::restored(EnclosureId::new())
    }

    /// Recreate a bare enclosure under a stored ID.
    ///
    /// Securities and residents are attached afterwards with
    /// [`with_security`](Self::with_security) and
    /// [`with_restored_dinosaurs`](Self::with_restored_dinosaurs), so nothing
    /// owned can point at a different ID.
    pub fn restored(id: EnclosureId) -> Self {
        Self {
            id,
            dinosaurs: Vec::new(),
            securities: Vec::new(),
        }
    }

    /// Create an enclosure seeded with one active "Fence", ready to accept dinosaurs.
    pub fn with_basic_security() -> Self {
        let mut enclosure = Self::new();
        let fence = Security::new(BASIC_SECURITY_NAME, true, enclosure.id);
        enclosure.add_security(fence);
        enclosure
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> EnclosureId {
        self.id
    }

    #[inline]
    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    #[inline]
    pub fn securities(&self) -> &[Security] {
        &self.securities
    }

    #[inline]
    pub fn dinosaur_count(&self) -> usize {
        self.dinosaurs.len()
    }

    /// True when any security measure is active.
    pub fn is_security_active(&self) -> bool {
        self.securities.iter().any(Security::is_active)
    }

    /// The diet established by the residents, `None` while empty.
    pub fn diet(&self) -> Option<Diet> {
        self.dinosaurs.first().map(Dinosaur::diet)
    }

    // =========================================================================
    // Builder Methods (loading from storage)
    // =========================================================================

    /// Attach a security measure (used when loading from storage).
    pub fn with_security(mut self, security: Security) -> Self {
        self.securities.push(security);
        self
    }

    /// Replace the residents with previously stored dinosaurs.
    ///
    /// The security gate does not apply to stored state, so residents of an
    /// unguarded enclosure can be restored. Dietary homogeneity still holds.
    ///
    /// # Errors
    ///
    /// [`EnclosureError::DietMismatch`] when the dinosaurs do not share one diet.
    pub fn with_restored_dinosaurs(
        mut self,
        dinosaurs: Vec<Dinosaur>,
    ) -> Result<Self, EnclosureError> {
        if let Some(first) = dinosaurs.first() {
            let diet = first.diet();
            if dinosaurs.iter().any(|d| d.diet() != diet) {
                return Err(EnclosureError::DietMismatch);
            }
        }

        self.dinosaurs = dinosaurs;
        Ok(self)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Admit a dinosaur into the enclosure.
    ///
    /// # Errors
    ///
    /// - [`EnclosureError::DietMismatch`] when residents have a different diet
    /// - [`EnclosureError::SecurityInactive`] when no security is active
    ///
    /// On error the enclosure is left unchanged.
    pub fn add_dinosaur(&mut self, dinosaur: Dinosaur) -> Result<(), EnclosureError> {
        if !self.can_add_dinosaur(&dinosaur) {
            return Err(EnclosureError::DietMismatch);
        }

        if !self.is_security_active() {
            return Err(EnclosureError::SecurityInactive);
        }

        self.dinosaurs.push(dinosaur);
        Ok(())
    }

    /// Add a security measure. Always succeeds.
    pub fn add_security(&mut self, security: Security) {
        self.securities.push(security);
    }

    /// Switch a security measure on or off.
    ///
    /// Returns `false` when no security with that ID belongs to the enclosure.
    pub fn set_security_active(&mut self, security_id: SecurityId, active: bool) -> bool {
        match self.securities.iter_mut().find(|s| s.id() == security_id) {
            Some(security) => {
                if active {
                    security.activate();
                } else {
                    security.deactivate();
                }
                true
            }
            None => false,
        }
    }

    fn can_add_dinosaur(&self, dinosaur: &Dinosaur) -> bool {
        self.diet().map_or(true, |diet| diet == dinosaur.diet())
    }
}

impl Default for Enclosure {
    fn default() -> Self {
        Self::new()
    }
}
