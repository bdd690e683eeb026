use serde::{Deserialize, Serialize};

use crate::ids::{EnclosureId, SecurityId};

/// A protective measure (fence, guard tower, ...) belonging to one enclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Security {
    id: SecurityId,
    name: String,
    is_active: bool,
    enclosure_id: EnclosureId,
}

impl Security {
    pub fn new(name: impl Into<String>, is_active: bool, enclosure_id: EnclosureId) -> Self {
        Self {
            id: SecurityId::new(),
            name: name.into(),
            is_active,
            enclosure_id,
        }
    }

    #[inline]
    pub fn id(&self) -> SecurityId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[inline]
    pub fn enclosure_id(&self) -> EnclosureId {
        self.enclosure_id
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
