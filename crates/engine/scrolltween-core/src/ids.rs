//! Identifiers for core entities.

use serde::{Deserialize, Serialize};

/// Stable handle for one timeline instance: its slot index in the engine's
/// registry. Slots are never reused after `destroy`, so an id stays
/// unambiguous for the engine's lifetime.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
