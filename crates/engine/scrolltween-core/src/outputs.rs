//! Output contracts from the tick loop.
//!
//! Outputs carry the style writes applied this tick plus discrete semantic
//! events adapters may surface (diagnostics, devtools). Inside/outside hooks
//! remain the per-update contract; events fire only on state changes.

use serde::{Deserialize, Serialize};

use scrolltween_api::StyleBatch;

use crate::ids::InstanceId;

/// Discrete signals emitted while stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum EngineEvent {
    /// Precise progress entered [0, 100]. The first classification of a fresh
    /// or recalculated instance also fires.
    RangeEntered { instance: InstanceId, precise: f32 },
    /// Precise progress left [0, 100].
    RangeExited { instance: InstanceId, precise: f32 },
    /// A resize-driven recalculation replaced the resolved configuration.
    Recalculated { instance: InstanceId },
}

/// Outputs for one tick, cleared at tick start and borrowed back to the
/// adapter.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TickOutputs {
    #[serde(default)]
    pub writes: StyleBatch,
    #[serde(default)]
    pub events: Vec<EngineEvent>,
}

impl TickOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.writes.0.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.events.is_empty()
    }
}
