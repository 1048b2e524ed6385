//! Core configuration for scrolltween-core.

use serde::{Deserialize, Serialize};

/// Engine-level knobs. Keep this minimal; expand as needed without
/// breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Quiescence window for resize-driven recalculation, in milliseconds.
    pub resize_debounce_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 50.0,
        }
    }
}
