//! Element geometry as reported by the host.

use serde::{Deserialize, Serialize};

/// Viewport-relative bounding box of an element: top edge and height.
/// The document-relative top is `top + scroll_offset`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementRect {
    pub top: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}
