//! Scripted host fixtures for scrolltween tests, examples, and benches.
//!
//! `MockHost` is a fully in-memory `Host`: scroll offset, viewport height,
//! element rects, and the clock are plain fields the test scripts directly,
//! and every style write is recorded for assertions.

use std::collections::HashMap;

use scrolltween_api::{ElementRect, Host, StyleTarget, StyleWrite};

/// In-memory host with a scripted environment and a recording style surface.
#[derive(Debug, Default)]
pub struct MockHost {
    scroll: f32,
    viewport: f32,
    now_ms: f64,
    elements: HashMap<String, ElementRect>,
    /// Every style write applied, in application order.
    pub writes: Vec<StyleWrite>,
}

impl MockHost {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport: viewport_height,
            ..Default::default()
        }
    }

    /// Set the scrolled offset directly.
    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll = offset;
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll += delta;
    }

    pub fn set_viewport(&mut self, height: f32) {
        self.viewport = height;
    }

    /// Register (or move) an element's viewport-relative rect.
    pub fn set_element(&mut self, handle: impl Into<String>, top: f32, height: f32) {
        self.elements
            .insert(handle.into(), ElementRect::new(top, height));
    }

    /// Advance the manual clock.
    pub fn advance_ms(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    /// Last write recorded for a property key, if any.
    pub fn last_write_for(&self, key: &str) -> Option<&StyleWrite> {
        self.writes.iter().rev().find(|w| w.key == key)
    }

    /// All recorded values for a property key, in application order.
    pub fn values_for(&self, key: &str) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|w| w.key == key)
            .map(|w| w.value.as_str())
            .collect()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl Host for MockHost {
    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.viewport
    }

    fn element_rect(&self, elem: &str) -> Option<ElementRect> {
        self.elements.get(elem).copied()
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn set_property(&mut self, target: &StyleTarget, key: &str, value: &str) {
        self.writes
            .push(StyleWrite::new(target.clone(), key, value));
    }
}

/// Canned timeline JSON used across test suites: a root-target fade over the
/// first 100px of scroll.
pub fn fade_timeline_json() -> &'static str {
    r#"{
        "from": "0px",
        "to": "100px",
        "props": {
            "--opacity": { "from": "0", "to": "1" }
        }
    }"#
}
