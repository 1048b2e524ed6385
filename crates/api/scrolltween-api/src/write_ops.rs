//! Style writes produced by the engine to describe mutations of a host's
//! style surface.
//!
//! StyleWrite serializes to JSON as:
//!   { "target": "root", "key": "--ty", "value": "120px" }
//!
//! StyleBatch is a simple Vec<StyleWrite> with helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque element handle (small string key). The host decides what it names.
pub type ElementHandle = String;

/// Where a computed property lands: the document root or a specific element.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleTarget {
    Root,
    Element(ElementHandle),
}

/// One property write against a style target.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StyleWrite {
    pub target: StyleTarget,
    pub key: String,
    pub value: String,
}

impl StyleWrite {
    pub fn new(target: StyleTarget, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target,
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for StyleWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            StyleTarget::Root => write!(f, "root {}: {}", self.key, self.value),
            StyleTarget::Element(handle) => {
                write!(f, "{} {}: {}", handle, self.key, self.value)
            }
        }
    }
}

/// A batch of style writes. The engine emits one batch per tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StyleBatch(pub Vec<StyleWrite>);

impl StyleBatch {
    pub fn new() -> Self {
        StyleBatch(Vec::new())
    }

    pub fn push(&mut self, write: StyleWrite) {
        self.0.push(write);
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = StyleWrite>) {
        self.0.extend(other);
    }

    pub fn into_vec(self) -> Vec<StyleWrite> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleWrite> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge another batch in-place (append).
    pub fn append(&mut self, mut other: StyleBatch) {
        self.0.append(&mut other.0)
    }
}
