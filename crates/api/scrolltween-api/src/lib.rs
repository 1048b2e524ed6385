//! scrolltween-api: unified value & style-write API (core, engine-agnostic)
//!
//! This crate defines the vocabulary shared by the scrolltween engine and its
//! host adapters: parsed scroll values, anchor expressions, element geometry,
//! style-write contracts, and the `Host` capability trait the engine is driven
//! through. It never touches a real DOM or window.

pub mod anchor;
pub mod geometry;
pub mod host;
pub mod value;
pub mod write_ops;

pub use anchor::{is_relative, Anchor, RelativeExpr};
pub use geometry::ElementRect;
pub use host::Host;
pub use value::{format_magnitude, is_absolute, ScrollValue, ValueError};
pub use write_ops::{ElementHandle, StyleBatch, StyleTarget, StyleWrite};
