//! Resolved timing representation.
//!
//! Raw configs name their curve (preset string, bezier control points, or a
//! custom callable); validation resolves that once into a single `Timing`
//! value so the per-frame path is a plain dispatch.

pub mod functions;

use std::fmt;
use std::rc::Rc;

pub use functions::{bezier_ease, Easing};

/// A user-supplied timing curve. Shared, not boxed, so resolved configs
/// stay cloneable.
pub type TimingFn = Rc<dyn Fn(f32) -> f32>;

/// Fully-resolved timing for one property track.
#[derive(Clone)]
pub enum Timing {
    /// Named curve from the preset table.
    Preset(Easing),
    /// Cubic-bezier control points (x1, y1, x2, y2).
    Bezier([f32; 4]),
    /// Caller-supplied curve.
    Custom(TimingFn),
}

impl Timing {
    /// Linear identity timing, the default for props without a curve.
    pub fn linear() -> Self {
        Timing::Preset(Easing::Linear)
    }

    /// Remap normalized progress t through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Timing::Preset(e) => e.apply(t),
            Timing::Bezier(ctrl) => bezier_ease(t, *ctrl),
            Timing::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::Preset(e) => f.debug_tuple("Preset").field(e).finish(),
            Timing::Bezier(ctrl) => f.debug_tuple("Bezier").field(ctrl).finish(),
            Timing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
