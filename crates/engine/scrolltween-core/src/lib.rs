//! scrolltween core (engine-agnostic)
//!
//! Scroll-position-driven style interpolation: as the host viewport scrolls
//! between a configured `from` and `to` boundary, each configured property is
//! eased and interpolated, then written onto its style target. The crate
//! defines the raw/resolved configuration model, validation, progress math,
//! easing, the instance registry, and the per-frame tick loop. Hosts are
//! abstracted behind `scrolltween_api::Host`; adapters call `Engine::tick`
//! once per display frame and `Engine::notify_resize` on viewport changes.

pub mod config;
pub mod engine;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod progress;
pub mod timeline;
pub mod validate;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use engine::{Engine, Instance};
pub use ids::InstanceId;
pub use interp::{bezier_ease, Easing, Timing, TimingFn};
pub use outputs::{EngineEvent, TickOutputs};
pub use progress::{compute_writes, interpolate_prop, scroll_progress, Progress};
pub use timeline::{
    parse_timeline_json, PropSpec, ProgressHook, TargetSpec, TimelineConfig, TimingSpec,
};
pub use validate::{validate, ConfigError, PropTrack, ResolvedTimeline};
pub use scrolltween_api::{
    ElementHandle, ElementRect, Host, ScrollValue, StyleBatch, StyleTarget, StyleWrite, ValueError,
};
