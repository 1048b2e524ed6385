//! Raw timeline configuration as supplied by callers.
//!
//! This is the unchecked input shape: boundaries and prop endpoints are raw
//! strings (absolute values or anchor expressions), timing is a name, control
//! points, or a callable. `validate` turns it into a `ResolvedTimeline`.
//! JSON ingestion accepts the same shape via `parse_timeline_json`:
//!
//!   {
//!     "from": "top-middle",
//!     "to": "bottom-top",
//!     "elem": "hero",
//!     "props": {
//!       "--opacity": { "from": 0, "to": 1, "timing": "ease-out-quad" },
//!       "--ty": { "from": "0px", "to": "120px", "timing": [0.42, 0, 0.58, 1] }
//!     }
//!   }
//!
//! Hooks (`inside`/`outside`) are API-only and default to no-ops.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use scrolltween_api::{format_magnitude, ElementHandle, StyleWrite};

use crate::ids::InstanceId;
use crate::interp::TimingFn;
use crate::validate::ConfigError;

/// Progress hook invoked once per update with the instance id, the precise
/// (unclamped) percentage, and the props computed for this update.
pub struct ProgressHook(Box<dyn FnMut(InstanceId, f32, &[StyleWrite])>);

impl ProgressHook {
    pub fn new(f: impl FnMut(InstanceId, f32, &[StyleWrite]) + 'static) -> Self {
        Self(Box::new(f))
    }

    #[inline]
    pub(crate) fn call(&mut self, id: InstanceId, precise: f32, props: &[StyleWrite]) {
        (self.0)(id, precise, props)
    }
}

impl fmt::Debug for ProgressHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressHook(..)")
    }
}

/// Tri-state style-target selector: root, the configured `elem`, or an
/// explicit alternate element.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TargetSpec {
    Direct(bool),
    Other(ElementHandle),
}

impl Default for TargetSpec {
    fn default() -> Self {
        TargetSpec::Direct(false)
    }
}

/// Raw timing: a preset name, cubic-bezier control points, or a callable.
#[derive(Clone)]
pub enum TimingSpec {
    Named(String),
    Bezier([f32; 4]),
    Custom(TimingFn),
}

impl TimingSpec {
    pub fn named(name: impl Into<String>) -> Self {
        TimingSpec::Named(name.into())
    }

    pub fn custom(f: impl Fn(f32) -> f32 + 'static) -> Self {
        TimingSpec::Custom(std::rc::Rc::new(f))
    }
}

impl fmt::Debug for TimingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingSpec::Named(n) => f.debug_tuple("Named").field(n).finish(),
            TimingSpec::Bezier(c) => f.debug_tuple("Bezier").field(c).finish(),
            TimingSpec::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for TimingSpec {
    fn deserialize<D>(deserializer: D) -> Result<TimingSpec, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bezier([f32; 4]),
            Named(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bezier(ctrl) => TimingSpec::Bezier(ctrl),
            Raw::Named(name) => TimingSpec::Named(name),
        })
    }
}

/// One animated property: raw endpoints plus optional timing.
#[derive(Clone, Debug, Deserialize)]
pub struct PropSpec {
    #[serde(deserialize_with = "de_value")]
    pub from: String,
    #[serde(deserialize_with = "de_value")]
    pub to: String,
    #[serde(default)]
    pub timing: Option<TimingSpec>,
}

impl PropSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timing: None,
        }
    }

    pub fn with_timing(mut self, timing: TimingSpec) -> Self {
        self.timing = Some(timing);
        self
    }
}

/// Raw, unchecked timeline configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TimelineConfig {
    #[serde(deserialize_with = "de_opt_value")]
    pub from: Option<String>,
    #[serde(deserialize_with = "de_opt_value")]
    pub to: Option<String>,
    pub elem: Option<ElementHandle>,
    pub direct: TargetSpec,
    pub track: Option<bool>,
    pub props: IndexMap<String, PropSpec>,
    #[serde(skip)]
    pub inside: Option<ProgressHook>,
    #[serde(skip)]
    pub outside: Option<ProgressHook>,
}

impl TimelineConfig {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            ..Default::default()
        }
    }

    pub fn elem(mut self, handle: impl Into<ElementHandle>) -> Self {
        self.elem = Some(handle.into());
        self
    }

    pub fn direct(mut self, spec: TargetSpec) -> Self {
        self.direct = spec;
        self
    }

    pub fn tracked(mut self, track: bool) -> Self {
        self.track = Some(track);
        self
    }

    pub fn prop(mut self, key: impl Into<String>, spec: PropSpec) -> Self {
        self.props.insert(key.into(), spec);
        self
    }

    pub fn on_inside(mut self, f: impl FnMut(InstanceId, f32, &[StyleWrite]) + 'static) -> Self {
        self.inside = Some(ProgressHook::new(f));
        self
    }

    pub fn on_outside(mut self, f: impl FnMut(InstanceId, f32, &[StyleWrite]) + 'static) -> Self {
        self.outside = Some(ProgressHook::new(f));
        self
    }
}

/// Parse a raw timeline configuration from JSON. Validation (and therefore
/// geometry resolution) happens later, at `Engine::create`.
pub fn parse_timeline_json(s: &str) -> Result<TimelineConfig, ConfigError> {
    serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Raw values may be written as JSON numbers or strings; both normalize to
/// the string form the parser consumes.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Num(f32),
    Text(String),
}

impl From<RawScalar> for String {
    fn from(raw: RawScalar) -> String {
        match raw {
            RawScalar::Num(n) => format_magnitude(n),
            RawScalar::Text(s) => s,
        }
    }
}

fn de_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawScalar::deserialize(deserializer).map(Into::into)
}

fn de_opt_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawScalar>::deserialize(deserializer).map(|o| o.map(Into::into))
}
