//! Validation: raw `TimelineConfig` → `ResolvedTimeline`.
//!
//! Runs at creation and on every forced recalculation (resize). Rules are
//! applied in a fixed order and each violation maps to a distinct error;
//! nothing is silently corrected. Relative boundaries are resolved against
//! the host's scroll state and element geometry at validation time, so the
//! resolved config is a pure snapshot the per-frame path can consume without
//! further reads.

use thiserror::Error;

use scrolltween_api::{
    is_absolute, is_relative, ElementHandle, Host, RelativeExpr, ScrollValue, StyleTarget,
    ValueError,
};

use crate::interp::{Easing, Timing};
use crate::timeline::{TargetSpec, TimelineConfig, TimingSpec};

/// Fatal configuration errors. An instance is never scheduled while its
/// configuration fails to resolve.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("timeline json parse error: {0}")]
    Parse(String),
    #[error("missing property `from`")]
    MissingFrom,
    #[error("missing property `to`")]
    MissingTo,
    #[error("property `from` must be an absolute value when no `elem` has been provided")]
    FromNotAbsolute,
    #[error("property `to` must be an absolute value when no `elem` has been provided")]
    ToNotAbsolute,
    #[error("`direct: true` requires an `elem`")]
    DirectWithoutElem,
    #[error("unknown element `{0}`")]
    UnknownElement(ElementHandle),
    #[error("unknown timing `{0}`")]
    UnknownTiming(String),
    #[error("`from` and `to` resolve to the same offset; the scroll range would be empty")]
    EmptyRange,
    #[error("prop `{key}`: {source}")]
    Prop { key: String, source: ValueError },
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// One animated property with parsed endpoints and resolved timing.
#[derive(Clone, Debug)]
pub struct PropTrack {
    pub key: String,
    pub from: ScrollValue,
    pub to: ScrollValue,
    pub timing: Timing,
}

/// Fully-resolved configuration, owned by exactly one instance. Rebuilt from
/// the stored raw config by every `calculate`; never aliases caller data.
#[derive(Clone, Debug)]
pub struct ResolvedTimeline {
    pub from: ScrollValue,
    pub to: ScrollValue,
    pub elem: Option<ElementHandle>,
    pub target: StyleTarget,
    pub track: bool,
    pub props: Vec<PropTrack>,
}

/// Resolve one raw boundary string against the current scroll state.
fn resolve_boundary(
    raw: &str,
    elem: Option<&ElementHandle>,
    host: &dyn Host,
    missing_abs: ConfigError,
) -> Result<ScrollValue, ConfigError> {
    match elem {
        None => {
            if !is_absolute(raw) {
                return Err(missing_abs);
            }
            Ok(ScrollValue::parse(raw)?)
        }
        Some(handle) => {
            if is_relative(raw) {
                let expr = RelativeExpr::parse(raw)?;
                let rect = host
                    .element_rect(handle)
                    .ok_or_else(|| ConfigError::UnknownElement(handle.clone()))?;
                Ok(expr.resolve(&rect, host.scroll_offset(), host.viewport_height()))
            } else {
                Ok(ScrollValue::parse(raw)?)
            }
        }
    }
}

fn resolve_timing(spec: Option<&TimingSpec>) -> Result<Timing, ConfigError> {
    match spec {
        None => Ok(Timing::linear()),
        Some(TimingSpec::Named(name)) => Easing::by_name(name)
            .map(Timing::Preset)
            .ok_or_else(|| ConfigError::UnknownTiming(name.clone())),
        Some(TimingSpec::Bezier(ctrl)) => Ok(Timing::Bezier(*ctrl)),
        Some(TimingSpec::Custom(f)) => Ok(Timing::Custom(f.clone())),
    }
}

/// Validate a raw configuration, reading scroll state and element geometry
/// from the host as needed.
pub fn validate(cfg: &TimelineConfig, host: &dyn Host) -> Result<ResolvedTimeline, ConfigError> {
    let raw_from = cfg.from.as_deref().ok_or(ConfigError::MissingFrom)?;
    let raw_to = cfg.to.as_deref().ok_or(ConfigError::MissingTo)?;

    let target = match &cfg.direct {
        TargetSpec::Direct(false) => StyleTarget::Root,
        TargetSpec::Direct(true) => match &cfg.elem {
            Some(handle) => StyleTarget::Element(handle.clone()),
            None => return Err(ConfigError::DirectWithoutElem),
        },
        TargetSpec::Other(handle) => StyleTarget::Element(handle.clone()),
    };

    let from = resolve_boundary(raw_from, cfg.elem.as_ref(), host, ConfigError::FromNotAbsolute)?;
    let to = resolve_boundary(raw_to, cfg.elem.as_ref(), host, ConfigError::ToNotAbsolute)?;

    // A zero-length range would divide by zero in the progress math.
    if from.value == to.value {
        return Err(ConfigError::EmptyRange);
    }

    let mut props = Vec::with_capacity(cfg.props.len());
    for (key, spec) in &cfg.props {
        // Prop endpoints never resolve against geometry, elem or not.
        let parse_prop = |raw: &str| {
            ScrollValue::parse(raw).map_err(|source| ConfigError::Prop {
                key: key.clone(),
                source,
            })
        };
        props.push(PropTrack {
            key: key.clone(),
            from: parse_prop(&spec.from)?,
            to: parse_prop(&spec.to)?,
            timing: resolve_timing(spec.timing.as_ref())?,
        });
    }

    Ok(ResolvedTimeline {
        from,
        to,
        elem: cfg.elem.clone(),
        target,
        track: cfg.track.unwrap_or(true),
        props,
    })
}
