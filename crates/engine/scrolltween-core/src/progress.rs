//! Progress math and property interpolation over a resolved timeline.
//!
//! Model:
//! - `precise` percentage is unclamped: negative before the range, >100 past
//!   it. The boundary values count as inside.
//! - `clamped` is `precise` held to [0, 100] and drives interpolation, so
//!   props pin to their endpoints outside the range.
//! - Per prop: `t = timing(clamped / 100)`, `value = from - (from - to) * t`,
//!   rounded to 4 decimals, unit preferring `from`'s then `to`'s.

use scrolltween_api::{format_magnitude, ScrollValue, StyleWrite};

use crate::validate::{PropTrack, ResolvedTimeline};

/// Scroll progress through a [from, to] range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    /// Unclamped percentage; may be negative or exceed 100.
    pub precise: f32,
    /// Percentage clamped to [0, 100].
    pub clamped: f32,
}

impl Progress {
    /// True iff the offset sits within the closed [from, to] range.
    #[inline]
    pub fn is_inside(&self) -> bool {
        (0.0..=100.0).contains(&self.precise)
    }

    /// Exhaustive complement of `is_inside`.
    #[inline]
    pub fn is_outside(&self) -> bool {
        !self.is_inside()
    }
}

/// Percentage scrolled through the range at `offset`. The range is signed;
/// `to < from` runs the animation against the scroll direction. Validation
/// guarantees a non-zero range.
pub fn scroll_progress(from: &ScrollValue, to: &ScrollValue, offset: f32) -> Progress {
    let total = to.value - from.value;
    let current = offset - from.value;
    let precise = current / (total / 100.0);
    Progress {
        precise,
        clamped: precise.clamp(0.0, 100.0),
    }
}

/// Interpolate one property at the given progress, formatted with its unit.
pub fn interpolate_prop(track: &PropTrack, progress: &Progress) -> String {
    let diff = track.from.value - track.to.value;
    let time = track.timing.apply(progress.clamped / 100.0);
    let value = track.from.value - diff * time;
    let unit = if track.from.unit.is_empty() {
        &track.to.unit
    } else {
        &track.from.unit
    };
    format!("{}{}", format_magnitude(value), unit)
}

/// Compute all property writes for a resolved timeline at the given progress,
/// in configuration order.
pub fn compute_writes(resolved: &ResolvedTimeline, progress: &Progress) -> Vec<StyleWrite> {
    resolved
        .props
        .iter()
        .map(|track| {
            StyleWrite::new(
                resolved.target.clone(),
                track.key.clone(),
                interpolate_prop(track, progress),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::Timing;

    fn track(from: &str, to: &str) -> PropTrack {
        PropTrack {
            key: "--x".into(),
            from: ScrollValue::parse(from).unwrap(),
            to: ScrollValue::parse(to).unwrap(),
            timing: Timing::linear(),
        }
    }

    #[test]
    fn progress_hits_boundaries() {
        let from = ScrollValue::px(100.0);
        let to = ScrollValue::px(300.0);
        assert_eq!(scroll_progress(&from, &to, 100.0).precise, 0.0);
        assert_eq!(scroll_progress(&from, &to, 300.0).precise, 100.0);
        assert_eq!(scroll_progress(&from, &to, 200.0).precise, 50.0);
    }

    #[test]
    fn progress_clamps_but_keeps_precise() {
        let from = ScrollValue::px(0.0);
        let to = ScrollValue::px(100.0);
        let p = scroll_progress(&from, &to, 150.0);
        assert_eq!(p.precise, 150.0);
        assert_eq!(p.clamped, 100.0);
        let p = scroll_progress(&from, &to, -50.0);
        assert_eq!(p.precise, -50.0);
        assert_eq!(p.clamped, 0.0);
    }

    #[test]
    fn reversed_range_runs_backward() {
        let from = ScrollValue::px(300.0);
        let to = ScrollValue::px(100.0);
        assert_eq!(scroll_progress(&from, &to, 300.0).precise, 0.0);
        assert_eq!(scroll_progress(&from, &to, 100.0).precise, 100.0);
        assert_eq!(scroll_progress(&from, &to, 250.0).precise, 25.0);
    }

    #[test]
    fn inside_outside_exhaustive() {
        for precise in [-10.0f32, 0.0, 50.0, 100.0, 110.0] {
            let p = Progress {
                precise,
                clamped: precise.clamp(0.0, 100.0),
            };
            assert_ne!(p.is_inside(), p.is_outside());
        }
        assert!(Progress { precise: 0.0, clamped: 0.0 }.is_inside());
        assert!(Progress { precise: 100.0, clamped: 100.0 }.is_inside());
    }

    #[test]
    fn linear_midpoint_is_arithmetic_mean() {
        let t = track("10px", "20px");
        let p = Progress {
            precise: 50.0,
            clamped: 50.0,
        };
        assert_eq!(interpolate_prop(&t, &p), "15px");
    }

    #[test]
    fn unit_prefers_from_then_to() {
        let t = track("0", "1px");
        let p = Progress {
            precise: 100.0,
            clamped: 100.0,
        };
        assert_eq!(interpolate_prop(&t, &p), "1px");

        let t = track("0em", "1px");
        assert_eq!(interpolate_prop(&t, &p), "1em");
    }
}
