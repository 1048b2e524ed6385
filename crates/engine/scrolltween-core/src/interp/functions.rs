//! Easing helpers:
//! - the named preset curves (sine/quad/cubic/quart/quint, in/out/in-out)
//! - cubic-bezier timing (x-curve inverted by binary search)
//!
//! All curves map normalized progress t in [0,1] to a remapped progress.
//! Presets stay within [0,1]; custom curves are not required to.

/// Named easing presets, resolved from kebab-case names at validation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
}

impl Easing {
    /// Look up a preset by its public name, e.g. `"ease-in-out-cubic"`.
    pub fn by_name(name: &str) -> Option<Self> {
        Some(match name {
            "linear" => Easing::Linear,
            "ease-in-sine" => Easing::SineIn,
            "ease-out-sine" => Easing::SineOut,
            "ease-in-out-sine" => Easing::SineInOut,
            "ease-in-quad" => Easing::QuadIn,
            "ease-out-quad" => Easing::QuadOut,
            "ease-in-out-quad" => Easing::QuadInOut,
            "ease-in-cubic" => Easing::CubicIn,
            "ease-out-cubic" => Easing::CubicOut,
            "ease-in-out-cubic" => Easing::CubicInOut,
            "ease-in-quart" => Easing::QuartIn,
            "ease-out-quart" => Easing::QuartOut,
            "ease-in-out-quart" => Easing::QuartInOut,
            "ease-in-quint" => Easing::QuintIn,
            "ease-out-quint" => Easing::QuintOut,
            "ease-in-out-quint" => Easing::QuintInOut,
            _ => return None,
        })
    }

    /// Apply the curve to normalized progress t.
    pub fn apply(self, t: f32) -> f32 {
        use std::f32::consts::PI;
        match self {
            Easing::Linear => t,
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::QuadIn => ease_in_pow(t, 2),
            Easing::QuadOut => ease_out_pow(t, 2),
            Easing::QuadInOut => ease_in_out_pow(t, 2),
            Easing::CubicIn => ease_in_pow(t, 3),
            Easing::CubicOut => ease_out_pow(t, 3),
            Easing::CubicInOut => ease_in_out_pow(t, 3),
            Easing::QuartIn => ease_in_pow(t, 4),
            Easing::QuartOut => ease_out_pow(t, 4),
            Easing::QuartInOut => ease_in_out_pow(t, 4),
            Easing::QuintIn => ease_in_pow(t, 5),
            Easing::QuintOut => ease_out_pow(t, 5),
            Easing::QuintInOut => ease_in_out_pow(t, 5),
        }
    }
}

#[inline]
fn ease_in_pow(t: f32, n: i32) -> f32 {
    t.powi(n)
}

#[inline]
fn ease_out_pow(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

#[inline]
fn ease_in_out_pow(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        2.0f32.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0f32.powi(n)
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased progress by inverting the x bezier via binary search.
pub fn bezier_ease(t: f32, ctrl: [f32; 4]) -> f32 {
    let [x1, y1, x2, y2] = ctrl;
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
