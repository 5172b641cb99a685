//! Easing for the panel's grow transition.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value. The toolbar's default grows with a slightly overshooting cubic
//! Bézier, so eased values may leave the 0..1 range mid-transition.

use std::fmt;
use std::time::Duration;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Cubic ease-out.
    EaseOutCubic,
    /// A CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The toolbar's grow curve: quick with a small overshoot.
    pub const POP: Easing = Easing::CubicBezier(0.3, 1.2, 0.2, 1.0);
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseOutCubic => f.write_str("cubic-bezier(0.33,1,0.68,1)"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1},{y1},{x2},{y2})")
            }
        }
    }
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to 0.0..=1.0; the output is not.
///
/// # Example
///
/// ```
/// use inline_toolbar::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
    }
}

/// One coordinate of a Bézier with endpoints 0 and 1.
#[inline]
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve x(s) = t for the curve parameter, then return y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    // Newton-Raphson first; x(s) is monotonic for x1, x2 in 0..=1.
    let mut s = t;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Bisection fallback for flat regions.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_coord(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_coord(y1, y2, s)
}

/// How the panel animates when it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Total transition time.
    pub duration: Duration,
    /// Easing applied to the scale.
    pub easing: Easing,
}

impl TransitionSpec {
    /// A transform transition with the toolbar's grow curve.
    pub fn grow(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::POP,
        }
    }

    /// The scale the panel should have `elapsed` into the transition.
    pub fn scale_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease(self.easing, t)
    }
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}s {}", self.duration.as_secs_f32(), self.easing)
    }
}
