//! # Easing
//!
//! Maps linear progress `t ∈ [0, 1]` to eased progress.
//!
//! The named curves are the standard material cubic-béziers. A custom
//! cubic-bézier is solved for `x(s) = t` by Newton iteration with a
//! bisection fallback, then evaluated as `y(s)`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Convergence tolerance for the bézier solver.
const EPSILON: f32 = 1e-6;

/// An easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.4, 0, 0.2, 1)
    #[default]
    FastOutSlowIn,
    /// cubic-bezier(0, 0, 0.2, 1)
    LinearOutSlowIn,
    /// cubic-bezier(0.4, 0, 1, 1)
    FastOutLinearIn,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)`; `None` for linear.
    pub fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::FastOutSlowIn => Some((0.4, 0.0, 0.2, 1.0)),
            Easing::LinearOutSlowIn => Some((0.0, 0.0, 0.2, 1.0)),
            Easing::FastOutLinearIn => Some((0.4, 0.0, 1.0, 1.0)),
            Easing::CubicBezier { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
        }
    }

    /// Applies the curve. Input is clamped to `[0, 1]`; the endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_parameter(x1, x2, t);
                bezier(y1, y2, s)
            }
        }
    }
}

/// One coordinate of a cubic bézier anchored at 0 and 1.
#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds `s` with `x(s) = x`.
fn solve_parameter(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
    }

    // x(s) is monotone for control x in [0, 1]
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

// =============================================================================
// Unit Tests
// =============================================================================
