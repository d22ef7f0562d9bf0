//! Zoom/pan transform and the pure gesture function.
//!
//! Coordinates are normalized per axis: the full data range maps to
//! `[0, 1]`, and so does the viewport. A data coordinate `d` lands on screen
//! at `d * scale + pan`. With `scale ≥ 1` and `pan ∈ [1 - scale, 0]` the
//! viewport always shows a window inside the data range.

use serde::{Deserialize, Serialize};

/// Zoom and pan of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        scale_x: 1.0,
        scale_y: 1.0,
        pan_x: 0.0,
        pan_y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Visible data window on the x axis as `(start, end)` in `[0, 1]`.
    pub fn window_x(&self) -> (f64, f64) {
        window(self.scale_x, self.pan_x)
    }

    /// Visible data window on the y axis as `(start, end)` in `[0, 1]`.
    pub fn window_y(&self) -> (f64, f64) {
        window(self.scale_y, self.pan_y)
    }

    /// Screen position of a normalized data x coordinate.
    pub fn to_screen_x(&self, data_x: f64) -> f64 {
        data_x * self.scale_x + self.pan_x
    }

    /// Normalized data x coordinate under a screen position.
    pub fn to_data_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.pan_x) / self.scale_x
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn window(scale: f64, pan: f64) -> (f64, f64) {
    let start = -pan / scale;
    (start, start + 1.0 / scale)
}

/// Pointer position in normalized viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Input gesture, already normalized to the viewport by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// Mouse wheel. Positive `delta_y` zooms out. Zooms the time axis only.
    Wheel { delta_y: f64, anchor: Anchor },
    /// Pinch with the ratio of the current to the previous finger distance.
    Pinch { ratio: f64, anchor: Anchor },
    /// Pan by a fraction of the viewport.
    Drag { dx: f64, dy: f64 },
    /// Pointer released.
    End,
}

impl Gesture {
    pub fn is_end(&self) -> bool {
        matches!(self, Gesture::End)
    }
}

/// Bounds applied to every transform update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLimits {
    /// Largest zoom factor on either axis. Values below 1 act as 1.
    pub max_scale: f64,
    /// Wheel delta to zoom exponent.
    pub wheel_sensitivity: f64,
    /// Whether pinch and drag also act on the price axis.
    pub zoom_y: bool,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            max_scale: 20.0,
            wheel_sensitivity: 0.002,
            zoom_y: true,
        }
    }
}

impl ChartLimits {
    fn scale_ceiling(&self) -> f64 {
        if self.max_scale.is_finite() && self.max_scale > 1.0 {
            self.max_scale
        } else {
            1.0
        }
    }
}

/// Keeps `exp()` of a wheel step finite and non-zero; far past any scale limit.
const MAX_WHEEL_EXPONENT: f64 = 64.0;

/// Next transform after `gesture`. Pure; never panics, and the result always
/// satisfies the scale and pan bounds whatever the input.
pub fn apply_gesture(
    transform: ZoomTransform,
    gesture: &Gesture,
    limits: &ChartLimits,
) -> ZoomTransform {
    let current = clamp(transform, limits);
    match *gesture {
        Gesture::Wheel { delta_y, anchor } => {
            let exponent = -finite_or(delta_y, 0.0) * limits.wheel_sensitivity;
            let factor = exponent.clamp(-MAX_WHEEL_EXPONENT, MAX_WHEEL_EXPONENT).exp();
            zoom(current, factor, None, anchor, limits)
        }
        Gesture::Pinch { ratio, anchor } => {
            if !ratio.is_finite() || ratio <= 0.0 {
                return current;
            }
            let factor_y = limits.zoom_y.then_some(ratio);
            zoom(current, ratio, factor_y, anchor, limits)
        }
        Gesture::Drag { dx, dy } => {
            let mut next = current;
            next.pan_x += finite_or(dx, 0.0);
            if limits.zoom_y {
                next.pan_y += finite_or(dy, 0.0);
            }
            clamp(next, limits)
        }
        Gesture::End => current,
    }
}

/// Scale around `anchor`: the data point under the anchor stays put unless
/// the pan bounds push it.
fn zoom(
    t: ZoomTransform,
    factor_x: f64,
    factor_y: Option<f64>,
    anchor: Anchor,
    limits: &ChartLimits,
) -> ZoomTransform {
    let ceiling = limits.scale_ceiling();
    let (scale_x, pan_x) = zoom_axis(t.scale_x, t.pan_x, factor_x, anchor.x, ceiling);
    let (scale_y, pan_y) = match factor_y {
        Some(f) => zoom_axis(t.scale_y, t.pan_y, f, anchor.y, ceiling),
        None => (t.scale_y, t.pan_y),
    };
    clamp(
        ZoomTransform {
            scale_x,
            scale_y,
            pan_x,
            pan_y,
        },
        limits,
    )
}

fn zoom_axis(scale: f64, pan: f64, factor: f64, anchor: f64, ceiling: f64) -> (f64, f64) {
    if !factor.is_finite() || factor <= 0.0 {
        return (scale, pan);
    }
    let anchor = finite_or(anchor, 0.5).clamp(0.0, 1.0);
    let data_at_anchor = (anchor - pan) / scale;
    let new_scale = (scale * factor).clamp(1.0, ceiling);
    (new_scale, anchor - data_at_anchor * new_scale)
}

/// Force `t` back inside the bounds. Non-finite fields fall back to identity.
pub fn clamp(t: ZoomTransform, limits: &ChartLimits) -> ZoomTransform {
    let ceiling = limits.scale_ceiling();
    let scale_x = finite_or(t.scale_x, 1.0).clamp(1.0, ceiling);
    let scale_y = finite_or(t.scale_y, 1.0).clamp(1.0, ceiling);
    ZoomTransform {
        scale_x,
        scale_y,
        pan_x: finite_or(t.pan_x, 0.0).clamp(1.0 - scale_x, 0.0),
        pan_y: finite_or(t.pan_y, 0.0).clamp(1.0 - scale_y, 0.0),
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pinch(ratio: f64, x: f64, y: f64) -> Gesture {
        Gesture::Pinch {
            ratio,
            anchor: Anchor::new(x, y),
        }
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let limits = ChartLimits::default();
        let anchor_x = 0.25;
        let before = ZoomTransform::IDENTITY.to_data_x(anchor_x);
        let t = apply_gesture(ZoomTransform::IDENTITY, &pinch(2.0, anchor_x, 0.5), &limits);
        assert!((t.scale_x - 2.0).abs() < EPS);
        assert!((t.to_data_x(anchor_x) - before).abs() < EPS);
    }

    #[test]
    fn test_cannot_zoom_out_past_identity() {
        let limits = ChartLimits::default();
        let t = apply_gesture(ZoomTransform::IDENTITY, &pinch(0.1, 0.5, 0.5), &limits);
        assert_eq!(t, ZoomTransform::IDENTITY);
    }

    #[test]
    fn test_scale_capped_at_max() {
        let limits = ChartLimits::default();
        let mut t = ZoomTransform::IDENTITY;
        for _ in 0..20 {
            t = apply_gesture(t, &pinch(3.0, 0.9, 0.1), &limits);
        }
        assert_eq!(t.scale_x, limits.max_scale);
        assert_eq!(t.scale_y, limits.max_scale);
        let (start, end) = t.window_x();
        assert!(start >= -EPS && end <= 1.0 + EPS);
    }

    #[test]
    fn test_wheel_zooms_time_axis_only() {
        let limits = ChartLimits::default();
        let wheel = Gesture::Wheel {
            delta_y: -500.0,
            anchor: Anchor::CENTER,
        };
        let t = apply_gesture(ZoomTransform::IDENTITY, &wheel, &limits);
        assert!(t.scale_x > 1.0);
        assert_eq!(t.scale_y, 1.0);
    }

    #[test]
    fn test_huge_wheel_delta_zooms_to_the_limits() {
        let limits = ChartLimits::default();
        let zoomed = apply_gesture(ZoomTransform::IDENTITY, &pinch(4.0, 0.5, 0.5), &limits);

        let out = Gesture::Wheel {
            delta_y: 1.0e9,
            anchor: Anchor::CENTER,
        };
        let t = apply_gesture(zoomed, &out, &limits);
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.pan_x, 0.0);

        let back_in = Gesture::Wheel {
            delta_y: -1.0e9,
            anchor: Anchor::CENTER,
        };
        assert_eq!(apply_gesture(t, &back_in, &limits).scale_x, limits.max_scale);
    }

    #[test]
    fn test_drag_is_clamped_to_data_range() {
        let limits = ChartLimits::default();
        let zoomed = apply_gesture(ZoomTransform::IDENTITY, &pinch(4.0, 0.5, 0.5), &limits);

        let left = apply_gesture(zoomed, &Gesture::Drag { dx: 10.0, dy: 0.0 }, &limits);
        assert_eq!(left.pan_x, 0.0);

        let right = apply_gesture(zoomed, &Gesture::Drag { dx: -10.0, dy: 0.0 }, &limits);
        assert!((right.pan_x - (1.0 - right.scale_x)).abs() < EPS);
        assert!((right.window_x().1 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_drag_at_identity_does_nothing() {
        let t = apply_gesture(
            ZoomTransform::IDENTITY,
            &Gesture::Drag { dx: 0.3, dy: -0.2 },
            &ChartLimits::default(),
        );
        assert_eq!(t, ZoomTransform::IDENTITY);
    }

    #[test]
    fn test_garbage_input_is_ignored() {
        let limits = ChartLimits::default();
        let t = apply_gesture(ZoomTransform::IDENTITY, &pinch(f64::NAN, 0.5, 0.5), &limits);
        assert_eq!(t, ZoomTransform::IDENTITY);
        let t = apply_gesture(ZoomTransform::IDENTITY, &pinch(-2.0, 0.5, 0.5), &limits);
        assert_eq!(t, ZoomTransform::IDENTITY);
        let t = apply_gesture(
            ZoomTransform::IDENTITY,
            &Gesture::Wheel {
                delta_y: f64::INFINITY,
                anchor: Anchor::CENTER,
            },
            &limits,
        );
        assert_eq!(t, ZoomTransform::IDENTITY);
    }

    #[test]
    fn test_max_scale_below_one_pins_identity() {
        let limits = ChartLimits {
            max_scale: 0.5,
            ..ChartLimits::default()
        };
        let t = apply_gesture(ZoomTransform::IDENTITY, &pinch(5.0, 0.5, 0.5), &limits);
        assert_eq!(t, ZoomTransform::IDENTITY);
    }

    #[test]
    fn test_clamp_repairs_out_of_range_transform() {
        let broken = ZoomTransform {
            scale_x: 0.2,
            scale_y: f64::NAN,
            pan_x: 3.0,
            pan_y: -1.0,
        };
        assert_eq!(clamp(broken, &ChartLimits::default()), ZoomTransform::IDENTITY);
    }
}
