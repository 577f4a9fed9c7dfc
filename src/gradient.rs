//! The saturation/lightness canvas.
//!
//! Horizontally the canvas blends from white (x = 0) to the base color
//! (x = width); vertically it blends from that row down to black
//! (y = height). [`color_at`] samples it, [`reconstruct`] goes the other way.

use serde::Serialize;

use crate::color::{map_val, min_max, Color};
use crate::slider;

// ---------------------------------------------------------------------------
// Canvas / PickCoordinate
// ---------------------------------------------------------------------------

/// Size of the gradient canvas. Owned by the caller, passed per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// A canvas with positive, finite dimensions.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Clamp a point onto the canvas.
    pub fn clamp(&self, x: f64, y: f64) -> PickCoordinate {
        PickCoordinate {
            x: min_max(x, 0.0, self.width),
            y: min_max(y, 0.0, self.height),
        }
    }
}

/// Position of the pick cursor on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PickCoordinate {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Forward: (base, pick) -> rgb
// ---------------------------------------------------------------------------

/// Color at `(x, y)` on a canvas painted for `base`. The point is clamped
/// to the canvas first.
pub fn color_at(base: [u8; 3], x: f64, y: f64, canvas: &Canvas) -> [u8; 3] {
    let pick = canvas.clamp(x, y);
    base.map(|channel| {
        let top = map_val(pick.x, 0.0, canvas.width, 255.0, f64::from(channel));
        map_val(pick.y, 0.0, canvas.height, top, 0.0)
            .round()
            .clamp(0.0, 255.0) as u8
    })
}

// ---------------------------------------------------------------------------
// Inverse: rgb -> (base, pick, slider)
// ---------------------------------------------------------------------------

/// Slider and canvas state that displays a given color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub base: [u8; 3],
    pub slider: u16,
    pub pick: PickCoordinate,
}

/// Work out the base color, slider position and pick coordinate that
/// produce `rgb`.
///
/// Grays have no hue and fall back to red at slider 0. Pure black pins the
/// cursor to the bottom-left corner.
pub fn reconstruct(rgb: [u8; 3], canvas: &Canvas) -> Selection {
    let color = Color::rgb(rgb[0], rgb[1], rgb[2]);
    let max_v = f64::from(color.max());
    let min_v = f64::from(color.min());

    let (base, slider) = if color.is_gray() {
        (Color::RED.rgb, 0)
    } else {
        let base = saturate(rgb);
        (base, slider::position_of(base))
    };

    let pick = if max_v == 0.0 {
        PickCoordinate {
            x: 0.0,
            y: canvas.height,
        }
    } else {
        PickCoordinate {
            x: map_val(max_v - min_v, 0.0, max_v, 0.0, canvas.width),
            y: map_val(255.0 - max_v, 0.0, 255.0, 0.0, canvas.height),
        }
    };

    Selection { base, slider, pick }
}

/// Undo the white and black blends of the canvas: push the smallest channel
/// to 0 and the largest to 255. `rgb` must not be a gray.
fn saturate(rgb: [u8; 3]) -> [u8; 3] {
    let mut order = [0usize, 1, 2];
    order.sort_by_key(|&i| rgb[i]);
    let [min_idx, mid_idx, max_idx] = order;

    let max_v = f64::from(rgb[max_idx]);
    let min_v = f64::from(rgb[min_idx]);
    let mid_v = f64::from(rgb[mid_idx]);

    let mut unblended = [0.0f64; 3];
    unblended[max_idx] = max_v;
    unblended[mid_idx] = mid_v - min_v * ((max_v - mid_v) / (max_v - min_v));
    unblended[min_idx] = 0.0;

    let scale = 255.0 / max_v;
    unblended.map(|v| (v * scale).round().clamp(0.0, 255.0) as u8)
}
