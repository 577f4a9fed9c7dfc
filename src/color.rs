use serde::Serialize;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB color with an alpha channel.
///
/// - `rgb`: red, green and blue channels, each 0..=255
/// - `a`: opacity, 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub rgb: [u8; 3],
    pub a: f64,
}

impl Color {
    /// Opaque color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b], a: 1.0 }
    }

    /// Color with an alpha value; alpha is clamped to 0.0..=1.0.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            rgb: [r, g, b],
            a: clamp_alpha(a),
        }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);

    pub fn max(&self) -> u8 {
        self.rgb.iter().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> u8 {
        self.rgb.iter().copied().min().unwrap_or(0)
    }

    /// `true` for white, black and every gray in between.
    pub fn is_gray(&self) -> bool {
        let [r, g, b] = self.rgb;
        r == g && g == b
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Hue in degrees (0.0..360.0) using the hexagonal chroma formula shared
    /// by HSL, HSV and HSI. Grays have hue 0.
    pub fn hue(&self) -> f64 {
        let [r, g, b] = self.rgb.map(f64::from);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        if chroma == 0.0 {
            return 0.0;
        }

        let sector = if max == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        let hue = sector * 60.0;
        if hue < 0.0 {
            hue + 360.0
        } else {
            hue
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

/// Re-map `val` from the range `from_low..from_high` onto `to_low..to_high`.
/// The ranges may be inverted; nothing is clamped.
pub fn map_val(val: f64, from_low: f64, from_high: f64, to_low: f64, to_high: f64) -> f64 {
    (val - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
}

/// Limit `val` to `min..=max`.
pub fn min_max(val: f64, min: f64, max: f64) -> f64 {
    val.min(max).max(min)
}

/// Round a unit-range float to a channel value.
pub fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

/// Round alpha to three decimals, the precision alpha is displayed with.
pub fn round_alpha(a: f64) -> f64 {
    (a * 1000.0).round() / 1000.0
}

/// Format alpha with at most three decimals and no trailing zeros
/// (`0.5`, `0.502`, `0`).
pub fn format_alpha(a: f64) -> String {
    let text = format!("{:.3}", round_alpha(a));
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
