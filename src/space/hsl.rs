use crate::color::{to_channel, Color};
use crate::error::ColorError;
use crate::space::{
    alpha_component, components, display_hue, display_percent, functional, hue_component,
    unit_component, ColorFormat,
};

// ---------------------------------------------------------------------------
// Hsl
// ---------------------------------------------------------------------------

/// A color in the HSL (Hue, Saturation, Lightness) color space.
///
/// - `h`: hue in degrees, 0.0..360.0
/// - `s`: saturation, 0.0..=1.0
/// - `l`: lightness, 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new `Hsl`. Hue wraps, saturation and lightness are clamped.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    pub fn from_color(color: &Color) -> Self {
        let max = f64::from(color.max());
        let min = f64::from(color.min());
        let chroma = max - min;

        let l = (max + min) / 2.0 / 255.0;
        let s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * l - 1.0).abs()) / 255.0
        };

        Self::new(color.hue(), s, l)
    }

    pub fn to_rgb(self) -> [u8; 3] {
        let a = self.s * self.l.min(1.0 - self.l);
        [0.0, 8.0, 4.0].map(|n: f64| {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let factor = (k - 3.0).min(9.0 - k).min(1.0).clamp(-1.0, 1.0);
            to_channel(self.l - a * factor)
        })
    }
}

// ---------------------------------------------------------------------------
// Text form
// ---------------------------------------------------------------------------

/// `hsl(H, S%, L%)`, or `hsla(H, S%, L%, A)` for a translucent color.
pub fn format(color: &Color) -> String {
    let hsl = Hsl::from_color(color);
    functional(
        "hsl",
        [
            display_hue(hsl.h).to_string(),
            format!("{}%", display_percent(hsl.s)),
            format!("{}%", display_percent(hsl.l)),
        ],
        color,
    )
}

pub fn parse(text: &str) -> Result<Color, ColorError> {
    let reject = || ColorError::rejected(ColorFormat::Hsl, text);
    let parts = components(text, &["hsla", "hsl"]).ok_or_else(reject)?;
    if !(3..=4).contains(&parts.len()) {
        return Err(reject());
    }

    let h = hue_component(&parts[0]).ok_or_else(reject)?;
    let s = unit_component(&parts[1]).ok_or_else(reject)?;
    let l = unit_component(&parts[2]).ok_or_else(reject)?;
    let a = alpha_component(parts.get(3)).ok_or_else(reject)?;

    let [r, g, b] = Hsl::new(h, s, l).to_rgb();
    Ok(Color::rgba(r, g, b, a))
}
