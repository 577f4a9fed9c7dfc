use crate::color::{to_channel, Color};
use crate::error::ColorError;
use crate::space::{
    alpha_component, components, display_hue, display_percent, functional, hue_component,
    unit_component, ColorFormat,
};

/// A color in the HSI (Hue, Saturation, Intensity) color space.
///
/// Intensity is the mean of the three channels; saturation is how far the
/// smallest channel sits below that mean. Hue uses the same hexagonal
/// formula as HSL and HSV so that the three agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsi {
    pub h: f64,
    pub s: f64,
    pub i: f64,
}

impl Hsi {
    pub fn new(h: f64, s: f64, i: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            i: i.clamp(0.0, 1.0),
        }
    }

    pub fn from_color(color: &Color) -> Self {
        let sum: f64 = color.rgb.iter().map(|&c| f64::from(c)).sum();
        let i = sum / 3.0 / 255.0;
        let s = if i == 0.0 {
            0.0
        } else {
            1.0 - f64::from(color.min()) / 255.0 / i
        };
        Self::new(color.hue(), s, i)
    }

    pub fn to_rgb(self) -> [u8; 3] {
        let h = self.h / 60.0;
        let z = 1.0 - (h.rem_euclid(2.0) - 1.0).abs();
        let max = 3.0 * self.i * self.s / (1.0 + z);
        let mid = max * z;
        let floor = self.i * (1.0 - self.s);

        let [r, g, b] = match h.floor() as u8 {
            0 => [max, mid, 0.0],
            1 => [mid, max, 0.0],
            2 => [0.0, max, mid],
            3 => [0.0, mid, max],
            4 => [mid, 0.0, max],
            _ => [max, 0.0, mid],
        };
        [r, g, b].map(|c| to_channel(c + floor))
    }
}

/// `hsi(H, S%, I%)`, or `hsia(H, S%, I%, A)` for a translucent color.
pub fn format(color: &Color) -> String {
    let hsi = Hsi::from_color(color);
    functional(
        "hsi",
        [
            display_hue(hsi.h).to_string(),
            format!("{}%", display_percent(hsi.s)),
            format!("{}%", display_percent(hsi.i)),
        ],
        color,
    )
}

pub fn parse(text: &str) -> Result<Color, ColorError> {
    let reject = || ColorError::rejected(ColorFormat::Hsi, text);
    let parts = components(text, &["hsia", "hsi"]).ok_or_else(reject)?;
    if !(3..=4).contains(&parts.len()) {
        return Err(reject());
    }

    let h = hue_component(&parts[0]).ok_or_else(reject)?;
    let s = unit_component(&parts[1]).ok_or_else(reject)?;
    let i = unit_component(&parts[2]).ok_or_else(reject)?;
    let a = alpha_component(parts.get(3)).ok_or_else(reject)?;

    let [r, g, b] = Hsi::new(h, s, i).to_rgb();
    Ok(Color::rgba(r, g, b, a))
}
