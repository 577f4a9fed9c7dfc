use crate::color::{to_channel, Color};
use crate::error::ColorError;
use crate::space::{
    alpha_component, components, display_hue, display_percent, functional, hue_component,
    unit_component, ColorFormat,
};

/// A color in the HSV (Hue, Saturation, Value) color space.
///
/// Hue in degrees, saturation and value in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    pub fn from_color(color: &Color) -> Self {
        let max = f64::from(color.max());
        let min = f64::from(color.min());
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };
        Self::new(color.hue(), s, max / 255.0)
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [5.0, 3.0, 1.0].map(|n: f64| {
            let k = (n + self.h / 60.0).rem_euclid(6.0);
            let factor = k.min(4.0 - k).min(1.0).clamp(0.0, 1.0);
            to_channel(self.v - self.v * self.s * factor)
        })
    }
}

/// `hsv(H, S%, V%)`, or `hsva(H, S%, V%, A)` for a translucent color.
pub fn format(color: &Color) -> String {
    let hsv = Hsv::from_color(color);
    functional(
        "hsv",
        [
            display_hue(hsv.h).to_string(),
            format!("{}%", display_percent(hsv.s)),
            format!("{}%", display_percent(hsv.v)),
        ],
        color,
    )
}

pub fn parse(text: &str) -> Result<Color, ColorError> {
    let reject = || ColorError::rejected(ColorFormat::Hsv, text);
    let parts = components(text, &["hsva", "hsv", "hsba", "hsb"]).ok_or_else(reject)?;
    if !(3..=4).contains(&parts.len()) {
        return Err(reject());
    }

    let h = hue_component(&parts[0]).ok_or_else(reject)?;
    let s = unit_component(&parts[1]).ok_or_else(reject)?;
    let v = unit_component(&parts[2]).ok_or_else(reject)?;
    let a = alpha_component(parts.get(3)).ok_or_else(reject)?;

    let [r, g, b] = Hsv::new(h, s, v).to_rgb();
    Ok(Color::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn green() {
        assert_eq!(format(&Color::rgb(0, 255, 0)), "hsv(120, 100%, 100%)");
    }

    #[test]
    fn black_has_no_saturation() {
        let hsv = Hsv::from_color(&Color::rgb(0, 0, 0));
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 0.0);
    }

    #[test]
    fn saturation_is_relative_to_max() {
        let hsv = Hsv::from_color(&Color::rgb(100, 50, 50));
        assert_eq!(hsv.s, 0.5);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(format(&Color::rgb(100, 50, 50)), "hsv(0, 50%, 39%)");
    }

    #[test]
    fn to_rgb_known_values() {
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_rgb(), [255, 0, 0]);
        assert_eq!(Hsv::new(180.0, 1.0, 1.0).to_rgb(), [0, 255, 255]);
        assert_eq!(Hsv::new(300.0, 1.0, 0.5).to_rgb(), [128, 0, 128]);
        assert_eq!(Hsv::new(77.0, 0.0, 1.0).to_rgb(), [255, 255, 255]);
    }

    #[test]
    fn parse_forms() {
        assert_eq!(parse("hsv(120, 100%, 100%)").unwrap().rgb, [0, 255, 0]);
        assert_eq!(parse("hsb(120 100 100)").unwrap().rgb, [0, 255, 0]);
        let c = parse("hsva(240, 100%, 100%, 0.75)").unwrap();
        assert_eq!(c.rgb, [0, 0, 255]);
        assert_eq!(c.a, 0.75);
        assert!(parse("hsv(120, 100%, 120%)").is_err());
        assert!(parse("hsv(120, 100%)").is_err());
    }

    proptest! {
        #[test]
        fn prop_hsv_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let color = Color::rgb(r, g, b);
            let back = Hsv::from_color(&color).to_rgb();
            for (x, y) in back.iter().zip(color.rgb.iter()) {
                prop_assert!(x.abs_diff(*y) <= 1, "{:?} -> {:?}", color.rgb, back);
            }
        }
    }
}
