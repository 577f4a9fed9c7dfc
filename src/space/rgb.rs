use crate::color::Color;
use crate::error::ColorError;
use crate::space::{alpha_component, components, functional, ColorFormat};

/// `rgb(R, G, B)`, or `rgba(R, G, B, A)` for a translucent color.
pub fn format(color: &Color) -> String {
    functional("rgb", color.rgb.map(|c| c.to_string()), color)
}

/// Parse three integer channels (0..=255) and an optional alpha (0..=1).
pub fn parse(text: &str) -> Result<Color, ColorError> {
    let reject = || ColorError::rejected(ColorFormat::Rgb, text);
    let parts = components(text, &["rgba", "rgb"]).ok_or_else(reject)?;
    if !(3..=4).contains(&parts.len()) {
        return Err(reject());
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        if !part.integer || part.percent || !(0.0..=255.0).contains(&part.value) {
            return Err(reject());
        }
        *slot = part.value as u8;
    }
    let a = alpha_component(parts.get(3)).ok_or_else(reject)?;

    Ok(Color::rgba(rgb[0], rgb[1], rgb[2], a))
}
