use crate::color::{round_alpha, Color};
use crate::error::ColorError;
use crate::space::ColorFormat;

/// Hex color code like `#FF8800`, or `#FF880080` with alpha.
///
/// Alpha is only written when the color is translucent.
pub fn format(color: &Color) -> String {
    let [r, g, b] = color.rgb;
    let mut code = format!("#{:02X}{:02X}{:02X}", r, g, b);
    if !color.is_opaque() {
        let alpha = (color.a * 255.0).round().clamp(0.0, 255.0) as u8;
        code.push_str(&format!("{:02X}", alpha));
    }
    code
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
pub fn parse(text: &str) -> Result<Color, ColorError> {
    let reject = || ColorError::rejected(ColorFormat::Hex, text);
    let trimmed = text.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !is_hex_body(body) {
        return Err(reject());
    }

    let byte = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| reject());

    match body.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, nibble) in body.chars().enumerate() {
                rgb[i] = byte(&nibble.to_string().repeat(2))?;
            }
            Ok(Color::rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Ok(Color::rgb(
            byte(&body[0..2])?,
            byte(&body[2..4])?,
            byte(&body[4..6])?,
        )),
        _ => {
            let alpha = byte(&body[6..8])?;
            Ok(Color::rgba(
                byte(&body[0..2])?,
                byte(&body[2..4])?,
                byte(&body[4..6])?,
                round_alpha(f64::from(alpha) / 255.0),
            ))
        }
    }
}

/// `true` for a run of exactly 3, 6 or 8 hex digits.
pub fn is_hex_body(body: &str) -> bool {
    matches!(body.len(), 3 | 6 | 8) && body.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_opaque() {
        assert_eq!(format(&Color::rgb(0, 255, 0)), "#00FF00");
        assert_eq!(format(&Color::rgb(10, 171, 205)), "#0AABCD");
    }

    #[test]
    fn format_translucent_appends_alpha_byte() {
        let code = format(&Color::rgba(128, 64, 32, 0.5));
        assert_eq!(code, "#80402080");
        assert!(code.ends_with("80"));
        assert_eq!(format(&Color::rgba(0, 0, 0, 0.0)), "#00000000");
    }

    #[test]
    fn parse_short_form() {
        let c = parse("#F00").unwrap();
        assert_eq!(c.rgb, [255, 0, 0]);
        assert_eq!(c.a, 1.0);
        assert_eq!(parse("a1c").unwrap().rgb, [0xaa, 0x11, 0xcc]);
    }

    #[test]
    fn parse_long_forms() {
        assert_eq!(parse("#00ff00").unwrap().rgb, [0, 255, 0]);
        let c = parse(" 80402080 ").unwrap();
        assert_eq!(c.rgb, [128, 64, 32]);
        assert_eq!(c.a, 0.502);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in ["", "#", "#ff", "#ffff", "#fffff", "#fffffff", "#gggggg", "##fff", "#fff fff"] {
            assert!(parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejection_names_format() {
        let err = parse("nope").unwrap_err();
        assert_eq!(err.to_string(), "'nope' is not a valid Hex color");
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u8..=255) {
            let color = Color::rgba(r, g, b, f64::from(a) / 255.0);
            let back = parse(&format(&color)).unwrap();
            prop_assert_eq!(back.rgb, color.rgb);
            prop_assert!((back.a - color.a).abs() <= 0.0005 + f64::EPSILON);
            prop_assert_eq!(format(&back), format(&color));
        }
    }
}
