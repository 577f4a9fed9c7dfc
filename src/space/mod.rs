//! Text forms of a color: `rgb()`, `#hex`, `hsl()`, `hsv()` and `hsi()`.
//!
//! Every format has a canonical serializer and a lenient parser. Parsers
//! accept an optional leading tag, optional parentheses, optional unit
//! suffixes and either commas or whitespace between components.

pub mod hex;
pub mod hsi;
pub mod hsl;
pub mod hsv;
pub mod rgb;

use std::fmt;

use crate::color::Color;
use crate::error::ColorError;

// ---------------------------------------------------------------------------
// ColorFormat
// ---------------------------------------------------------------------------

/// One of the text forms a color can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ColorFormat {
    Rgb,
    Hex,
    Hsl,
    Hsv,
    Hsi,
}

impl ColorFormat {
    /// All formats in display order.
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Rgb,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
        ColorFormat::Hsi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hex => "Hex",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsv => "HSV",
            ColorFormat::Hsi => "HSI",
        }
    }

    /// Guess the format of free text from its tag or shape.
    ///
    /// Returns `None` for text that looks like none of them; the text may
    /// still fail to parse in the detected format.
    pub fn detect(text: &str) -> Option<ColorFormat> {
        let lower = text.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return None;
        }
        if lower.starts_with('#') {
            return Some(ColorFormat::Hex);
        }
        for (tag, format) in [
            ("rgb", ColorFormat::Rgb),
            ("hsl", ColorFormat::Hsl),
            ("hsv", ColorFormat::Hsv),
            ("hsb", ColorFormat::Hsv),
            ("hsi", ColorFormat::Hsi),
        ] {
            if lower.starts_with(tag) {
                return Some(format);
            }
        }
        if hex::is_hex_body(&lower) {
            return Some(ColorFormat::Hex);
        }
        if lower.starts_with(|c: char| c.is_ascii_digit() || c == '(') {
            return Some(ColorFormat::Rgb);
        }
        None
    }

    /// Parse `text` as this format.
    pub fn parse(self, text: &str) -> Result<Color, ColorError> {
        match self {
            ColorFormat::Rgb => rgb::parse(text),
            ColorFormat::Hex => hex::parse(text),
            ColorFormat::Hsl => hsl::parse(text),
            ColorFormat::Hsv => hsv::parse(text),
            ColorFormat::Hsi => hsi::parse(text),
        }
    }

    /// Canonical text for `color` in this format.
    pub fn format(self, color: &Color) -> String {
        match self {
            ColorFormat::Rgb => rgb::format(color),
            ColorFormat::Hex => hex::format(color),
            ColorFormat::Hsl => hsl::format(color),
            ColorFormat::Hsv => hsv::format(color),
            ColorFormat::Hsi => hsi::format(color),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Component lexing shared by the functional notations
// ---------------------------------------------------------------------------

/// A number read out of a functional color notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Component {
    pub value: f64,
    /// Written without a decimal point.
    pub integer: bool,
    /// Carried a `%` suffix.
    pub percent: bool,
}

/// Split `text` into numeric components after stripping the first matching
/// tag in `tags` (try longer tags first), parentheses and unit suffixes.
pub(crate) fn components(text: &str, tags: &[&str]) -> Option<Vec<Component>> {
    let lower = text.trim().to_ascii_lowercase();
    let mut rest = lower.as_str();
    if let Some(tag) = tags.iter().find(|tag| rest.starts_with(**tag)) {
        rest = &rest[tag.len()..];
    }
    let rest = rest.trim();
    let rest = rest.strip_prefix('(').unwrap_or(rest);
    let rest = rest.strip_suffix(')').unwrap_or(rest);

    rest.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(component)
        .collect()
}

fn component(token: &str) -> Option<Component> {
    let (number, percent) = match token.strip_suffix('%') {
        Some(number) => (number, true),
        None => (
            token
                .strip_suffix("deg")
                .or_else(|| token.strip_suffix('°'))
                .unwrap_or(token),
            false,
        ),
    };

    let digits = number.strip_prefix(&['-', '+'][..]).unwrap_or(number);
    let well_formed = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|&c| c == '.').count() <= 1;
    if !well_formed {
        return None;
    }

    Some(Component {
        value: number.parse().ok()?,
        integer: !number.contains('.'),
        percent,
    })
}

/// Read an optional trailing alpha component; a percentage is scaled down.
pub(crate) fn alpha_component(component: Option<&Component>) -> Option<f64> {
    let Some(c) = component else {
        return Some(1.0);
    };
    let a = if c.percent { c.value / 100.0 } else { c.value };
    (0.0..=1.0).contains(&a).then_some(a)
}

/// Read a 0..=100 percentage into a 0.0..=1.0 fraction. The `%` sign is
/// optional.
pub(crate) fn unit_component(c: &Component) -> Option<f64> {
    (0.0..=100.0).contains(&c.value).then_some(c.value / 100.0)
}

/// Hue in degrees, wrapped into 0.0..360.0.
pub(crate) fn hue_component(c: &Component) -> Option<f64> {
    (!c.percent).then_some(c.value.rem_euclid(360.0))
}

/// Hue rounded for display; 360 shows as 0.
pub(crate) fn display_hue(hue: f64) -> i64 {
    (hue.round() as i64).rem_euclid(360)
}

pub(crate) fn display_percent(unit: f64) -> i64 {
    (unit * 100.0).round() as i64
}

/// `tag(a, b, c)` or `taga(a, b, c, alpha)` when the color is translucent.
pub(crate) fn functional(tag: &str, parts: [String; 3], color: &Color) -> String {
    let [a, b, c] = parts;
    if color.is_opaque() {
        format!("{}({}, {}, {})", tag, a, b, c)
    } else {
        format!(
            "{}a({}, {}, {}, {})",
            tag,
            a,
            b,
            c,
            crate::color::format_alpha(color.a)
        )
    }
}
