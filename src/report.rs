use serde::Serialize;

use crate::color::{format_alpha, Color};
use crate::gradient::PickCoordinate;
use crate::picker::Picker;
use crate::slider;
use crate::space::ColorFormat;

/// Everything the picker shows for its current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub color: Color,
    /// Alpha slider step, 0..=255.
    pub alpha_step: u8,
    pub rgb: String,
    pub hex: String,
    pub hsl: String,
    pub hsv: String,
    pub hsi: String,
    pub slider: u16,
    /// Hue angle the slider position stands for.
    pub slider_hue: f64,
    pub base: [u8; 3],
    pub pick: PickCoordinate,
}

impl Report {
    pub fn of(picker: &Picker) -> Self {
        Self {
            color: picker.current_color(),
            alpha_step: picker.alpha_slider_step(),
            rgb: picker.to_rgb_string(),
            hex: picker.to_hex_string(),
            hsl: picker.to_hsl_string(),
            hsv: picker.to_hsv_string(),
            hsi: picker.to_hsi_string(),
            slider: picker.current_slider_position(),
            slider_hue: slider::hue_degrees(picker.current_slider_position()),
            base: picker.base_color(),
            pick: picker.current_pick_coordinate(),
        }
    }

    pub fn text(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Hex => &self.hex,
            ColorFormat::Hsl => &self.hsl,
            ColorFormat::Hsv => &self.hsv,
            ColorFormat::Hsi => &self.hsi,
        }
    }

    /// Human-readable, one field per line.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = ColorFormat::ALL
            .iter()
            .map(|&format| format!("{:<7}{}", format!("{}:", format.label()), self.text(format)))
            .collect();
        lines.push(format!(
            "Alpha: {} (step {})",
            format_alpha(self.color.a),
            self.alpha_step
        ));
        lines.push(format!(
            "Slider: {} ({:.0}°, base rgb({}, {}, {}))",
            self.slider, self.slider_hue, self.base[0], self.base[1], self.base[2]
        ));
        lines.push(format!("Pick:  x={:.1} y={:.1}", self.pick.x, self.pick.y));
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
