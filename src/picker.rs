use rand::Rng;
use tracing::{debug, trace};

use crate::color::{clamp_alpha, Color};
use crate::gradient::{self, Canvas, PickCoordinate};
use crate::slider::{self, SLIDER_MAX};
use crate::space::ColorFormat;

// ---------------------------------------------------------------------------
// Picker
// ---------------------------------------------------------------------------

/// Full state of one color picker: the selected color, the hue slider and
/// the cursor on the saturation/lightness canvas.
///
/// Every setter leaves the three mutually consistent. Text setters return
/// `None` and change nothing when the text does not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    color: Color,
    /// Fully saturated color painted at the right edge of the canvas.
    base: [u8; 3],
    slider: u16,
    pick: PickCoordinate,
}

impl Picker {
    /// Start on pure red: slider at 0, cursor in the top-right corner.
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            color: Color::RED,
            base: Color::RED.rgb,
            slider: 0,
            pick: PickCoordinate {
                x: canvas.width,
                y: 0.0,
            },
        }
    }

    /// Start on a random hue with the cursor somewhere in the upper-right
    /// quadrant of the canvas.
    pub fn random<R: Rng + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let x = (rng.gen::<f64>() * canvas.width / 2.0).round() + canvas.width / 2.0;
        let y = (rng.gen::<f64>() * canvas.height / 2.0).round();

        let mut picker = Self::new(canvas);
        picker.pick = canvas.clamp(x, y);
        picker.set_from_slider(rng.gen_range(0..=SLIDER_MAX), canvas);
        picker
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn current_color(&self) -> Color {
        self.color
    }

    pub fn current_slider_position(&self) -> u16 {
        self.slider
    }

    pub fn current_pick_coordinate(&self) -> PickCoordinate {
        self.pick
    }

    pub fn base_color(&self) -> [u8; 3] {
        self.base
    }

    pub fn to_text(&self, format: ColorFormat) -> String {
        format.format(&self.color)
    }

    pub fn to_rgb_string(&self) -> String {
        self.to_text(ColorFormat::Rgb)
    }

    pub fn to_hex_string(&self) -> String {
        self.to_text(ColorFormat::Hex)
    }

    pub fn to_hsl_string(&self) -> String {
        self.to_text(ColorFormat::Hsl)
    }

    pub fn to_hsv_string(&self) -> String {
        self.to_text(ColorFormat::Hsv)
    }

    pub fn to_hsi_string(&self) -> String {
        self.to_text(ColorFormat::Hsi)
    }

    // -----------------------------------------------------------------------
    // Slider / canvas input
    // -----------------------------------------------------------------------

    /// Move the hue slider and repaint the color under the cursor.
    pub fn set_from_slider(&mut self, position: u16, canvas: &Canvas) -> Color {
        self.slider = position.min(SLIDER_MAX);
        self.base = slider::base_color(self.slider);
        self.resample(canvas);
        trace!(slider = self.slider, base = ?self.base, "slider moved");
        self.color
    }

    /// Move the cursor on the canvas; the point is clamped to the canvas.
    pub fn set_from_pick(&mut self, x: f64, y: f64, canvas: &Canvas) -> Color {
        self.pick = canvas.clamp(x, y);
        self.resample(canvas);
        trace!(x = self.pick.x, y = self.pick.y, "cursor moved");
        self.color
    }

    /// Set opacity; RGB is untouched.
    pub fn set_alpha(&mut self, a: f64) -> Color {
        self.color.a = clamp_alpha(a);
        self.color
    }

    /// Set opacity from an alpha slider step in 0..=255.
    pub fn set_alpha_from_slider(&mut self, step: u8) -> Color {
        self.set_alpha(f64::from(step) / 255.0)
    }

    /// Alpha slider step that shows the current opacity.
    pub fn alpha_slider_step(&self) -> u8 {
        (self.color.a * 255.0).round() as u8
    }

    fn resample(&mut self, canvas: &Canvas) {
        self.pick = canvas.clamp(self.pick.x, self.pick.y);
        self.color.rgb = gradient::color_at(self.base, self.pick.x, self.pick.y, canvas);
    }

    // -----------------------------------------------------------------------
    // Text input
    // -----------------------------------------------------------------------

    /// Parse `text` in `format` and, if valid, select that exact color.
    ///
    /// The slider and cursor are moved to where the color lives on the
    /// canvas; the color itself is kept as typed, not resampled.
    pub fn set_from_text(
        &mut self,
        format: ColorFormat,
        text: &str,
        canvas: &Canvas,
    ) -> Option<Color> {
        match format.parse(text) {
            Ok(color) => {
                self.display(color, canvas);
                Some(self.color)
            }
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    pub fn set_from_rgb_text(&mut self, text: &str, canvas: &Canvas) -> Option<Color> {
        self.set_from_text(ColorFormat::Rgb, text, canvas)
    }

    pub fn set_from_hex_text(&mut self, text: &str, canvas: &Canvas) -> Option<Color> {
        self.set_from_text(ColorFormat::Hex, text, canvas)
    }

    pub fn set_from_hsl_text(&mut self, text: &str, canvas: &Canvas) -> Option<Color> {
        self.set_from_text(ColorFormat::Hsl, text, canvas)
    }

    pub fn set_from_hsv_text(&mut self, text: &str, canvas: &Canvas) -> Option<Color> {
        self.set_from_text(ColorFormat::Hsv, text, canvas)
    }

    pub fn set_from_hsi_text(&mut self, text: &str, canvas: &Canvas) -> Option<Color> {
        self.set_from_text(ColorFormat::Hsi, text, canvas)
    }

    /// Select `color` and move slider and cursor to match it.
    pub fn display(&mut self, color: Color, canvas: &Canvas) {
        let selection = gradient::reconstruct(color.rgb, canvas);
        self.color = color;
        self.base = selection.base;
        self.slider = selection.slider;
        self.pick = selection.pick;
        trace!(
            rgb = ?color.rgb,
            slider = self.slider,
            x = self.pick.x,
            y = self.pick.y,
            "color displayed"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn canvas() -> Canvas {
        Canvas::new(300.0, 150.0).unwrap()
    }

    #[test]
    fn new_is_red() {
        let c = canvas();
        let picker = Picker::new(&c);
        assert_eq!(picker.current_color(), Color::RED);
        assert_eq!(picker.current_slider_position(), 0);
        assert_eq!(picker.base_color(), [255, 0, 0]);
        assert_eq!(picker.to_hex_string(), "#FF0000");
    }

    #[test]
    fn slider_repaints_under_cursor() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        let color = picker.set_from_slider(510, &c);
        assert_eq!(color.rgb, [0, 255, 0]);
        assert_eq!(picker.to_hsl_string(), "hsl(120, 100%, 50%)");
        assert_eq!(picker.to_hsv_string(), "hsv(120, 100%, 100%)");
    }

    #[test]
    fn slider_is_clamped() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        picker.set_from_slider(5000, &c);
        assert_eq!(picker.current_slider_position(), SLIDER_MAX);
        assert_eq!(picker.base_color(), [255, 0, 1]);
    }

    #[test]
    fn pick_corners() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        assert_eq!(picker.set_from_pick(0.0, 0.0, &c).rgb, [255, 255, 255]);
        assert_eq!(picker.set_from_pick(c.width, c.height, &c).rgb, [0, 0, 0]);
        assert_eq!(picker.set_from_pick(-20.0, 999.0, &c).rgb, [0, 0, 0]);
        assert_eq!(
            picker.current_pick_coordinate(),
            PickCoordinate { x: 0.0, y: c.height }
        );
    }

    #[test]
    fn hex_text_moves_slider_and_cursor() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        let color = picker.set_from_hex_text("#00FFFF", &c).unwrap();
        assert_eq!(color.rgb, [0, 255, 255]);
        assert_eq!(color.a, 1.0);
        assert_eq!(picker.current_slider_position(), 765);
        assert_eq!(
            picker.current_pick_coordinate(),
            PickCoordinate { x: c.width, y: 0.0 }
        );
        assert_eq!(picker.to_rgb_string(), "rgb(0, 255, 255)");
    }

    #[test]
    fn text_keeps_color_exactly() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        let color = picker.set_from_rgb_text("rgba(128, 64, 32, 0.5)", &c).unwrap();
        assert_eq!(color, Color::rgba(128, 64, 32, 0.5));
        assert!(picker.to_hex_string().ends_with("80"));
        assert_eq!(picker.to_rgb_string(), "rgba(128, 64, 32, 0.5)");
    }

    #[test]
    fn rejected_text_changes_nothing() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        picker.set_from_slider(300, &c);
        let before = picker.clone();
        assert!(picker.set_from_hex_text("#12", &c).is_none());
        assert!(picker.set_from_rgb_text("rgb(300, 0, 0)", &c).is_none());
        assert!(picker.set_from_hsl_text("hsl(x)", &c).is_none());
        assert!(picker.set_from_hsv_text("", &c).is_none());
        assert!(picker.set_from_hsi_text("hsi(1, 2%)", &c).is_none());
        assert_eq!(picker, before);
    }

    #[test]
    fn gray_text_resets_slider() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        picker.set_from_slider(900, &c);
        picker.set_from_hsl_text("hsl(0, 0%, 50%)", &c).unwrap();
        assert_eq!(picker.current_slider_position(), 0);
        assert_eq!(picker.base_color(), [255, 0, 0]);
        assert_eq!(picker.current_color().rgb, [128, 128, 128]);
    }

    #[test]
    fn black_text_pins_cursor() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        picker.set_from_hsv_text("hsv(200, 50%, 0%)", &c).unwrap();
        assert_eq!(
            picker.current_pick_coordinate(),
            PickCoordinate { x: 0.0, y: c.height }
        );
    }

    #[test]
    fn slider_after_text_keeps_cursor() {
        let c = Canvas::new(100.0, 100.0).unwrap();
        let mut picker = Picker::new(&c);
        picker.set_from_rgb_text("rgb(128, 64, 64)", &c).unwrap();
        // same cursor, new hue
        let color = picker.set_from_slider(1020, &c);
        assert_eq!(color.rgb, [64, 64, 128]);
    }

    #[test]
    fn alpha_leaves_rgb_alone() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        let color = picker.set_alpha_from_slider(128);
        assert_eq!(color.rgb, [255, 0, 0]);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(picker.alpha_slider_step(), 128);
        assert_eq!(picker.set_alpha(3.0).a, 1.0);
        assert_eq!(picker.to_hex_string(), "#FF0000");
    }

    #[test]
    fn alpha_survives_slider_and_pick() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        picker.set_alpha(0.25);
        assert_eq!(picker.set_from_slider(100, &c).a, 0.25);
        assert_eq!(picker.set_from_pick(10.0, 10.0, &c).a, 0.25);
    }

    #[test]
    fn hsi_text() {
        let c = canvas();
        let mut picker = Picker::new(&c);
        picker.set_from_hsi_text("hsi(240, 100%, 33.34%)", &c).unwrap();
        assert_eq!(picker.current_color().rgb, [0, 0, 255]);
        assert_eq!(picker.current_slider_position(), 1020);
        assert_eq!(picker.to_hsi_string(), "hsi(240, 100%, 33%)");
    }

    #[test]
    fn random_start_is_consistent() {
        let c = canvas();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picker = Picker::random(&c, &mut rng);
            let pick = picker.current_pick_coordinate();
            assert!(pick.x >= c.width / 2.0 && pick.x <= c.width);
            assert!(pick.y >= 0.0 && pick.y <= c.height / 2.0);
            assert!(picker.current_slider_position() <= SLIDER_MAX);
            assert_eq!(
                picker.current_color().rgb,
                gradient::color_at(picker.base_color(), pick.x, pick.y, &c)
            );
        }
    }
}
