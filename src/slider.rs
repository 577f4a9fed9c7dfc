//! The hue slider: an integer position on an unrolled hue wheel.
//!
//! The wheel is six segments of 255 steps each,
//! Red → Yellow → Green → Cyan → Blue → Magenta → Red.
//! Every position maps to a *base color*: one channel at 255, one at 0 and
//! the third sweeping between them.

/// Steps in one segment of the wheel.
pub const SEGMENT: u16 = 255;

/// Largest slider position. Position 1530 would wrap back to red.
pub const SLIDER_MAX: u16 = SEGMENT * 6 - 1;

/// Fully saturated base color for a slider position.
///
/// Positions above [`SLIDER_MAX`] are clamped.
pub fn base_color(position: u16) -> [u8; 3] {
    let position = position.min(SLIDER_MAX);
    let segment = position / SEGMENT;
    let step = (position % SEGMENT) as u8;
    let rising = segment % 2 == 0;
    let sweep = (2 - (segment + 1) % 3) as usize;

    // (channel at 255, channel at 0) for each segment
    let (high, low) = match (rising, sweep) {
        (true, 1) => (0, 2),  // red -> yellow
        (false, 0) => (1, 2), // yellow -> green
        (true, 2) => (1, 0),  // green -> cyan
        (false, 1) => (2, 0), // cyan -> blue
        (true, 0) => (2, 1),  // blue -> magenta
        _ => (0, 1),          // magenta -> red
    };

    let mut base = [0u8; 3];
    base[high] = 255;
    base[low] = 0;
    base[sweep] = if rising { step } else { 255 - step };
    base
}

/// Slider position that produces `base` as its base color.
///
/// `base` is expected to hold one channel at 255 and one at 0; anything else
/// (a gray, or a triple with no saturated channel) maps to red at 0.
pub fn position_of(base: [u8; 3]) -> u16 {
    let highs: Vec<usize> = (0..3).filter(|&i| base[i] == 255).collect();
    let lows: Vec<usize> = (0..3).filter(|&i| base[i] == 0).collect();

    match (highs.as_slice(), lows.as_slice()) {
        // secondaries, by which pair is high
        ([0, 1], _) => SEGMENT,
        ([1, 2], _) => SEGMENT * 3,
        ([0, 2], _) => SEGMENT * 5,
        // primaries, by which pair is low
        (_, [1, 2]) => 0,
        (_, [0, 2]) => SEGMENT * 2,
        (_, [0, 1]) => SEGMENT * 4,
        ([high], [low]) => {
            let mid_idx = 3 - high - low;
            let mid = u16::from(base[mid_idx]);
            match (high, mid_idx) {
                (0, 1) => mid,
                (0, _) => SEGMENT * 5 + (SEGMENT - mid),
                (1, 0) => SEGMENT * 2 - mid,
                (1, _) => SEGMENT * 2 + mid,
                (2, 1) => SEGMENT * 4 - mid,
                _ => SEGMENT * 4 + mid,
            }
        }
        _ => 0,
    }
}

/// Hue angle in degrees that a slider position stands for.
pub fn hue_degrees(position: u16) -> f64 {
    f64::from(position.min(SLIDER_MAX)) * 360.0 / f64::from(SEGMENT * 6)
}
