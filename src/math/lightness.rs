use super::hex::hex_to_rgb;

/// Perceptual weights for red, green, blue (ITU-R BT.601 luma).
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// A color is light when its darkness factor falls below this.
pub const LIGHTNESS_THRESHOLD: f64 = 0.5;

/// Whether 0-255 channels describe a light color, i.e. one that wants a
/// dark foreground.
///
/// darkness = 1 - (0.299 R + 0.587 G + 0.114 B) / 255, light when < 0.5.
/// Channels are not range-checked.
pub fn color_is_light(r: u32, g: u32, b: u32) -> bool {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let darkness = 1.0 - (wr * r as f64 + wg * g as f64 + wb * b as f64) / 255.0;
    darkness < LIGHTNESS_THRESHOLD
}

/// Same as [`color_is_light`], for a hex string.
///
/// Undecodable input (including 3-digit shorthand) counts as light: it is
/// taken to be a white or transparent background.
pub fn hex_is_light(hex: &str) -> bool {
    match hex_to_rgb(hex) {
        Some(rgb) => rgb.is_light(),
        None => {
            log::trace!("hex_is_light: cannot decode {hex:?}, assuming light background");
            true
        }
    }
}
