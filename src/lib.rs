#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod types;

pub use error::HexParseError;
pub use math::Rgb;

use types::RgbJs;

#[napi]
pub fn health_check() -> String {
    "color-utils-native ok".to_string()
}

/// Convert an integer channel to a two-digit lowercase hex string.
#[napi]
pub fn component_to_hex(c: i64) -> String {
    math::component_to_hex(c)
}

#[napi]
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    math::rgb_to_hex(r, g, b)
}

/// Check if the given string is a valid hex color (`#RRGGBB` or `#RGB`).
#[napi]
pub fn valid(hex: String) -> bool {
    math::is_valid_hex(&hex)
}

/// `{ r, g, b }` for a 6-digit hex color, `null` otherwise.
#[napi]
pub fn hex_to_rgb(hex: String) -> Option<RgbJs> {
    math::hex_to_rgb(&hex).map(RgbJs::from)
}

#[napi]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    math::hsl_to_hex(h, s, l)
}

/// Random hex color at the given lightness, [0, 1].
#[napi]
pub fn random(lightness: f64) -> String {
    math::random_hex(lightness)
}

/// Handy for picking a text color: `colorIsLight(r, g, b) ? 'black' : 'white'`.
#[napi]
pub fn color_is_light(r: u32, g: u32, b: u32) -> bool {
    math::color_is_light(r, g, b)
}

#[napi]
pub fn hex_is_light(hex: String) -> bool {
    math::hex_is_light(&hex)
}

/// Batch version of `hexIsLight`, parsed in parallel.
#[napi]
pub fn hexes_are_light(hexes: Vec<String>) -> Vec<bool> {
    engine::classify_hexes(&hexes)
}

/// Batch version of `hexToRgb`, parsed in parallel.
#[napi]
pub fn hexes_to_rgb(hexes: Vec<String>) -> Vec<Option<RgbJs>> {
    engine::decode_hexes(&hexes)
        .into_iter()
        .map(|rgb| rgb.map(RgbJs::from))
        .collect()
}
