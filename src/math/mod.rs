//! Pure color conversions between hex strings, RGB channels and HSL.

pub mod hex;
pub mod hsl;
pub mod lightness;
pub mod random;

pub use hex::{component_to_hex, hex_to_rgb, is_valid_hex, rgb_to_hex, Rgb};
pub use hsl::{hsl_to_hex, hsl_to_rgb_channels, hue_to_rgb};
pub use lightness::{color_is_light, hex_is_light};
pub use random::{random_hex, random_hex_with};
