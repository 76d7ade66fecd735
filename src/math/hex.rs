use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::HexParseError;

/// Accepts `#RRGGBB` and shorthand `#RGB`, `#` optional.
static VALID_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?([0-9a-f]{6}|[0-9a-f]{3})$").expect("valid regex"));

/// Only the 6-digit form has a capture group per channel.
static STRICT_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid regex")
});

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r.into(), self.g.into(), self.b.into())
    }

    pub fn is_light(self) -> bool {
        super::lightness::color_is_light(self.r.into(), self.g.into(), self.b.into())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = HexParseError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        if !is_valid_hex(hex) {
            return Err(HexParseError::Invalid(hex.to_string()));
        }
        // 3-digit shorthand passes validation but is never expanded.
        let caps = STRICT_HEX
            .captures(hex)
            .ok_or_else(|| HexParseError::Shorthand(hex.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| HexParseError::Invalid(hex.to_string()))
        };
        Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
    }
}

/// Convert one channel to lowercase base-16, zero-padded to two digits.
///
/// Values outside 0-255 are not clamped: `256` renders as `"100"` and
/// `-1` as `"-1"`, matching a plain radix-16 conversion.
pub fn component_to_hex(c: i64) -> String {
    let hex = if c < 0 {
        format!("-{:x}", c.unsigned_abs())
    } else {
        format!("{:x}", c)
    };
    if hex.len() == 1 {
        format!("0{hex}")
    } else {
        hex
    }
}

/// `#` followed by the hex encoding of r, g, b.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(r),
        component_to_hex(g),
        component_to_hex(b)
    )
}

/// Whether `hex` is a 6- or 3-digit hex color, `#` optional, case-insensitive.
pub fn is_valid_hex(hex: &str) -> bool {
    VALID_HEX.is_match(hex)
}

/// Decode a 6-digit hex color. Invalid strings and 3-digit shorthand give `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}
