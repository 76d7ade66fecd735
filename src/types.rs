use napi_derive::napi;

use crate::math::Rgb;

/// NAPI-compatible version of `Rgb` for returning `{ r, g, b }` to JS
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbJs {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl From<Rgb> for RgbJs {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r.into(),
            g: rgb.g.into(),
            b: rgb.b.into(),
        }
    }
}
