use super::hex::rgb_to_hex;

/// Piecewise hue ramp for one channel. `t` is wrapped once into [0, 1].
pub fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Round half up, so `127.5` becomes `128`.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Convert HSL (each in [0, 1]) to 0-255 channels, rounded half up.
///
/// Inputs are not range-checked; out-of-range lightness yields channels
/// outside 0-255.
pub fn hsl_to_rgb_channels(h: f64, s: f64, l: f64) -> (i64, i64, i64) {
    let (r, g, b) = if s == 0.0 {
        // achromatic
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    (
        round_half_up(r * 255.0),
        round_half_up(g * 255.0),
        round_half_up(b * 255.0),
    )
}

/// Convert HSL (each in [0, 1], hue as a fraction of the circle) to `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb_channels(h, s, l);
    rgb_to_hex(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatic_mid_gray_rounds_up() {
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.5), "#808080");
    }

    #[test]
    fn achromatic_extremes() {
        assert_eq!(hsl_to_hex(0.3, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(0.7, 0.0, 1.0), "#ffffff");
    }

    #[test]
    fn primaries_at_full_saturation() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(1.0 / 3.0, 1.0, 0.5), "#00ff00");
        assert_eq!(hsl_to_hex(2.0 / 3.0, 1.0, 0.5), "#0000ff");
    }

    #[test]
    fn hue_of_one_equals_hue_of_zero() {
        assert_eq!(hsl_to_hex(1.0, 1.0, 0.5), hsl_to_hex(0.0, 1.0, 0.5));
    }

    #[test]
    fn light_and_dark_branches_of_q() {
        // l >= 0.5 uses l + s - l*s
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.75), "#ff8080");
        // l < 0.5 uses l * (1 + s)
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.25), "#800000");
    }

    #[test]
    fn hue_ramp_segments() {
        let (p, q) = (0.0, 1.0);
        assert_eq!(hue_to_rgb(p, q, 0.0), 0.0);
        assert!((hue_to_rgb(p, q, 1.0 / 12.0) - 0.5).abs() < 1e-12);
        assert_eq!(hue_to_rgb(p, q, 0.25), 1.0);
        assert!((hue_to_rgb(p, q, 7.0 / 12.0) - 0.5).abs() < 1e-12);
        assert_eq!(hue_to_rgb(p, q, 0.9), 0.0);
    }

    #[test]
    fn hue_ramp_wraps_once() {
        assert_eq!(hue_to_rgb(0.0, 1.0, -0.75), hue_to_rgb(0.0, 1.0, 0.25));
        assert_eq!(hue_to_rgb(0.0, 1.0, 1.25), hue_to_rgb(0.0, 1.0, 0.25));
    }

    #[test]
    fn out_of_range_lightness_is_rendered_as_is() {
        // 1.2 * 255 = 306 -> 0x132
        assert_eq!(hsl_to_rgb_channels(0.0, 0.0, 1.2), (306, 306, 306));
        assert_eq!(hsl_to_hex(0.0, 0.0, 1.2), "#132132132");
    }

    #[test]
    fn agrees_with_css_hsl_parser() {
        // (h, s, l) as fractions and the equivalent CSS hsl() string
        let cases = [
            (0.0, 1.0, 0.5, "hsl(0, 100%, 50%)"),
            (210.0 / 360.0, 0.4, 0.98, "hsl(210, 40%, 98%)"),
            (120.0 / 360.0, 0.6, 0.3, "hsl(120, 60%, 30%)"),
            (300.0 / 360.0, 0.25, 0.6, "hsl(300, 25%, 60%)"),
        ];
        for (h, s, l, css) in cases {
            let [r, g, b, _] = css.parse::<csscolorparser::Color>().unwrap().to_rgba8();
            let (er, eg, eb) = hsl_to_rgb_channels(h, s, l);
            // Allow ±1 per channel (different rounding in the reference parser)
            for (ours, theirs) in [(er, r), (eg, g), (eb, b)] {
                assert!(
                    (ours - i64::from(theirs)).abs() <= 1,
                    "{css}: got ({er}, {eg}, {eb}), expected ({r}, {g}, {b})"
                );
            }
        }
    }
}
