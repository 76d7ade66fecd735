use rand::Rng;

use super::hsl::hsl_to_hex;

/// Random fully-saturated color at `lightness`, drawing the hue from `rng`.
///
/// The hue is uniform in [0, 1).
pub fn random_hex_with<R: Rng + ?Sized>(rng: &mut R, lightness: f64) -> String {
    let hue: f64 = rng.gen();
    hsl_to_hex(hue, 1.0, lightness)
}

/// Random fully-saturated color at `lightness`, using the thread-local generator.
pub fn random_hex(lightness: f64) -> String {
    random_hex_with(&mut rand::thread_rng(), lightness)
}
