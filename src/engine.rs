use rayon::prelude::*;

use crate::math::{hex_is_light, hex_to_rgb, Rgb};

/// Classify many hex colors as light or dark in parallel.
///
/// Output order matches input order. Undecodable entries count as light,
/// same as [`hex_is_light`].
pub fn classify_hexes(hexes: &[String]) -> Vec<bool> {
    log::debug!("classifying {} hex colors", hexes.len());
    hexes.par_iter().map(|hex| hex_is_light(hex)).collect()
}

/// Decode many hex colors in parallel. Order is preserved; failures are `None`.
pub fn decode_hexes(hexes: &[String]) -> Vec<Option<Rgb>> {
    log::debug!("decoding {} hex colors", hexes.len());
    hexes.par_iter().map(|hex| hex_to_rgb(hex)).collect()
}
