//! Synthetic noise used when no input texture is supplied

use rand::Rng;

use crate::texture::grid::Texture;

/// Fold a 32-bit random value into one byte
///
/// The low byte and the next byte are summed and masked to 8 bits.
pub const fn fold_to_byte(value: u32) -> u8 {
    (((value & 0xff) + ((value & 0xff00) >> 8)) & 0xff) as u8
}

/// Fill a `width` x `height` texture with folded noise drawn from `rng`
///
/// Samples are drawn in row-major order, so a seeded generator always yields
/// the same texture.
pub fn white_noise<R: Rng>(width: usize, height: usize, rng: &mut R) -> Texture {
    Texture::from_fn(width, height, |_, _| fold_to_byte(rng.random::<u32>()))
}
