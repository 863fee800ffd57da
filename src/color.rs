//! Decoding and encoding for the direct color formats.
//!
//! All formats store texels in row-major order using little endian words.
//! The `Z` depth formats share the functions for their color counterparts.
use alloc::vec::Vec;

use crate::{alpha, check_size, format::texel_count, Color, TexelError};

/// Decodes `width * height` texels of [PSMCT32](crate::PixelFormat::PSMCT32) data.
///
/// Each texel is a little endian word with red in the lowest byte and alpha in the highest byte.
/// Alpha is rescaled to the full range if the texture appears to use the console range.
/// See [alpha::normalize_alpha].
pub fn decode_psmct32(width: usize, height: usize, data: &[u8]) -> Result<Vec<Color>, TexelError> {
    let mut colors = decode_words::<4>(width, height, data, |word| {
        let [r, g, b, a] = word;
        Color::new(r, g, b, a)
    })?;
    alpha::normalize_alpha(&mut colors);
    Ok(colors)
}

/// Encodes `colors` as [PSMCT32](crate::PixelFormat::PSMCT32) data with alpha scaled to the console range.
pub fn encode_psmct32(
    width: usize,
    height: usize,
    colors: &[Color],
) -> Result<Vec<u8>, TexelError> {
    encode_words::<4>(width, height, colors, |c| {
        [c.r, c.g, c.b, alpha::alpha_to_console(c.a)]
    })
}

/// Decodes `width * height` texels of [PSMCT24](crate::PixelFormat::PSMCT24) data.
///
/// Texels still take up 4 bytes, but the highest byte is ignored and alpha is always opaque.
pub fn decode_psmct24(width: usize, height: usize, data: &[u8]) -> Result<Vec<Color>, TexelError> {
    decode_words::<4>(width, height, data, |word| {
        let [r, g, b, _] = word;
        Color::new(r, g, b, 0xFF)
    })
}

/// Encodes the RGB channels of `colors` as [PSMCT24](crate::PixelFormat::PSMCT24) data.
pub fn encode_psmct24(
    width: usize,
    height: usize,
    colors: &[Color],
) -> Result<Vec<u8>, TexelError> {
    encode_words::<4>(width, height, colors, |c| [c.r, c.g, c.b, 0])
}

/// Decodes `width * height` texels of [PSMCT16](crate::PixelFormat::PSMCT16) data.
///
/// Texels use 5 bits for each of red, green, and blue starting from the lowest bit.
/// Channels are expanded to 8 bits by shifting without filling the low bits,
/// so the maximum channel value is `0xF8`.
/// The alpha bit is ignored and alpha is always opaque.
pub fn decode_psmct16(width: usize, height: usize, data: &[u8]) -> Result<Vec<Color>, TexelError> {
    decode_words::<2>(width, height, data, |word| {
        unpack_rgb5(u16::from_le_bytes(word))
    })
}

/// Encodes `colors` as [PSMCT16](crate::PixelFormat::PSMCT16) data.
/// The highest bit is set for alpha values of at least `0x80`.
pub fn encode_psmct16(
    width: usize,
    height: usize,
    colors: &[Color],
) -> Result<Vec<u8>, TexelError> {
    encode_words::<2>(width, height, colors, |c| {
        let r = (c.r >> 3) as u16;
        let g = (c.g >> 3) as u16;
        let b = (c.b >> 3) as u16;
        let a = (c.a >> 7) as u16;
        ((a << 15) | (b << 10) | (g << 5) | r).to_le_bytes()
    })
}

/// Decodes `width * height` texels of [PSMCT16S](crate::PixelFormat::PSMCT16S) data.
///
/// The bit layout is the same as [decode_psmct16] even though words are signed.
pub fn decode_psmct16s(
    width: usize,
    height: usize,
    data: &[u8],
) -> Result<Vec<Color>, TexelError> {
    decode_words::<2>(width, height, data, |word| {
        unpack_rgb5(i16::from_le_bytes(word) as u16)
    })
}

/// Encodes `colors` as [PSMCT16S](crate::PixelFormat::PSMCT16S) data.
///
/// This does not use the layout expected by [decode_psmct16s].
/// The low 5 bits of red and green are stored at bits 0 and 8.
/// Blue would be stored at bit 16, which doesn't fit in the word, so blue is always lost.
/// Existing tools write data this way, so the layout is preserved to produce identical files.
pub fn encode_psmct16s(
    width: usize,
    height: usize,
    colors: &[Color],
) -> Result<Vec<u8>, TexelError> {
    encode_words::<2>(width, height, colors, |c| {
        let value = (c.r as i32 & 0x1F) | ((c.g as i32 & 0x1F) << 8) | ((c.b as i32 & 0x1F) << 16);
        (value as i16).to_le_bytes()
    })
}

fn unpack_rgb5(value: u16) -> Color {
    Color::new(
        ((value & 0x001F) << 3) as u8,
        (((value & 0x03E0) >> 5) << 3) as u8,
        (((value & 0x7C00) >> 10) << 3) as u8,
        0xFF,
    )
}

fn decode_words<const N: usize>(
    width: usize,
    height: usize,
    data: &[u8],
    decode: impl Fn([u8; N]) -> Color,
) -> Result<Vec<Color>, TexelError> {
    let texel_count = texel_count(width, height)?;
    check_size(texel_count * N, data.len())?;

    Ok(data
        .chunks_exact(N)
        .map(|chunk| {
            let mut word = [0u8; N];
            word.copy_from_slice(chunk);
            decode(word)
        })
        .collect())
}

fn encode_words<const N: usize>(
    width: usize,
    height: usize,
    colors: &[Color],
    encode: impl Fn(&Color) -> [u8; N],
) -> Result<Vec<u8>, TexelError> {
    let texel_count = texel_count(width, height)?;
    check_size(texel_count, colors.len())?;

    let mut data = Vec::with_capacity(texel_count * N);
    for color in colors {
        data.extend_from_slice(&encode(color));
    }
    Ok(data)
}
