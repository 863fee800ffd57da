//! Unpacking and packing for the indexed formats.
//!
//! Indices are always returned as one byte per texel in row-major order.
//! The codec doesn't check indices against the palette size.
use alloc::vec::Vec;

use crate::{check_size, format::texel_count, TexelError};

/// Unpacks `width * height` indices of [PSMT8](crate::PixelFormat::PSMT8) data.
/// Each byte is already a single index, so this only validates the length.
pub fn decode_psmt8(width: usize, height: usize, data: &[u8]) -> Result<Vec<u8>, TexelError> {
    check_size(texel_count(width, height)?, data.len())?;
    Ok(data.to_vec())
}

/// Packs `indices` as [PSMT8](crate::PixelFormat::PSMT8) data.
pub fn encode_psmt8(width: usize, height: usize, indices: &[u8]) -> Result<Vec<u8>, TexelError> {
    check_size(texel_count(width, height)?, indices.len())?;
    Ok(indices.to_vec())
}

/// Unpacks `width * height` indices of [PSMT4](crate::PixelFormat::PSMT4) data.
///
/// The low nibble of each byte is the even texel and the high nibble is the odd texel.
/// Returns [TexelError::InvalidDimensions] if `width` is odd.
/**
```rust
use ps2_texel::indexed::decode_psmt4;

assert_eq!(vec![1, 2, 3, 4], decode_psmt4(4, 1, &[0x21, 0x43]).unwrap());
```
*/
pub fn decode_psmt4(width: usize, height: usize, data: &[u8]) -> Result<Vec<u8>, TexelError> {
    let texel_count = psmt4_texel_count(width, height)?;
    check_size(texel_count / 2, data.len())?;

    let mut indices = Vec::with_capacity(texel_count);
    for byte in data {
        indices.push(byte & 0x0F);
        indices.push(byte >> 4);
    }
    Ok(indices)
}

/// Packs `indices` as [PSMT4](crate::PixelFormat::PSMT4) data.
///
/// Only the low 4 bits of each index are used.
/// Returns [TexelError::InvalidDimensions] if `width` is odd.
pub fn encode_psmt4(width: usize, height: usize, indices: &[u8]) -> Result<Vec<u8>, TexelError> {
    let texel_count = psmt4_texel_count(width, height)?;
    check_size(texel_count, indices.len())?;

    Ok(indices
        .chunks_exact(2)
        .map(|pair| (pair[0] & 0x0F) | ((pair[1] & 0x0F) << 4))
        .collect())
}

fn psmt4_texel_count(width: usize, height: usize) -> Result<usize, TexelError> {
    // Rows are packed independently, so a row can't end halfway through a byte.
    if width % 2 != 0 {
        return Err(TexelError::InvalidDimensions {
            width,
            height,
            multiple_of: 2,
        });
    }
    texel_count(width, height)
}
