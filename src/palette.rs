//! Functions for palettes (CLUTs) of indexed formats.
//!
//! Palettes are stored as [PSMCT32](crate::PixelFormat::PSMCT32) colors.
//! The GS reads 256 color palettes in bands of 8 entries
//! where the second and third band of every 32 entries are swapped.
//! 16 color palettes fit in a single band and are stored in order.
use alloc::vec::Vec;

use crate::{color, Color, PixelFormat, TexelError};

const PALETTE_SIZE_4BIT: usize = 16;
const PALETTE_SIZE_8BIT: usize = 256;

// TILED[tiled_index] is the palette index stored at that position.
const TILED: [usize; PALETTE_SIZE_8BIT] = tiled_order();
const UNTILED: [usize; PALETTE_SIZE_8BIT] = inverse(&TILED);

const fn tiled_order() -> [usize; PALETTE_SIZE_8BIT] {
    let mut order = [0; PALETTE_SIZE_8BIT];
    let mut i = 0;
    while i < PALETTE_SIZE_8BIT {
        let band = (i / 8) % 4;
        order[i] = match band {
            1 => i + 8,
            2 => i - 8,
            _ => i,
        };
        i += 1;
    }
    order
}

const fn inverse(order: &[usize; PALETTE_SIZE_8BIT]) -> [usize; PALETTE_SIZE_8BIT] {
    let mut result = [0; PALETTE_SIZE_8BIT];
    let mut i = 0;
    while i < PALETTE_SIZE_8BIT {
        result[order[i]] = i;
        i += 1;
    }
    result
}

/// Reorders `palette` from index order to the order stored in GS memory.
///
/// Returns [TexelError::InvalidPaletteSize] if `palette` doesn't have 16 or 256 entries.
/// # Examples
/**
```rust
use ps2_texel::palette::{tile_palette, untile_palette};

let palette: Vec<u32> = (0..256).collect();
let tiled = tile_palette(&palette).unwrap();
assert_eq!(&[16, 17, 18, 19, 20, 21, 22, 23], &tiled[8..16]);
assert_eq!(palette, untile_palette(&tiled).unwrap());
```
 */
pub fn tile_palette<T: Copy>(palette: &[T]) -> Result<Vec<T>, TexelError> {
    reorder(palette, &TILED)
}

/// Reorders `palette` from the order stored in GS memory to index order.
/// This is the inverse of [tile_palette].
pub fn untile_palette<T: Copy>(palette: &[T]) -> Result<Vec<T>, TexelError> {
    reorder(palette, &UNTILED)
}

fn reorder<T: Copy>(
    palette: &[T],
    order: &[usize; PALETTE_SIZE_8BIT],
) -> Result<Vec<T>, TexelError> {
    match palette.len() {
        PALETTE_SIZE_4BIT => Ok(palette.to_vec()),
        PALETTE_SIZE_8BIT => Ok(order.iter().map(|i| palette[*i]).collect()),
        size => Err(TexelError::InvalidPaletteSize { size }),
    }
}

/// Decodes the palette for the indexed format `format` from PSMCT32 `data` to index order.
///
/// The palette has [PixelFormat::indexed_color_count] many colors.
/// Alpha is handled the same way as [color::decode_psmct32].
pub fn decode_palette(format: PixelFormat, data: &[u8]) -> Result<Vec<Color>, TexelError> {
    let count = format.indexed_color_count()?;
    let colors = color::decode_psmct32(count, 1, data)?;
    untile_palette(&colors)
}

/// Encodes `palette` for the indexed format `format` as PSMCT32 data in GS memory order.
pub fn encode_palette(format: PixelFormat, palette: &[Color]) -> Result<Vec<u8>, TexelError> {
    let count = format.indexed_color_count()?;
    if palette.len() != count {
        return Err(TexelError::InvalidPaletteSize {
            size: palette.len(),
        });
    }
    let tiled = tile_palette(palette)?;
    color::encode_psmct32(count, 1, &tiled)
}

/// Looks up the color for each of the `indices` in `palette`.
///
/// Returns [TexelError::IndexOutOfRange] for the first index that isn't in `palette`.
pub fn expand_indices(indices: &[u8], palette: &[Color]) -> Result<Vec<Color>, TexelError> {
    indices
        .iter()
        .map(|i| {
            palette
                .get(*i as usize)
                .copied()
                .ok_or(TexelError::IndexOutOfRange {
                    index: *i,
                    palette_len: palette.len(),
                })
        })
        .collect()
}
