//! Functions for swizzling and unswizzling indexed texels.
//!
//! The GS stores indexed textures in 16x16 texel blocks.
//! Each block interleaves columns and alternates the order of groups of four rows.
//! This is the layout produced by uploading PSMT8 data and reading it back as PSMCT32.
//!
//! The functions operate on unpacked indices with one byte per texel,
//! so the same address calculation applies to both 4 bit and 8 bit formats.
use alloc::{vec, vec::Vec};

use crate::{check_size, format::texel_count, TexelError};

/// The width and height of a swizzled block in texels.
pub const BLOCK_DIMENSION: usize = 16;

/// Swizzles the row-major indices in `source` to the GS block layout.
///
/// Returns [TexelError::InvalidDimensions] if `width` or `height` is not a multiple of [BLOCK_DIMENSION].
/// # Examples
/**
```rust
use ps2_texel::swizzle::{swizzle8, unswizzle8};

let width = 32;
let height = 16;
let indices: Vec<u8> = (0..width * height).map(|i| i as u8).collect();

let swizzled = swizzle8(width, height, &indices).unwrap();
assert_eq!(indices, unswizzle8(width, height, &swizzled).unwrap());
```
 */
pub fn swizzle8(width: usize, height: usize, source: &[u8]) -> Result<Vec<u8>, TexelError> {
    swizzle_inner::<false>(width, height, source)
}

/// Unswizzles the indices in `source` from the GS block layout to row-major order.
///
/// Returns [TexelError::InvalidDimensions] if `width` or `height` is not a multiple of [BLOCK_DIMENSION].
pub fn unswizzle8(width: usize, height: usize, source: &[u8]) -> Result<Vec<u8>, TexelError> {
    swizzle_inner::<true>(width, height, source)
}

fn swizzle_inner<const UNSWIZZLE: bool>(
    width: usize,
    height: usize,
    source: &[u8],
) -> Result<Vec<u8>, TexelError> {
    validate_dimensions(width, height)?;
    let texel_count = texel_count(width, height)?;
    check_size(texel_count, source.len())?;

    let mut destination = vec![0u8; texel_count];
    swizzle_indices::<UNSWIZZLE>(width, height, source, &mut destination);
    Ok(destination)
}

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<(), TexelError> {
    if width % BLOCK_DIMENSION != 0 || height % BLOCK_DIMENSION != 0 {
        Err(TexelError::InvalidDimensions {
            width,
            height,
            multiple_of: BLOCK_DIMENSION,
        })
    } else {
        Ok(())
    }
}

// Both slices must have width * height elements with dimensions checked by validate_dimensions.
pub(crate) fn swizzle_indices<const UNSWIZZLE: bool>(
    width: usize,
    height: usize,
    source: &[u8],
    destination: &mut [u8],
) {
    for y in 0..height {
        for x in 0..width {
            let linear = y * width + x;
            let swizzled = swizzled_offset(x, y, width);

            // Swap the addresses for swizzling vs unswizzling.
            if UNSWIZZLE {
                destination[linear] = source[swizzled];
            } else {
                destination[swizzled] = source[linear];
            }
        }
    }
}

/// Returns the offset in the swizzled data for the texel at location (x, y).
pub fn swizzled_offset(x: usize, y: usize, width: usize) -> usize {
    let block_location = (y & !0xF) * width + (x & !0xF) * 2;

    // Groups of four rows alternate which half of the block columns comes first.
    let swap_selector = (((y + 2) >> 2) & 1) * 4;
    let position_y = (((y & !3) >> 1) + (y & 1)) & 7;
    let column_location = position_y * width * 2 + ((x + swap_selector) & 7) * 4;

    let byte_number = ((y >> 1) & 1) + ((x >> 2) & 2);
    block_location + column_location + byte_number
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_indices(count: usize) -> Vec<u8> {
        let seed = [13u8; 32];
        let mut rng: StdRng = SeedableRng::from_seed(seed);
        (0..count).map(|_| rng.gen_range::<u8, _>(0..=255)).collect()
    }

    #[test]
    fn swizzled_offsets_first_rows() {
        let row0: Vec<_> = (0..16).map(|x| swizzled_offset(x, 0, 16)).collect();
        assert_eq!(
            vec![0, 4, 8, 12, 16, 20, 24, 28, 2, 6, 10, 14, 18, 22, 26, 30],
            row0
        );

        let row1: Vec<_> = (0..16).map(|x| swizzled_offset(x, 1, 16)).collect();
        assert_eq!(
            vec![32, 36, 40, 44, 48, 52, 56, 60, 34, 38, 42, 46, 50, 54, 58, 62],
            row1
        );
    }

    #[test]
    fn swizzled_offsets_second_block() {
        // Horizontally adjacent blocks share rows of 2 * width bytes.
        assert_eq!(32, swizzled_offset(16, 0, 32));
        // Each row of blocks starts after 16 rows of texels.
        assert_eq!(512, swizzled_offset(0, 16, 32));
    }

    #[test]
    fn swizzled_offsets_row_groups() {
        assert_eq!(17, swizzled_offset(0, 2, 16));
        assert_eq!(80, swizzled_offset(0, 4, 16));
    }

    #[test]
    fn swizzled_offsets_permutation() {
        for (width, height) in [(16, 16), (32, 16), (16, 64), (128, 32)] {
            let mut seen = vec![false; width * height];
            for y in 0..height {
                for x in 0..width {
                    let offset = swizzled_offset(x, y, width);
                    assert!(!seen[offset], "{} visited twice", offset);
                    seen[offset] = true;
                }
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn unswizzle_first_row_16_16() {
        let swizzled: Vec<u8> = (0..=255u8).collect();
        let unswizzled = unswizzle8(16, 16, &swizzled).unwrap();
        assert_eq!(
            &[0, 4, 8, 12, 16, 20, 24, 28, 2, 6, 10, 14, 18, 22, 26, 30],
            &unswizzled[..16]
        );
    }

    #[test]
    fn swizzle_unswizzle() {
        for width in [16, 32, 64] {
            for height in [16, 32, 64] {
                let input = random_indices(width * height);
                let swizzled = swizzle8(width, height, &input).unwrap();
                assert_ne!(input, swizzled);
                assert_eq!(input, unswizzle8(width, height, &swizzled).unwrap());
            }
        }
    }

    #[test]
    fn unswizzle_swizzle() {
        let input = random_indices(64 * 32);
        let unswizzled = unswizzle8(64, 32, &input).unwrap();
        assert_eq!(input, swizzle8(64, 32, &unswizzled).unwrap());
    }

    #[test]
    fn swizzle_empty() {
        assert_eq!(Ok(Vec::new()), swizzle8(0, 0, &[]));
        assert_eq!(Ok(Vec::new()), unswizzle8(0, 16, &[]));
    }

    #[test]
    fn swizzle_invalid_dimensions() {
        assert_eq!(
            Err(TexelError::InvalidDimensions {
                width: 8,
                height: 16,
                multiple_of: 16
            }),
            swizzle8(8, 16, &[0u8; 128])
        );
        assert_eq!(
            Err(TexelError::InvalidDimensions {
                width: 16,
                height: 20,
                multiple_of: 16
            }),
            unswizzle8(16, 20, &[0u8; 320])
        );
    }

    #[test]
    fn swizzle_not_enough_data() {
        assert_eq!(
            Err(TexelError::SizeMismatch {
                expected_size: 256,
                actual_size: 255
            }),
            swizzle8(16, 16, &[0u8; 255])
        );
    }
}
