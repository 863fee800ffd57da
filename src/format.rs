//! Per format metadata for the GS pixel storage modes.
//!
//! The descriptor functions in this module are the single source of truth
//! for depth, palette, and size information.
//! Don't infer whether a format is indexed from its depth alone.
use core::convert::TryFrom;

use crate::TexelError;

/// An enumeration of the GS pixel storage modes ("PSM") used for textures.
///
/// The `Z` variants are depth buffer formats with the same memory layout
/// as their color counterparts.
/// The `H` variants store indices in the upper bits of a 32 bit word in GS memory
/// but use the same packed representation as [PixelFormat::PSMT8] and [PixelFormat::PSMT4] on disk.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PixelFormat {
    PSMCT32,
    PSMCT24,
    PSMCT16,
    PSMCT16S,
    PSMT8,
    PSMT4,
    PSMT8H,
    PSMT4HL,
    PSMT4HH,
    PSMZ32,
    PSMZ24,
    PSMZ16,
    PSMZ16S,
}

/// All of the supported formats in the order of their raw register values.
pub const PIXEL_FORMATS: [PixelFormat; 13] = [
    PixelFormat::PSMCT32,
    PixelFormat::PSMCT24,
    PixelFormat::PSMCT16,
    PixelFormat::PSMCT16S,
    PixelFormat::PSMT8,
    PixelFormat::PSMT4,
    PixelFormat::PSMT8H,
    PixelFormat::PSMT4HL,
    PixelFormat::PSMT4HH,
    PixelFormat::PSMZ32,
    PixelFormat::PSMZ24,
    PixelFormat::PSMZ16,
    PixelFormat::PSMZ16S,
];

impl PixelFormat {
    /// Attempts to construct a format from the `PSM` value stored in a GS register or file header.
    /// # Examples
    /**
    ```rust
    use ps2_texel::{PixelFormat, TexelError};

    assert_eq!(Ok(PixelFormat::PSMT8), PixelFormat::from_raw(0x13));
    assert_eq!(Err(TexelError::InvalidFormat { value: 0x05 }), PixelFormat::from_raw(0x05));
    ```
    */
    pub const fn from_raw(value: u32) -> Result<Self, TexelError> {
        match value {
            0x00 => Ok(PixelFormat::PSMCT32),
            0x01 => Ok(PixelFormat::PSMCT24),
            0x02 => Ok(PixelFormat::PSMCT16),
            0x0A => Ok(PixelFormat::PSMCT16S),
            0x13 => Ok(PixelFormat::PSMT8),
            0x14 => Ok(PixelFormat::PSMT4),
            0x1B => Ok(PixelFormat::PSMT8H),
            0x24 => Ok(PixelFormat::PSMT4HL),
            0x2C => Ok(PixelFormat::PSMT4HH),
            0x30 => Ok(PixelFormat::PSMZ32),
            0x31 => Ok(PixelFormat::PSMZ24),
            0x32 => Ok(PixelFormat::PSMZ16),
            0x3A => Ok(PixelFormat::PSMZ16S),
            _ => Err(TexelError::InvalidFormat { value }),
        }
    }

    /// The `PSM` register value for this format.
    pub const fn to_raw(self) -> u32 {
        match self {
            PixelFormat::PSMCT32 => 0x00,
            PixelFormat::PSMCT24 => 0x01,
            PixelFormat::PSMCT16 => 0x02,
            PixelFormat::PSMCT16S => 0x0A,
            PixelFormat::PSMT8 => 0x13,
            PixelFormat::PSMT4 => 0x14,
            PixelFormat::PSMT8H => 0x1B,
            PixelFormat::PSMT4HL => 0x24,
            PixelFormat::PSMT4HH => 0x2C,
            PixelFormat::PSMZ32 => 0x30,
            PixelFormat::PSMZ24 => 0x31,
            PixelFormat::PSMZ16 => 0x32,
            PixelFormat::PSMZ16S => 0x3A,
        }
    }

    /// The number of bits used for each texel.
    pub const fn depth(self) -> u32 {
        match self {
            PixelFormat::PSMCT32 | PixelFormat::PSMZ32 => 32,
            PixelFormat::PSMCT24 | PixelFormat::PSMZ24 => 24,
            PixelFormat::PSMCT16
            | PixelFormat::PSMCT16S
            | PixelFormat::PSMZ16
            | PixelFormat::PSMZ16S => 16,
            PixelFormat::PSMT8 | PixelFormat::PSMT8H => 8,
            PixelFormat::PSMT4 | PixelFormat::PSMT4HL | PixelFormat::PSMT4HH => 4,
        }
    }

    /// Returns `true` if texels store palette indices instead of colors.
    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            PixelFormat::PSMT8
                | PixelFormat::PSMT8H
                | PixelFormat::PSMT4
                | PixelFormat::PSMT4HL
                | PixelFormat::PSMT4HH
        )
    }

    /// The width and height in entries of the square palette for indexed formats.
    /// Direct color formats have no palette and return [None].
    pub const fn palette_dimension(self) -> Option<usize> {
        match self {
            PixelFormat::PSMT4 | PixelFormat::PSMT4HL | PixelFormat::PSMT4HH => Some(4),
            PixelFormat::PSMT8 | PixelFormat::PSMT8H => Some(16),
            _ => None,
        }
    }

    /// The number of palette entries for indexed formats.
    ///
    /// Returns [TexelError::NotIndexed] for direct color formats.
    pub const fn indexed_color_count(self) -> Result<usize, TexelError> {
        match self.palette_dimension() {
            Some(dimension) => Ok(dimension * dimension),
            None => Err(TexelError::NotIndexed { format: self }),
        }
    }

    /// The size in bytes of the texel data for a `width` x `height` texture.
    ///
    /// The 24 bit formats still use 4 bytes per texel.
    /// The 4 bit formats pack two texels into each byte, so `width * height` should be even.
    /// # Examples
    /**
    ```rust
    use ps2_texel::PixelFormat;

    assert_eq!(Ok(1024), PixelFormat::PSMCT32.texel_data_size(16, 16));
    assert_eq!(Ok(256), PixelFormat::PSMT8.texel_data_size(16, 16));
    assert_eq!(Ok(128), PixelFormat::PSMT4.texel_data_size(16, 16));
    ```
    */
    pub fn texel_data_size(self, width: usize, height: usize) -> Result<usize, TexelError> {
        let texel_count = texel_count(width, height)?;
        Ok(match self.depth() {
            32 | 24 => texel_count * 4,
            16 => texel_count * 2,
            8 => texel_count,
            _ => texel_count / 2,
        })
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = TexelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PixelFormat::from_raw(value)
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        format.to_raw()
    }
}

/// Calculates `width * height` and reports overflow as invalid dimensions.
// The largest texel is 4 bytes, so the byte size must also fit.
pub(crate) fn texel_count(width: usize, height: usize) -> Result<usize, TexelError> {
    width
        .checked_mul(height)
        .filter(|n| n.checked_mul(4).is_some())
        .ok_or(TexelError::InvalidDimensions {
            width,
            height,
            multiple_of: 1,
        })
}

/// Returns the depth in bits for the raw format value `format`.
///
/// Returns [TexelError::InvalidFormat] if `format` is not a known `PSM` value.
pub fn pixel_format_depth(format: u32) -> Result<u32, TexelError> {
    PixelFormat::from_raw(format).map(PixelFormat::depth)
}

/// Returns the palette size for the raw format value `format`.
///
/// Returns [TexelError::InvalidFormat] if `format` is not a known `PSM` value
/// and [TexelError::NotIndexed] for direct color formats.
pub fn indexed_color_count(format: u32) -> Result<usize, TexelError> {
    PixelFormat::from_raw(format)?.indexed_color_count()
}

/// Returns the texel data size in bytes for the raw format value `format`.
/// See [PixelFormat::texel_data_size].
pub fn texel_data_size(format: u32, width: usize, height: usize) -> Result<usize, TexelError> {
    PixelFormat::from_raw(format)?.texel_data_size(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for format in PIXEL_FORMATS {
            assert_eq!(Ok(format), PixelFormat::from_raw(format.to_raw()));
            assert_eq!(Ok(format), PixelFormat::try_from(u32::from(format)));
        }
    }

    #[test]
    fn raw_values_invalid() {
        let known: Vec<_> = PIXEL_FORMATS.iter().map(|f| f.to_raw()).collect();
        for value in (0..0x100).filter(|v| !known.contains(v)) {
            assert_eq!(
                Err(TexelError::InvalidFormat { value }),
                PixelFormat::from_raw(value)
            );
            assert_eq!(
                Err(TexelError::InvalidFormat { value }),
                pixel_format_depth(value)
            );
            assert_eq!(
                Err(TexelError::InvalidFormat { value }),
                indexed_color_count(value)
            );
            assert_eq!(
                Err(TexelError::InvalidFormat { value }),
                texel_data_size(value, 16, 16)
            );
        }
        assert_eq!(
            Err(TexelError::InvalidFormat { value: u32::MAX }),
            pixel_format_depth(u32::MAX)
        );
    }

    #[test]
    fn depths() {
        assert_eq!(32, PixelFormat::PSMCT32.depth());
        assert_eq!(32, PixelFormat::PSMZ32.depth());
        assert_eq!(24, PixelFormat::PSMCT24.depth());
        assert_eq!(24, PixelFormat::PSMZ24.depth());
        assert_eq!(16, PixelFormat::PSMCT16.depth());
        assert_eq!(16, PixelFormat::PSMCT16S.depth());
        assert_eq!(16, PixelFormat::PSMZ16.depth());
        assert_eq!(16, PixelFormat::PSMZ16S.depth());
        assert_eq!(8, PixelFormat::PSMT8.depth());
        assert_eq!(8, PixelFormat::PSMT8H.depth());
        assert_eq!(4, PixelFormat::PSMT4.depth());
        assert_eq!(4, PixelFormat::PSMT4HL.depth());
        assert_eq!(4, PixelFormat::PSMT4HH.depth());
    }

    #[test]
    fn indexed_formats() {
        let indexed: Vec<_> = PIXEL_FORMATS
            .iter()
            .copied()
            .filter(|f| f.is_indexed())
            .collect();
        assert_eq!(
            vec![
                PixelFormat::PSMT8,
                PixelFormat::PSMT4,
                PixelFormat::PSMT8H,
                PixelFormat::PSMT4HL,
                PixelFormat::PSMT4HH
            ],
            indexed
        );
        for format in indexed {
            assert!(matches!(format.depth(), 4 | 8));
        }
    }

    #[test]
    fn palette_dimensions() {
        assert_eq!(Some(16), PixelFormat::PSMT8.palette_dimension());
        assert_eq!(Some(16), PixelFormat::PSMT8H.palette_dimension());
        assert_eq!(Some(4), PixelFormat::PSMT4.palette_dimension());
        assert_eq!(Some(4), PixelFormat::PSMT4HL.palette_dimension());
        assert_eq!(Some(4), PixelFormat::PSMT4HH.palette_dimension());
        assert_eq!(None, PixelFormat::PSMCT32.palette_dimension());
        assert_eq!(None, PixelFormat::PSMZ16S.palette_dimension());
    }

    #[test]
    fn indexed_color_counts() {
        assert_eq!(Ok(256), indexed_color_count(0x13));
        assert_eq!(Ok(256), indexed_color_count(0x1B));
        assert_eq!(Ok(16), indexed_color_count(0x14));
        assert_eq!(Ok(16), indexed_color_count(0x24));
        assert_eq!(Ok(16), indexed_color_count(0x2C));
        assert_eq!(
            Err(TexelError::NotIndexed {
                format: PixelFormat::PSMCT32
            }),
            indexed_color_count(0x00)
        );
    }

    #[test]
    fn texel_data_sizes_16_16() {
        let size = |f: PixelFormat| f.texel_data_size(16, 16).unwrap();
        assert_eq!(1024, size(PixelFormat::PSMCT32));
        assert_eq!(1024, size(PixelFormat::PSMZ32));
        assert_eq!(1024, size(PixelFormat::PSMCT24));
        assert_eq!(1024, size(PixelFormat::PSMZ24));
        assert_eq!(512, size(PixelFormat::PSMCT16));
        assert_eq!(512, size(PixelFormat::PSMCT16S));
        assert_eq!(512, size(PixelFormat::PSMZ16));
        assert_eq!(512, size(PixelFormat::PSMZ16S));
        assert_eq!(256, size(PixelFormat::PSMT8));
        assert_eq!(256, size(PixelFormat::PSMT8H));
        assert_eq!(128, size(PixelFormat::PSMT4));
        assert_eq!(128, size(PixelFormat::PSMT4HL));
        assert_eq!(128, size(PixelFormat::PSMT4HH));
    }

    #[test]
    fn texel_data_sizes_non_square() {
        assert_eq!(Ok(128 * 64 * 4), texel_data_size(0x00, 128, 64));
        assert_eq!(Ok(64 * 32 * 2), texel_data_size(0x02, 64, 32));
        assert_eq!(Ok(64 * 32 / 2), texel_data_size(0x14, 64, 32));
        assert_eq!(Ok(0), texel_data_size(0x13, 0, 32));
    }

    #[test]
    fn texel_data_size_overflow() {
        assert_eq!(
            Err(TexelError::InvalidDimensions {
                width: usize::MAX,
                height: 2,
                multiple_of: 1
            }),
            PixelFormat::PSMCT32.texel_data_size(usize::MAX, 2)
        );
    }
}
