//! # ps2_texel
//! ps2_texel converts texture data between the pixel storage formats used by the PlayStation 2 GS
//! and row-major colors or palette indices.
//!
//! # Getting Started
//! The following example decodes a swizzled PSMT8 texture and its palette to RGBA colors.
/*!
```rust no_run
use ps2_texel::{decode_swizzled_texels, palette::{decode_palette, expand_indices}, PixelFormat, Texels};
# fn main() -> Result<(), ps2_texel::TexelError> {
# let texel_data = vec![0u8; 64 * 64];
# let palette_data = vec![0u8; 1024];
// Container formats typically store the raw PSM register value.
let format = PixelFormat::from_raw(0x13)?;
let palette = decode_palette(format, &palette_data)?;
if let Texels::Indexed(indices) = decode_swizzled_texels(format, 64, 64, &texel_data)? {
    let colors = expand_indices(&indices, &palette)?;
}
# Ok(())
# }
```
*/
//! # Formats
//! Direct color formats decode to one [Color] per texel.
//! Indexed formats decode to one palette index byte per texel.
//! Palettes are stored separately and handled by the [palette] module.
//! See [PixelFormat] for the supported formats.
//!
//! # Alpha
//! The GS treats an alpha of `0x80` as fully opaque.
//! Decoding and encoding 32 bit colors converts between this range and the usual `0x00` to `0xFF` range.
//! Textures don't record which range they use, so decoding has to guess.
//! See the [alpha] module for details.
//!
//! # Swizzling
//! Indexed textures are often stored using the GS block layout.
//! The [swizzle] module converts between this layout and row-major order.
//! Swizzling requires dimensions that are multiples of 16.
//!
//! # Limitations
//! Decoding and encoding the 16 bit signed formats is not lossless.
//! [color::encode_psmct16s] uses a different bit layout than [color::decode_psmct16s].
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

use alloc::vec::Vec;

pub mod alpha;
pub mod color;
pub mod indexed;
pub mod palette;
pub mod swizzle;

mod format;

// Avoid making this module public to prevent people importing it accidentally.
#[cfg(feature = "ffi")]
mod ffi;

pub use format::*;

/// An 8 bit RGBA color using the full `0x00` to `0xFF` range for all channels.
#[repr(C)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Decoded texel data in row-major order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Texels {
    /// A color for each texel of a direct color format.
    DirectColor(Vec<Color>),
    /// A palette index for each texel of an indexed format.
    Indexed(Vec<u8>),
}

/// Errors than can occur while decoding or encoding.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TexelError {
    /// The value is not the `PSM` value of a supported [PixelFormat].
    InvalidFormat { value: u32 },

    /// The operation requires an indexed format.
    NotIndexed { format: PixelFormat },

    /// The operation requires a direct color format.
    NotDirectColor { format: PixelFormat },

    /// The source data has the wrong number of bytes or elements.
    /// The expected size for encoded data is the result of [PixelFormat::texel_data_size].
    SizeMismatch {
        expected_size: usize,
        actual_size: usize,
    },

    /// The width and height must both be multiples of `multiple_of`
    /// and small enough to not overflow when calculating sizes.
    InvalidDimensions {
        width: usize,
        height: usize,
        multiple_of: usize,
    },

    /// Palettes must have 16 or 256 entries.
    InvalidPaletteSize { size: usize },

    /// A palette index does not refer to a color in the palette.
    IndexOutOfRange { index: u8, palette_len: usize },
}

impl core::fmt::Display for TexelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TexelError::InvalidFormat { value } => {
                write!(f, "Invalid format. {:#04x} is not a supported PSM value.", value)
            }
            TexelError::NotIndexed { format } => {
                write!(f, "Invalid format. {:?} is not an indexed format.", format)
            }
            TexelError::NotDirectColor { format } => {
                write!(f, "Invalid format. {:?} is not a direct color format.", format)
            }
            TexelError::SizeMismatch {
                expected_size,
                actual_size,
            } => write!(
                f,
                "Size mismatch. Expected {} but found {}.",
                expected_size, actual_size
            ),
            TexelError::InvalidDimensions {
                width,
                height,
                multiple_of,
            } => write!(
                f,
                "Invalid dimensions {}x{}. Dimensions must be multiples of {}.",
                width, height, multiple_of
            ),
            TexelError::InvalidPaletteSize { size } => write!(
                f,
                "Invalid palette size. Expected 16 or 256 colors but found {}.",
                size
            ),
            TexelError::IndexOutOfRange { index, palette_len } => write!(
                f,
                "Index {} is out of range for a palette with {} colors.",
                index, palette_len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TexelError {}

pub(crate) fn check_size(expected_size: usize, actual_size: usize) -> Result<(), TexelError> {
    if expected_size != actual_size {
        Err(TexelError::SizeMismatch {
            expected_size,
            actual_size,
        })
    } else {
        Ok(())
    }
}

/// Decodes `width * height` texels of `format` from row-major `data`.
///
/// `data` must have exactly [PixelFormat::texel_data_size] many bytes.
/// # Examples
/**
```rust
use ps2_texel::{decode_texels, Color, PixelFormat, Texels};

let texels = decode_texels(PixelFormat::PSMCT24, 1, 1, &[1, 2, 3, 0]).unwrap();
assert_eq!(Texels::DirectColor(vec![Color::new(1, 2, 3, 255)]), texels);

let texels = decode_texels(PixelFormat::PSMT4, 4, 1, &[0x21, 0x43]).unwrap();
assert_eq!(Texels::Indexed(vec![1, 2, 3, 4]), texels);
```
 */
pub fn decode_texels(
    format: PixelFormat,
    width: usize,
    height: usize,
    data: &[u8],
) -> Result<Texels, TexelError> {
    match format {
        PixelFormat::PSMCT32 | PixelFormat::PSMZ32 => {
            color::decode_psmct32(width, height, data).map(Texels::DirectColor)
        }
        PixelFormat::PSMCT24 | PixelFormat::PSMZ24 => {
            color::decode_psmct24(width, height, data).map(Texels::DirectColor)
        }
        PixelFormat::PSMCT16 | PixelFormat::PSMZ16 => {
            color::decode_psmct16(width, height, data).map(Texels::DirectColor)
        }
        PixelFormat::PSMCT16S | PixelFormat::PSMZ16S => {
            color::decode_psmct16s(width, height, data).map(Texels::DirectColor)
        }
        PixelFormat::PSMT8 | PixelFormat::PSMT8H => {
            indexed::decode_psmt8(width, height, data).map(Texels::Indexed)
        }
        PixelFormat::PSMT4 | PixelFormat::PSMT4HL | PixelFormat::PSMT4HH => {
            indexed::decode_psmt4(width, height, data).map(Texels::Indexed)
        }
    }
}

/// Encodes `texels` as row-major `format` data.
///
/// Returns [TexelError::NotDirectColor] or [TexelError::NotIndexed]
/// if the kind of `texels` doesn't match `format`.
pub fn encode_texels(
    format: PixelFormat,
    width: usize,
    height: usize,
    texels: &Texels,
) -> Result<Vec<u8>, TexelError> {
    match texels {
        Texels::DirectColor(colors) => encode_colors(format, width, height, colors),
        Texels::Indexed(indices) => encode_indices(format, width, height, indices),
    }
}

/// Encodes `colors` for the direct color format `format`.
pub fn encode_colors(
    format: PixelFormat,
    width: usize,
    height: usize,
    colors: &[Color],
) -> Result<Vec<u8>, TexelError> {
    match format {
        PixelFormat::PSMCT32 | PixelFormat::PSMZ32 => color::encode_psmct32(width, height, colors),
        PixelFormat::PSMCT24 | PixelFormat::PSMZ24 => color::encode_psmct24(width, height, colors),
        PixelFormat::PSMCT16 | PixelFormat::PSMZ16 => color::encode_psmct16(width, height, colors),
        PixelFormat::PSMCT16S | PixelFormat::PSMZ16S => {
            color::encode_psmct16s(width, height, colors)
        }
        PixelFormat::PSMT8
        | PixelFormat::PSMT8H
        | PixelFormat::PSMT4
        | PixelFormat::PSMT4HL
        | PixelFormat::PSMT4HH => Err(TexelError::NotDirectColor { format }),
    }
}

/// Encodes `indices` for the indexed format `format`.
pub fn encode_indices(
    format: PixelFormat,
    width: usize,
    height: usize,
    indices: &[u8],
) -> Result<Vec<u8>, TexelError> {
    match format {
        PixelFormat::PSMT8 | PixelFormat::PSMT8H => indexed::encode_psmt8(width, height, indices),
        PixelFormat::PSMT4 | PixelFormat::PSMT4HL | PixelFormat::PSMT4HH => {
            indexed::encode_psmt4(width, height, indices)
        }
        PixelFormat::PSMCT32
        | PixelFormat::PSMCT24
        | PixelFormat::PSMCT16
        | PixelFormat::PSMCT16S
        | PixelFormat::PSMZ32
        | PixelFormat::PSMZ24
        | PixelFormat::PSMZ16
        | PixelFormat::PSMZ16S => Err(TexelError::NotIndexed { format }),
    }
}

/// Decodes the indexed format `format` from `data` stored in the GS block layout.
/// The indices are unpacked first and then unswizzled with [swizzle::unswizzle8].
///
/// Returns [TexelError::NotIndexed] for direct color formats
/// and [TexelError::InvalidDimensions] if `width` or `height` is not a multiple of 16.
pub fn decode_swizzled_texels(
    format: PixelFormat,
    width: usize,
    height: usize,
    data: &[u8],
) -> Result<Texels, TexelError> {
    if !format.is_indexed() {
        return Err(TexelError::NotIndexed { format });
    }
    swizzle::validate_dimensions(width, height)?;

    match decode_texels(format, width, height, data)? {
        Texels::Indexed(indices) => swizzle::unswizzle8(width, height, &indices).map(Texels::Indexed),
        Texels::DirectColor(_) => Err(TexelError::NotIndexed { format }),
    }
}

/// Encodes `indices` for the indexed format `format` in the GS block layout.
/// This is the inverse of [decode_swizzled_texels].
pub fn encode_swizzled_indices(
    format: PixelFormat,
    width: usize,
    height: usize,
    indices: &[u8],
) -> Result<Vec<u8>, TexelError> {
    if !format.is_indexed() {
        return Err(TexelError::NotIndexed { format });
    }

    let swizzled = swizzle::swizzle8(width, height, indices)?;
    encode_indices(format, width, height, &swizzled)
}
