//! Documentation for the C API.
//!
//! For easier integration, none of the FFI methods allocate memory.
//! Make sure to allocate the appropriate amount of memory for the destination array
//! by calling [ps2_texel_data_size] or using the texture dimensions.
//!
//! Formats are passed as the raw `PSM` register value.
use crate::{palette, swizzle, Color, PixelFormat};

/// See [crate::PixelFormat::texel_data_size].
///
/// # Safety
/// `format` must be a supported `PSM` value.
#[no_mangle]
pub unsafe extern "C" fn ps2_texel_data_size(format: u32, width: usize, height: usize) -> usize {
    PixelFormat::from_raw(format)
        .unwrap()
        .texel_data_size(width, height)
        .unwrap()
}

/// See [crate::swizzle::swizzle8].
///
/// # Safety
/// `source` and `destination` should both refer to arrays with `width * height` many bytes.
/// `width` and `height` must be multiples of 16.
#[no_mangle]
pub unsafe extern "C" fn ps2_swizzle8(
    width: usize,
    height: usize,
    source: *const u8,
    destination: *mut u8,
) {
    let source = core::slice::from_raw_parts(source, width * height);
    let destination = core::slice::from_raw_parts_mut(destination, width * height);

    swizzle::validate_dimensions(width, height).unwrap();
    swizzle::swizzle_indices::<false>(width, height, source, destination);
}

/// See [crate::swizzle::unswizzle8].
///
/// # Safety
/// `source` and `destination` should both refer to arrays with `width * height` many bytes.
/// `width` and `height` must be multiples of 16.
#[no_mangle]
pub unsafe extern "C" fn ps2_unswizzle8(
    width: usize,
    height: usize,
    source: *const u8,
    destination: *mut u8,
) {
    let source = core::slice::from_raw_parts(source, width * height);
    let destination = core::slice::from_raw_parts_mut(destination, width * height);

    swizzle::validate_dimensions(width, height).unwrap();
    swizzle::swizzle_indices::<true>(width, height, source, destination);
}

/// See [crate::palette::tile_palette].
///
/// # Safety
/// `source` and `destination` should both refer to arrays with `color_count` many colors.
/// `color_count` must be 16 or 256.
#[no_mangle]
pub unsafe extern "C" fn ps2_tile_palette(
    source: *const Color,
    destination: *mut Color,
    color_count: usize,
) {
    let source = core::slice::from_raw_parts(source, color_count);
    let destination = core::slice::from_raw_parts_mut(destination, color_count);

    destination.copy_from_slice(&palette::tile_palette(source).unwrap());
}

/// See [crate::palette::untile_palette].
///
/// # Safety
/// `source` and `destination` should both refer to arrays with `color_count` many colors.
/// `color_count` must be 16 or 256.
#[no_mangle]
pub unsafe extern "C" fn ps2_untile_palette(
    source: *const Color,
    destination: *mut Color,
    color_count: usize,
) {
    let source = core::slice::from_raw_parts(source, color_count);
    let destination = core::slice::from_raw_parts_mut(destination, color_count);

    destination.copy_from_slice(&palette::untile_palette(source).unwrap());
}
