//! Conversions between the GS alpha range and the usual 8 bit alpha range.
//!
//! The GS treats an alpha of `0x80` as fully opaque, so texture data
//! created for the console typically only uses values from `0x00` to `0x80`.
//! Neither conversion is the exact inverse of the other.
//! Converting back and forth may change alpha values by 1.
use crate::Color;

/// The alpha value the GS treats as fully opaque.
pub const CONSOLE_ALPHA_MAX: u8 = 0x80;

/// Scales `alpha` from `0x00..=0x80` to `0x00..=0xFF`, rounding to the nearest value.
/// Values above `0x80` saturate to `0xFF`.
/**
```rust
use ps2_texel::alpha::alpha_to_host;

assert_eq!(0xFF, alpha_to_host(0x80));
assert_eq!(0x80, alpha_to_host(0x40));
assert_eq!(0x00, alpha_to_host(0x00));
```
*/
pub const fn alpha_to_host(alpha: u8) -> u8 {
    let max = CONSOLE_ALPHA_MAX as u32;
    let scaled = (alpha as u32 * 0xFF + max / 2) / max;
    if scaled > 0xFF {
        0xFF
    } else {
        scaled as u8
    }
}

/// Scales `alpha` from `0x00..=0xFF` to `0x00..=0x80`, rounding to the nearest value.
/**
```rust
use ps2_texel::alpha::alpha_to_console;

assert_eq!(0x80, alpha_to_console(0xFF));
assert_eq!(0x40, alpha_to_console(0x80));
assert_eq!(0x00, alpha_to_console(0x00));
```
*/
pub const fn alpha_to_console(alpha: u8) -> u8 {
    ((alpha as u32 * CONSOLE_ALPHA_MAX as u32 + 0xFF / 2) / 0xFF) as u8
}

/// Returns `true` if every alpha value in `colors` is within the console range.
///
/// This is only a guess.
/// A texture that is mostly transparent may use full range alpha values that never exceed `0x80`.
pub fn is_console_range(colors: &[Color]) -> bool {
    colors
        .iter()
        .map(|c| c.a)
        .max()
        .map_or(true, |max| max <= CONSOLE_ALPHA_MAX)
}

/// Rescales all alpha values in `colors` to the full range
/// if the texture appears to use the console range.
///
/// The decision applies to the entire texture.
/// Textures with any alpha above `0x80` are left unmodified.
pub fn normalize_alpha(colors: &mut [Color]) {
    if is_console_range(colors) {
        for color in colors.iter_mut() {
            color.a = alpha_to_host(color.a);
        }
    }
}
