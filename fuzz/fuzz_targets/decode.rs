#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate arbitrary;
use arbitrary::{Arbitrary, Result, Unstructured};

#[derive(Debug)]
struct Input {
    format: ps2_texel::PixelFormat,
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Input {
            format: u.arbitrary()?,
            width: u.int_in_range(0..=1024)?,
            height: u.int_in_range(0..=1024)?,
            data: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: Input| {
    // This should never panic even if the input size is incorrect.
    let _ = ps2_texel::decode_texels(input.format, input.width, input.height, &input.data);
    let _ = ps2_texel::decode_swizzled_texels(input.format, input.width, input.height, &input.data);
    let _ = ps2_texel::palette::decode_palette(input.format, &input.data);
});
