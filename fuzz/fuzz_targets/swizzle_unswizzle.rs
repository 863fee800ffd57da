#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate arbitrary;
use arbitrary::{Arbitrary, Result, Unstructured};

extern crate rand;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug)]
struct Input {
    width_in_blocks: usize,
    height_in_blocks: usize,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Input {
            width_in_blocks: u.int_in_range(0..=64)?,
            height_in_blocks: u.int_in_range(0..=64)?,
        })
    }
}

fuzz_target!(|input: Input| {
    let width = input.width_in_blocks * ps2_texel::swizzle::BLOCK_DIMENSION;
    let height = input.height_in_blocks * ps2_texel::swizzle::BLOCK_DIMENSION;

    let seed = [13u8; 32];
    let mut rng: StdRng = SeedableRng::from_seed(seed);
    let linear: Vec<_> = (0..width * height)
        .map(|_| rng.gen_range::<u8, _>(0..=255))
        .collect();

    let swizzled = ps2_texel::swizzle::swizzle8(width, height, &linear).unwrap();
    let new_linear = ps2_texel::swizzle::unswizzle8(width, height, &swizzled).unwrap();

    if linear != new_linear {
        panic!("Swizzle unswizzle is not 1:1");
    }
});
