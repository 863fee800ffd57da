use criterion::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use ps2_texel::{decode_texels, PixelFormat};

use criterion::BenchmarkId;
use criterion::Throughput;

fn decode_texels_benchmark(c: &mut Criterion) {
    let size = 256;
    // The largest formats use 4 bytes per texel.
    let source = vec![0x40u8; size * size * 4];

    let mut group = c.benchmark_group("decode_texels");
    for format in [
        PixelFormat::PSMCT32,
        PixelFormat::PSMCT24,
        PixelFormat::PSMCT16,
        PixelFormat::PSMT8,
        PixelFormat::PSMT4,
    ] {
        let data_size = format.texel_data_size(size, size).unwrap();
        group.throughput(Throughput::Bytes(data_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", format)),
            &format,
            |b, &format| {
                b.iter(|| decode_texels(format, black_box(size), size, &source[..data_size]));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, decode_texels_benchmark);
criterion_main!(benches);
