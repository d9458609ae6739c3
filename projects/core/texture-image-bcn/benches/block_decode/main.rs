use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use texture_image_bcn::{decode_block, CompressedFormat, DecoderVariant};
use texture_image_common::decoded_4x4_block::Decoded4x4Block;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode Blocks");

    // 8MB of block data, simple repeating pattern
    let input_size = 8388608;
    let input: Vec<u8> = (0..input_size).map(|i| (i % 255) as u8).collect();
    group.throughput(Throughput::Bytes(input_size as u64));

    for format in [CompressedFormat::Bc1, CompressedFormat::Bc2, CompressedFormat::Bc3] {
        for &variant in DecoderVariant::all_values() {
            let block_size = format.block_size();
            let mut output: Vec<Decoded4x4Block> = Vec::with_capacity(input_size / block_size);

            group.bench_function(format!("{format:?}_{variant:?}"), |b| {
                b.iter(|| {
                    output.clear();
                    output.extend(
                        input
                            .chunks_exact(block_size)
                            .filter_map(|block| decode_block(format, variant, block)),
                    );
                    std::hint::black_box(&output);
                })
            });
        }
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
