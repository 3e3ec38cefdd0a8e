use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hangul_blocks::{jamo, syllable};

fn benchmark_decompose(c: &mut Criterion) {
    c.bench_function("decompose_every_syllable", |b| {
        b.iter(|| {
            for code in 0xAC00..=0xD7A3u32 {
                let ch = char::from_u32(code).unwrap();
                black_box(syllable::decompose(black_box(ch)).unwrap());
            }
        })
    });
}

fn benchmark_compose(c: &mut Criterion) {
    c.bench_function("compose_every_syllable", |b| {
        b.iter(|| {
            for initial in 0..19u8 {
                for medial in 0..21u8 {
                    for final_ in 0..28u8 {
                        black_box(syllable::compose(initial, medial, final_).unwrap());
                    }
                }
            }
        })
    });
}

fn benchmark_expand(c: &mut Criterion) {
    c.bench_function("expand_every_syllable", |b| {
        b.iter(|| {
            for code in 0xAC00..=0xD7A3u32 {
                let ch = char::from_u32(code).unwrap();
                black_box(jamo::expand_syllable(black_box(ch)).unwrap());
            }
        })
    });
}

criterion_group!(benches, benchmark_decompose, benchmark_compose, benchmark_expand);
criterion_main!(benches);
