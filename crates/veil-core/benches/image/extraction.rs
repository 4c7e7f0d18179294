use criterion::{criterion_group, criterion_main, Criterion};
use veil_core::{extract, hide_message, NoProgress, PixelBuffer, SharedProgress};

pub fn image_extraction(c: &mut Criterion) {
    let mut carrier = PixelBuffer::new(512, 512, vec![0x7f; 512 * 512 * 3]);
    hide_message(&mut carrier, &"Hello World! ".repeat(64), &mut NoProgress)
        .expect("Cannot hide secret message");
    let plain = PixelBuffer::new(512, 512, vec![0x7e; 512 * 512 * 3]);

    c.bench_function("Image Extraction", |b| {
        b.iter(|| extract(&carrier, &mut NoProgress).expect("Cannot extract secret message"))
    });

    c.bench_function("Image Extraction of a plain carrier with shared progress", |b| {
        let mut progress = SharedProgress::new();
        b.iter(|| extract(&plain, &mut progress).expect("Cannot scan plain carrier"))
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
