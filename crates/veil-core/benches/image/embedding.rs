use criterion::{criterion_group, criterion_main, Criterion};
use veil_core::{embed, serialize, NoProgress, PixelBuffer};

pub fn image_embedding(c: &mut Criterion) {
    c.bench_function("Image Embedding", |b| {
        let mut carrier = PixelBuffer::new(512, 512, vec![0x7f; 512 * 512 * 3]);
        let bits = serialize(&"Hello World! ".repeat(64)).expect("Message is plain ascii");

        b.iter(|| {
            embed(&mut carrier, &bits, &mut NoProgress).expect("Cannot embed secret message");
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
