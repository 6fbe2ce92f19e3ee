use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, RgbImage};
use pixelveil_core::{hide_message, unveil_message};

fn prepare_carrier() -> RgbImage {
    ImageBuffer::from_fn(640, 480, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

pub fn conceal_benchmark(c: &mut Criterion) {
    c.bench_function("Conceal a short message", |b| {
        let mut carrier = prepare_carrier();
        let message = "The quick brown fox jumps over the lazy dog.";

        b.iter(|| {
            hide_message(&mut carrier, message).expect("Cannot hide message");
        })
    });
}

pub fn reveal_benchmark(c: &mut Criterion) {
    c.bench_function("Reveal a short message", |b| {
        let mut carrier = prepare_carrier();
        hide_message(&mut carrier, "The quick brown fox jumps over the lazy dog.")
            .expect("Cannot hide message");

        b.iter(|| unveil_message(&carrier).expect("Cannot unveil message"))
    });
}

criterion_group!(benches, conceal_benchmark, reveal_benchmark);
criterion_main!(benches);
