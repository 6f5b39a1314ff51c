use criterion::{criterion_group, criterion_main, Criterion};
use hexstego_core::{hide_message, CodecOptions};
use image::{Rgba, RgbaImage};

pub fn image_hiding(c: &mut Criterion) {
    c.bench_function("Image Hiding", |b| {
        let plain_image = RgbaImage::from_pixel(512, 512, Rgba([0x10, 0x21, 0x32, 0xff]));
        let secret_message = "Hello World!";

        b.iter(|| {
            let mut image = plain_image.clone();
            hide_message(&mut image, secret_message, &CodecOptions::default())
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_hiding);
criterion_main!(benches);
