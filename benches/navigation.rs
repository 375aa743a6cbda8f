// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation and image handling.
//!
//! Measures the performance of:
//! - Index navigation and thumbnail window computation
//! - Zoom transforms (button steps, wheel and pinch around an anchor)
//! - CDN URL building and LRU cache churn while browsing
//! - Decoding a downloaded photo into RGBA

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Size, Vector};
use iced_lightbox::application::query::{thumbnail_window, NavigationState};
use iced_lightbox::domain::gallery::Collection;
use iced_lightbox::media::{decode_image, CdnConfig, ImageCache, ImageData, Rendition};
use iced_lightbox::ui::state::ZoomState;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

const COLLECTION_SIZE: usize = 500;

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("step_through_collection", |b| {
        b.iter(|| {
            let mut navigation = NavigationState::new(0, COLLECTION_SIZE);
            while navigation.next() {}
            while navigation.previous() {}
            black_box(navigation.index());
        });
    });

    group.bench_function("jump_and_window", |b| {
        let mut navigation = NavigationState::new(250, COLLECTION_SIZE);
        b.iter(|| {
            navigation.jump_to(black_box(490));
            black_box(navigation.thumbnail_window());
            navigation.jump_to(black_box(7));
            black_box(navigation.thumbnail_window());
        });
    });

    group.bench_function("thumbnail_window", |b| {
        b.iter(|| {
            for current in 0..COLLECTION_SIZE {
                black_box(thumbnail_window(black_box(current), COLLECTION_SIZE));
            }
        });
    });

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom");

    group.bench_function("button_steps", |b| {
        b.iter(|| {
            let mut zoom = ZoomState::default();
            zoom.set_base_size(Size::new(1280.0, 853.0));
            while zoom.zoom_in() {}
            black_box(zoom.percent());
            while zoom.zoom_out() {}
        });
    });

    group.bench_function("wheel_and_pinch_anchored", |b| {
        b.iter(|| {
            let mut zoom = ZoomState::default();
            zoom.set_base_size(Size::new(1280.0, 853.0));
            let anchor = Vector::new(220.0, -140.0);
            for _ in 0..10 {
                zoom.wheel(1.0, anchor);
            }
            zoom.pinch(0.8, anchor);
            zoom.pan_to(Vector::new(5000.0, -5000.0));
            black_box(zoom.offset());
        });
    });

    group.finish();
}

fn bench_media(c: &mut Criterion) {
    let mut group = c.benchmark_group("media");

    let collection = Collection::from_pairs(
        (0..COLLECTION_SIZE).map(|i| (format!("conf/photo-{i}"), "jpg")),
    )
    .expect("valid collection");
    let cdn = CdnConfig::default();

    group.bench_function("build_urls", |b| {
        b.iter(|| {
            for record in collection.iter() {
                black_box(cdn.url(record, Rendition::Windowed));
                black_box(cdn.url(record, Rendition::Thumbnail));
            }
        });
    });

    group.bench_function("cache_churn", |b| {
        let pixel = ImageData::from_rgba(1, 1, vec![0; 4]);
        b.iter(|| {
            let mut cache = ImageCache::new(64);
            for record in collection.iter() {
                let url = cdn.url(record, Rendition::Thumbnail);
                if cache.mark_pending(&url) {
                    cache.insert(url, pixel.clone());
                }
            }
            black_box(cache.len());
        });
    });

    let mut png = Vec::new();
    RgbaImage::from_pixel(640, 427, Rgba([120, 80, 200, 255]))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("encode png");

    group.bench_function("decode_png", |b| {
        b.iter(|| {
            black_box(decode_image(black_box(&png)).expect("decodable"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_zoom, bench_media);
criterion_main!(benches);
