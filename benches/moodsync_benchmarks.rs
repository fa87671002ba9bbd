//! Performance benchmarks for the MoodSync core pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use moodsync::link;
use moodsync::query::{self, TrackQuery};
use moodsync::seeder;
use moodsync::track::Track;

fn large_catalog() -> Vec<Track> {
    let mut tracks = seeder::base_tracks();
    for language in ["English", "Telugu", "Hindi", "Tamil", "Malayalam"] {
        tracks.extend(seeder::generate(language, 400));
    }
    tracks
}

fn bench_filter(c: &mut Criterion) {
    let tracks = large_catalog();

    let mut group = c.benchmark_group("filter");
    for mood in ["Happy", "Calm"] {
        group.bench_with_input(BenchmarkId::from_parameter(mood), mood, |b, mood| {
            let query = TrackQuery {
                mood: Some(mood.to_string()),
                ..Default::default()
            };
            b.iter(|| query::filter(black_box(&tracks), black_box(&query)));
        });
    }
    group.finish();

    c.bench_function("filter_all_criteria", |b| {
        let query = TrackQuery {
            mood: Some("Energetic".to_string()),
            language: Some("Telugu".to_string()),
            text: Some("track".to_string()),
            energy_min: Some(2),
            energy_max: Some(5),
        };
        b.iter(|| query::filter(black_box(&tracks), black_box(&query)));
    });
}

fn bench_seeder(c: &mut Criterion) {
    c.bench_function("generate_20", |b| {
        b.iter(|| seeder::generate(black_box("Telugu"), black_box(20)));
    });
}

fn bench_sampling(c: &mut Criterion) {
    let tracks = large_catalog();
    c.bench_function("surprise_sample", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| query::surprise_sample(black_box(&tracks), query::SURPRISE_SIZE, &mut rng));
    });
}

fn bench_link(c: &mut Criterion) {
    c.bench_function("fallback_link", |b| {
        b.iter(|| {
            link::fallback_link(
                black_box("On Top of the World"),
                black_box("Imagine Dragons"),
                black_box("English"),
                black_box("Happy"),
            )
        });
    });
}

criterion_group!(benches, bench_filter, bench_seeder, bench_sampling, bench_link);
criterion_main!(benches);
