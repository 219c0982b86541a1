use bv_core::profile::{BrandProfile, ProfileStore};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

fn bench_store_lookup(c: &mut Criterion) {
    let store = ProfileStore::new();
    for i in 0..500 {
        store.insert(BrandProfile::new(format!("brand-{i}"), "Friendly, warm and direct. ".repeat(40)));
    }
    let mut rng = rand::thread_rng();

    c.bench_function("store_get_random_500", |b| {
        b.iter(|| {
            let name = format!("brand-{}", rng.gen_range(0..500));
            black_box(store.get(black_box(&name)))
        })
    });

    c.bench_function("store_summaries_500", |b| b.iter(|| black_box(store.summaries())));
}

fn bench_store_reload(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..100 {
        std::fs::write(dir.path().join(format!("brand-{i}.txt")), "Professional and concise.").unwrap();
    }
    let store = ProfileStore::with_dir(dir.path());
    c.bench_function("store_reload_100_files", |b| b.iter(|| black_box(store.reload())));
}

criterion_group!(benches, bench_store_lookup, bench_store_reload);
criterion_main!(benches);
