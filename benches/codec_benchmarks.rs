//! Performance benchmarks for the persistence codec and store write-back

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use tempfile::TempDir;
use tripboard::itinerary::codec::{
    decode_checklist, decode_itinerary, encode_checklist, encode_itinerary,
};
use tripboard::itinerary::{ChecklistProgress, DaySchedule, ItemField, ItineraryStore, Seed};
use tripboard::storage::{FileBackend, MemoryBackend};

/// Seed itinerary with `extra` placeholder stops appended to every day
fn create_itinerary(extra: usize) -> Vec<DaySchedule> {
    let mut store = ItineraryStore::new(MemoryBackend::new());
    store.initialize();
    for day in 0..store.itinerary().len() {
        for _ in 0..extra {
            store.add_item(day).unwrap();
        }
    }
    store.itinerary().to_vec()
}

fn bench_itinerary_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("itinerary_codec");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for extra in [0, 10, 100].iter() {
        let itinerary = create_itinerary(*extra);
        let encoded = encode_itinerary(&itinerary).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", extra), &itinerary, |b, it| {
            b.iter(|| encode_itinerary(black_box(it)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", extra), &encoded, |b, raw| {
            b.iter(|| decode_itinerary(black_box(raw)).unwrap());
        });
    }

    group.finish();
}

fn bench_checklist_codec(c: &mut Criterion) {
    let checklist: ChecklistProgress = Seed::warsaw()
        .itinerary
        .iter()
        .flat_map(|day| day.items.iter().map(|item| (item.id.clone(), true)))
        .collect();
    let encoded = encode_checklist(&checklist).unwrap();

    c.bench_function("checklist_encode", |b| {
        b.iter(|| encode_checklist(black_box(&checklist)).unwrap())
    });
    c.bench_function("checklist_decode", |b| {
        b.iter(|| decode_checklist(black_box(&encoded)).unwrap())
    });
}

fn bench_file_write_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_write_back");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("update_item_field", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().unwrap();
                let backend = FileBackend::open(temp_dir.path().join("bench")).unwrap();
                let mut store = ItineraryStore::new(backend);
                store.initialize();
                (store, temp_dir)
            },
            |(mut store, _temp_dir)| {
                store
                    .update_item_field(1, 2, ItemField::Title, black_box("Neon Museum"))
                    .unwrap();
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_itinerary_codec,
    bench_checklist_codec,
    bench_file_write_back
);
criterion_main!(benches);
