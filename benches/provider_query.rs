use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dog_training_assistant::directory::{query_providers, seed_providers};
use dog_training_assistant::models::{CategoryFilter, ServiceProvider, ServiceType, SortKey};

/// Synthetic directory built by repeating the seed listings with varied distance and rating
fn generate_providers(num_providers: usize) -> Vec<ServiceProvider> {
    let seed = seed_providers();
    (0..num_providers)
        .map(|i| {
            let mut provider = seed[i % seed.len()].clone();
            provider.id = i.to_string();
            provider.name = format!("{} #{}", provider.name, i);
            provider.distance = ((i * 37) % 250) as f64 / 10.0;
            provider.rating = ((i * 13) % 50) as f64 / 10.0;
            provider
        })
        .collect()
}

fn bench_provider_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("provider_query");

    // Sort only
    for size in [100, 1_000, 10_000].iter() {
        let providers = generate_providers(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("sort_by_distance", size), size, |b, _| {
            b.iter(|| {
                query_providers(
                    black_box(&providers),
                    black_box(""),
                    CategoryFilter::All,
                    SortKey::Distance,
                )
            });
        });
    }

    // Substring match across name, description, category and specialties
    for size in [100, 1_000, 10_000].iter() {
        let providers = generate_providers(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("text_search", size), size, |b, _| {
            b.iter(|| {
                query_providers(
                    black_box(&providers),
                    black_box("groom"),
                    CategoryFilter::All,
                    SortKey::Rating,
                )
            });
        });
    }

    // Text and category together
    for size in [100, 1_000, 10_000].iter() {
        let providers = generate_providers(*size);
        let category = CategoryFilter::Only(ServiceType::DogTraining);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("text_and_category", size), size, |b, _| {
            b.iter(|| {
                query_providers(
                    black_box(&providers),
                    black_box("puppy"),
                    black_box(category),
                    SortKey::Rating,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_provider_query);
criterion_main!(benches);
