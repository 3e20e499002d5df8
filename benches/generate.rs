use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use secure_pwgen::{Config, Generator, Strength};

fn bench_generate(c: &mut Criterion) {
    let mut os = Generator::new();
    c.bench_function("generate_strong_os_rng", |b| {
        b.iter(|| os.generate_strength(black_box(Strength::Strong)).unwrap())
    });

    let mut seeded = Generator::with_rng(Config::default(), ChaCha20Rng::from_seed([1u8; 32]));
    c.bench_function("generate_strong_chacha", |b| {
        b.iter(|| seeded.generate_strength(black_box(Strength::Strong)).unwrap())
    });

    c.bench_function("generate_many_100", |b| {
        b.iter(|| seeded.generate_many_with_length(100, black_box(16)).unwrap())
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
