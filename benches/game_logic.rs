use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mastermind::core::{evaluate_guess, generate_key, GameSession, Guess, SecretKey};
use mastermind::types::Difficulty;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate_key(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let difficulty = Difficulty::new(10).unwrap();

    c.bench_function("generate_key_10", |b| {
        b.iter(|| generate_key(black_box(difficulty), &mut rng))
    });
}

fn bench_evaluate_guess(c: &mut Criterion) {
    let secret: SecretKey = "0123456789".parse().unwrap();
    let guess = Guess::parse("9876543210", secret.difficulty()).unwrap();

    c.bench_function("evaluate_guess_10", |b| {
        b.iter(|| evaluate_guess(black_box(&guess), black_box(&secret)))
    });
}

fn bench_submit(c: &mut Criterion) {
    c.bench_function("submit_guess", |b| {
        b.iter(|| {
            let mut session = GameSession::with_secret("1234".parse().unwrap());
            session.submit(black_box("1243"))
        })
    });
}

criterion_group!(benches, bench_generate_key, bench_evaluate_guess, bench_submit);
criterion_main!(benches);
