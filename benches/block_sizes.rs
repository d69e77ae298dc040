use criterion::{black_box, criterion_group, criterion_main, Criterion};
use divchain::{
    blocks::BlockSummary, problems::divisible::DivisibleChain, ChainEngine, ChainProblem,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(1..=50_000)).collect()
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let input = random_values(&mut rng, 3_000);

    let mut group = c.benchmark_group("chain_fill_block_size");
    for block in [1usize, 8, 55, 512, 3_000] {
        let input = input.clone();
        group.bench_function(format!("block_{block}"), move |b| {
            b.iter(|| {
                let engine = ChainEngine::with_block_size(DivisibleChain::new(&input), block);
                black_box(engine.run());
            });
        });
    }
    group.finish();
}

fn bench_summary_merge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let input = random_values(&mut rng, 4_096);
    let engine = ChainEngine::with_block_size(DivisibleChain::new(&input), 64);
    let summaries = engine.block_summaries();
    let layers = engine.problem().num_layers();

    let mut group = c.benchmark_group("summary_ops");
    group.bench_function("fold_merge", |b| {
        b.iter(|| {
            let merged = summaries
                .iter()
                .skip(1)
                .fold(summaries[0].clone(), |acc, next| acc.merge(next));
            black_box(merged);
        });
    });
    let tables = engine.tables();
    group.bench_function("from_lengths", |b| {
        b.iter(|| black_box(BlockSummary::from_lengths(0, layers, tables.lengths())));
    });
    group.finish();
}

criterion_group!(benches, bench_block_sizes, bench_summary_merge);
criterion_main!(benches);
