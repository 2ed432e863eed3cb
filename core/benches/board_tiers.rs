use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

fn tiers() -> [(&'static str, GameConfig); 4] {
    [
        ("beginner", GameConfig::beginner()),
        ("intermediate", GameConfig::intermediate()),
        ("expert", GameConfig::expert()),
        ("dense", GameConfig::new(30, 30, 880).unwrap()),
    ]
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in tiers() {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomMineGenerator::new(seed).generate(config))
            })
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let empty = MineLayout::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    c.bench_function("flood_fill/open_board", |b| {
        b.iter_batched(
            || BoardEngine::new(empty.clone()),
            |mut engine| black_box(engine.reveal((0, 0))),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
