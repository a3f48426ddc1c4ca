//! Benchmarks for sowing and full random games.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kalah_engine::{sow, Board, GameConfig, GameEngine, MoveOutcome, PlayerId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_game(stones: u32, seed: u64) -> u32 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut engine = GameEngine::new(GameConfig::new().with_stones_per_pit(stones));

    while !engine.is_game_over() {
        let legal = engine.legal_moves();
        let pit = legal[rng.gen_range(0..legal.len())];
        match engine.make_move(pit) {
            Ok(report) if report.outcome == MoveOutcome::TurnComplete => {
                let _ = engine.switch_turn();
            }
            _ => {}
        }
    }
    engine.score(PlayerId::A)
}

fn benchmark_sow(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sow");

    for stones in [3u32, 6, 13, 30] {
        let mut start = Board::new(0);
        if let Some(pit) = start.pit_mut(0) {
            let _ = pit.set_stones(i64::from(stones));
        }
        group.bench_with_input(BenchmarkId::new("A1", stones), &start, |b, start| {
            b.iter(|| {
                let mut board = *start;
                black_box(sow(&mut board, PlayerId::A, 0))
            });
        });
    }
    group.finish();
}

fn benchmark_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("Playout");

    for stones in [3u32, 4, 6] {
        group.bench_with_input(BenchmarkId::new("stones", stones), &stones, |b, &stones| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(random_game(black_box(stones), seed))
            });
        });
    }
    group.finish();
}

fn benchmark_undo_cycle(c: &mut Criterion) {
    c.bench_function("move_undo_cycle", |b| {
        let mut engine = GameEngine::new(GameConfig::new().with_stones_per_pit(4).with_max_undos(u32::MAX));
        b.iter(|| {
            let _ = engine.make_move(black_box(0));
            let _ = engine.undo();
        });
    });
}

criterion_group!(benches, benchmark_sow, benchmark_playout, benchmark_undo_cycle);
criterion_main!(benches);
