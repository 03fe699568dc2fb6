use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shell_roulette::core::{ActionKind, GameRng};
use shell_roulette::games::RouletteGame;
use shell_roulette::nn::{ScriptedPolicy, UniformPolicy};
use shell_roulette::rules::RulesEngine;
use shell_roulette::training::{SelfPlayConfig, SelfPlayWorker};

fn bench_step(c: &mut Criterion) {
    let game = RouletteGame::default();

    c.bench_function("reset", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(game.reset(GameRng::new(seed)))
        })
    });

    c.bench_function("step_fire_opponent", |b| {
        let mut state = game.reset(GameRng::new(1));
        let mut seed = 1u64;
        b.iter(|| {
            if game.is_terminal(&state).is_some() {
                seed = seed.wrapping_add(1);
                state = game.reset(GameRng::new(seed));
            }
            black_box(game.step(&mut state, ActionKind::FireOpponent))
        })
    });

    c.bench_function("normalize_perspective", |b| {
        let obs = game.reset(GameRng::new(3)).observation();
        b.iter(|| black_box(obs.normalize_perspective()))
    });
}

fn bench_match(c: &mut Criterion) {
    let worker = SelfPlayWorker::new(RouletteGame::default(), SelfPlayConfig::default());

    c.bench_function("scripted_vs_uniform_match", |b| {
        let mut red = ScriptedPolicy::new(4, 0);
        let mut blue = UniformPolicy::new(1);
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(worker.play_match(&mut red, &mut blue, seed))
        })
    });
}

criterion_group!(benches, bench_step, bench_match);
criterion_main!(benches);
