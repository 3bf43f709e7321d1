use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_pairs::{GameConfig, GameState, SequentialSymbols, TimerQueue};

fn bench_full_game(c: &mut Criterion) {
    let base = GameState::initialize(GameConfig::new(8).with_seed(42), &mut SequentialSymbols).unwrap();

    c.bench_function("solve_16_cards", |b| {
        b.iter(|| {
            let mut state = base.clone();
            let mut timers = TimerQueue::new();
            for i in 0..state.len() {
                if state.cards()[i].matched {
                    continue;
                }
                let partner = state.partner_of(i).unwrap();
                state.select_card(black_box(i), &mut timers).unwrap();
                state.select_card(black_box(partner), &mut timers).unwrap();
            }
            black_box(state.is_complete())
        })
    });
}

fn bench_mismatch_cycle(c: &mut Criterion) {
    let base = GameState::initialize(GameConfig::new(8).with_seed(42), &mut SequentialSymbols).unwrap();
    let first = 0;
    let second = (1..base.len())
        .find(|&i| base.cards()[i].symbol != base.cards()[first].symbol)
        .unwrap();

    c.bench_function("mismatch_and_flip_back", |b| {
        let mut state = base.clone();
        let mut timers = TimerQueue::new();
        b.iter(|| {
            state.select_card(first, &mut timers).unwrap();
            state.select_card(second, &mut timers).unwrap();
            black_box(timers.run_due(&mut state, Duration::from_secs(1)))
        })
    });
}

criterion_group!(benches, bench_full_game, bench_mismatch_cycle);
criterion_main!(benches);
