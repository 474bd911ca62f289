//! Full-match simulation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dice_duel::combat::{EventBuffer, MatchMode, MatchState, NullNotifier, RollOrigin};
use dice_duel::core::{DiceRng, DuelConfig, Roster};

fn stock_match() -> MatchState {
    MatchState::from_config(&DuelConfig::default(), &Roster::builtin(), MatchMode::Local)
        .expect("stock config is valid")
}

/// Roll until someone wins; returns the number of events emitted.
fn play_out(state: &mut MatchState, rng: &mut DiceRng) -> usize {
    let mut emitted = 0;
    while !state.is_game_over() {
        let mut events = EventBuffer::new();
        state
            .submit_roll(rng.roll(), RollOrigin::Local, &mut events)
            .expect("local match accepts every roll");
        emitted += events.len();
    }
    emitted
}

fn bench_full_match(c: &mut Criterion) {
    let template = stock_match();

    c.bench_function("full_match_stock", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut state = template.clone();
            let mut rng = DiceRng::new(seed);
            black_box(play_out(&mut state, &mut rng))
        })
    });
}

fn bench_single_exchange(c: &mut Criterion) {
    let template = stock_match();
    let mut rng = DiceRng::new(42);

    c.bench_function("single_exchange", |b| {
        b.iter(|| {
            let mut state = template.clone();
            state.submit_roll(rng.roll(), RollOrigin::Local, &mut NullNotifier).ok();
            black_box(state.submit_roll(rng.roll(), RollOrigin::Local, &mut NullNotifier).ok())
        })
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let mut state = stock_match();
    let mut rng = DiceRng::new(7);
    for _ in 0..40 {
        if state.is_game_over() {
            break;
        }
        state.submit_roll(rng.roll(), RollOrigin::Local, &mut NullNotifier).ok();
    }

    c.bench_function("state_clone_with_history", |b| b.iter(|| black_box(state.clone())));
}

criterion_group!(benches, bench_full_match, bench_single_exchange, bench_state_clone);
criterion_main!(benches);
