use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{BotInput, GameSession, GameState, Player, calculate_move};

fn play_full_game(seed: u64) {
    let mut session = GameSession::with_seed(true, Some(seed));
    let mut human = SessionRng::new(seed.wrapping_add(1));

    while !session.status().is_over() {
        if session.is_computer_turn() {
            let _ = session.computer_move();
        } else {
            let empty = session.state().board().empty_indices();
            let index = empty[human.random_range(0..empty.len())];
            let _ = session.apply_move(index);
        }
    }
}

fn bench_bot(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot");

    group.bench_function("reply_on_empty_board", |b| {
        let mut rng = SessionRng::new(1);
        b.iter(|| {
            let input = BotInput::from_game_state(&GameState::new());
            black_box(calculate_move(input, &mut rng))
        })
    });

    group.bench_function("reply_mid_game", |b| {
        let mut state = GameState::new();
        for index in [0, 4, 8] {
            let _ = state.apply_move(index);
        }
        let mut rng = SessionRng::new(2);
        b.iter(|| {
            let input = BotInput {
                board: state.board().clone(),
                current_player: Player::B,
            };
            black_box(calculate_move(input, &mut rng))
        })
    });

    group.bench_function("full_game_vs_random", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            play_full_game(black_box(seed))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_bot);
criterion_main!(benches);
