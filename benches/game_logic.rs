use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{evaluate_board, Board, GameState};
use tui_tictactoe::term::{FrameBuffer, GameView, Viewport};

fn bench_evaluate_board(c: &mut Criterion) {
    let won = Board::parse("XO./XXO/X.X").unwrap();
    let open = Board::parse("XO./.X./..O").unwrap();

    c.bench_function("evaluate_won_board", |b| {
        b.iter(|| evaluate_board(black_box(&won)))
    });
    c.bench_function("evaluate_open_board", |b| {
        b.iter(|| evaluate_board(black_box(&open)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_drawn_game", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
                state.apply_move(black_box(cell));
            }
            state
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new();
    for cell in [0, 1, 2, 4, 3, 5, 7] {
        state.apply_move(cell);
    }

    c.bench_function("snapshot", |b| b.iter(|| black_box(&state).snapshot()));
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new();
    for cell in [0, 1, 3, 4, 6] {
        state.apply_move(cell);
    }
    let snap = state.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Some(4), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_evaluate_board,
    bench_full_game,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
