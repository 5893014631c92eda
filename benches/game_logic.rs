use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_rows, find_completed_rows, Board, GameSnapshot, GameState, Progress, Rules};
use blockfall::types::{Cell, Command, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(1.0 / 60.0));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let rules = Rules::default();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut progress = Progress::new(&rules);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(
                        x,
                        y,
                        Cell::Occupied {
                            kind: PieceKind::I,
                            rotation: 0,
                        },
                    );
                }
            }
            let rows = find_completed_rows(&board);
            clear_rows(&rows, &mut board, &mut progress, &rules)
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
            state.drain_events().count()
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut right = true;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let command = if right { Command::MoveRight } else { Command::MoveLeft };
            if !state.apply(black_box(command)) {
                right = !right;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.apply(black_box(Command::RotateClockwise));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
