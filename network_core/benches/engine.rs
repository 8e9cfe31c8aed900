//! `network_core::engine` の性能計測（駒の追加/除去、合法性判定、ネットワーク探索）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use network_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 白のネットワークが完成している盤面（黒駒も散らしてある）を返す。
fn network_board() -> engine::Board {
    let pieces = [
        (0, 1, engine::Color::White),
        (2, 1, engine::Color::White),
        (4, 3, engine::Color::White),
        (4, 5, engine::Color::White),
        (6, 5, engine::Color::White),
        (7, 4, engine::Color::White),
        (1, 6, engine::Color::Black),
        (3, 6, engine::Color::Black),
        (2, 3, engine::Color::Black),
        (5, 0, engine::Color::Black),
        (6, 2, engine::Color::Black),
    ];

    let mut board = engine::Board::new();
    for (x, y, color) in pieces {
        if let Some(square) = engine::Square::from_xy(x, y) {
            let _placed = engine::rules::enforce_move(&mut board, engine::Move::add(square), color);
        }
    }
    board
}

/// `Board::add` と `Board::remove` の往復を計測する。
fn bench_add_remove(criterion: &mut Criterion) {
    let Some(square) = engine::Square::from_xy(3, 3) else {
        return;
    };

    criterion.bench_function("engine/add_remove", |bench| {
        bench.iter_batched(
            network_board,
            |mut board| {
                let added = board.add(square, engine::Color::Black);
                let removed = board.remove(square, engine::Color::Black);
                black_box((added, removed, board))
            },
            BatchSize::SmallInput,
        );
    });
}

/// `rules::candidate_moves` を計測する。
fn bench_candidate_moves(criterion: &mut Criterion) {
    let board = network_board();
    criterion.bench_function("engine/candidate_moves", |bench| {
        bench.iter(|| black_box(engine::rules::candidate_moves(&board, engine::Color::Black)));
    });
}

/// `network::scan` を計測する。
fn bench_scan(criterion: &mut Criterion) {
    let board = network_board();
    criterion.bench_function("engine/network_scan", |bench| {
        bench.iter(|| black_box(engine::network::scan(&board, engine::Color::White)));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_add_remove(&mut criterion);
    bench_candidate_moves(&mut criterion);
    bench_scan(&mut criterion);

    criterion.final_summary();
}
