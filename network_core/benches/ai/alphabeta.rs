//! `network_core::ai::alphabeta` の性能計測（探索と評価）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use network_core::ai::types::Player as _;
use network_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 白番のランダムな応手と `plies` 手進めた黒番の探索プレイヤーを返す。
fn black_after_plies(depth: u8, plies: u16) -> ai::alphabeta::Agent {
    let mut black_agent = ai::alphabeta::Agent::with_depth(engine::Color::Black, depth);
    let mut white_agent = ai::random::Agent::new(engine::Color::White, 7);
    let mut black_random = ai::random::Agent::new(engine::Color::Black, 11);

    for turn in u16::MIN..plies {
        let mv = if turn % 2 == 0 {
            white_agent.choose_move()
        } else {
            let mv = black_random.choose_move();
            if !black_agent.force_move(mv) || !white_agent.opponent_move(mv) {
                break;
            }
            continue;
        };
        if mv == ai::Move::Quit || !black_agent.opponent_move(mv) || !black_random.opponent_move(mv) {
            break;
        }
    }

    black_agent
}

/// `alphabeta::Agent::search` を深さごとに計測する。
fn bench_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ai/alphabeta/search");
    group.sample_size(10);

    for depth in [1_u8, 2] {
        let bench_id = BenchmarkId::new("depth", depth);
        group.bench_with_input(bench_id, &depth, |bench, &input| {
            bench.iter_batched(
                || black_after_plies(input, 9),
                |mut agent| black_box(agent.search()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// `alphabeta::evaluate` を計測する。
fn bench_evaluate(criterion: &mut Criterion) {
    let agent = black_after_plies(1, 15);
    criterion.bench_function("ai/alphabeta/evaluate", |bench| {
        bench.iter(|| black_box(ai::alphabeta::evaluate(agent.board(), engine::Color::Black)));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_search(&mut criterion);
    bench_evaluate(&mut criterion);

    criterion.final_summary();
}
