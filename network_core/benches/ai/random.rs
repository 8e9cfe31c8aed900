//! `network_core::ai::random` の性能計測（1手選択）。

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

/// ランダム同士で `plies` 手進めたときの黒番プレイヤーを返す（白番から指す）。
///
/// 途中で手が無くなるか相手に拒否された場合はその時点で止める。
fn black_after_plies(plies: u16) -> ai::random::Agent {
    let mut black_agent = ai::random::Agent::new(engine::Color::Black, u64::MIN);
    let mut white_agent = ai::random::Agent::new(engine::Color::White, u64::MIN.wrapping_add(1));

    for turn in u16::MIN..plies {
        let (mv, accepted) = if turn % 2 == 0 {
            let mv = white_agent.choose_move();
            (mv, black_agent.opponent_move(mv))
        } else {
            let mv = black_agent.choose_move();
            (mv, white_agent.opponent_move(mv))
        };
        if mv == ai::Move::Quit || !accepted {
            break;
        }
    }

    black_agent
}

/// `random::Agent::choose_move` を計測する。
fn bench_choose_move(criterion: &mut Criterion) {
    let samples = [0, 9, 25];
    let mut group = criterion.benchmark_group("ai/random/choose_move");

    for plies in samples {
        let bench_id = BenchmarkId::new("plies", plies);
        group.bench_with_input(bench_id, &plies, |bench, &input| {
            bench.iter_batched(
                || black_after_plies(input),
                |mut agent| black_box(agent.choose_move()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_choose_move(&mut criterion);
    criterion.final_summary();
}
