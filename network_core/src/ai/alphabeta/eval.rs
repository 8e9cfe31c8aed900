use crate::engine::board::Board;
use crate::engine::network::{self, NETWORK_PATHS};
use crate::engine::types::Color;

use super::WIN_SCORE;

/// 自分の経路数の重み。
const WEIGHT_OWN_PATHS: i32 = 4;

/// 相手の経路数の重み。
const WEIGHT_OPPONENT_PATHS: i32 = 2;

/// `color` 視点の評価値（-100..=100）。
///
/// ±100 は決着（ネットワーク完成）を表す。未決着の局面は、接続数と経路数の
/// 組み合わせを ±99 に収める。
#[must_use]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let own = network::scan(board, color);
    if own.paths() == NETWORK_PATHS {
        return WIN_SCORE;
    }

    let opponent = network::scan(board, color.opponent());
    if opponent.paths() == NETWORK_PATHS {
        return WIN_SCORE.wrapping_neg();
    }

    blend(
        count_i32(board.neighbor_count(color)),
        own.paths(),
        opponent.paths(),
        count_i32(board.neighbor_count(color.opponent())),
    )
}

/// 未決着の局面の評価値。接続数と経路数を重み付けし、±99 に収める。
fn blend(own_neighbors: i32, own_paths: i32, opponent_paths: i32, opponent_neighbors: i32) -> i32 {
    let mut score: i32 = own_neighbors.wrapping_div(2);
    score = score.wrapping_add(own_paths.wrapping_mul(WEIGHT_OWN_PATHS));
    score = score.wrapping_sub(opponent_paths.wrapping_mul(WEIGHT_OPPONENT_PATHS));
    score = score.wrapping_sub(opponent_neighbors);

    let bound = WIN_SCORE.wrapping_sub(1);
    score.clamp(bound.wrapping_neg(), bound)
}

/// `u32` を `i32` として返す。
fn count_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
