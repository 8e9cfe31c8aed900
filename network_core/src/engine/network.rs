use crate::engine::board::Board;
use crate::engine::types::{Color, Direction, Square};

/// ネットワークとして認められる最小の駒数（始点を含む）。
pub const MIN_NETWORK_LEN: u8 = 6;

/// ネットワーク完成を表す経路数。
pub const NETWORK_PATHS: i32 = 100;

/// ネットワーク未完成時の経路数の上限。
const MAX_PARTIAL_PATHS: i32 = NETWORK_PATHS.wrapping_sub(1);

/// ネットワーク探索の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NetworkScan {
    /// ネットワークが完成しているか。
    found: bool,
    /// 終点ゴールへ到達した経路数（始点ごとの最大値）。完成時は `NETWORK_PATHS`。
    paths: i32,
}

impl NetworkScan {
    /// ネットワークが完成しているかを返す。
    #[inline]
    #[must_use]
    pub const fn found(self) -> bool {
        self.found
    }

    /// 経路数を返す。
    #[inline]
    #[must_use]
    pub const fn paths(self) -> i32 {
        self.paths
    }
}

/// 深さ優先探索の状態。
struct Walker<'board> {
    /// 探索対象の盤面。
    board: &'board Board,
    /// 探索する色。
    color: Color,
    /// 現在の始点から終点ゴールへ到達した回数。
    paths: i32,
}

impl Walker<'_> {
    /// `at` から接続をたどり、長さ `MIN_NETWORK_LEN` 以上で終点ゴールへ届けば `true`。
    ///
    /// - 直前に通った方向へは続けて進まない
    /// - 現在の経路上の駒（`visited`）には戻らない
    /// - 自分の始点ゴール辺へは入らない
    /// - 終点ゴールの駒からは先へ進まない
    fn walk(&mut self, at: Square, depth: u8, arrived: Option<Direction>, visited: u64) -> bool {
        if self.color.is_end_goal(at) {
            self.paths = self.paths.saturating_add(1);
            return depth >= MIN_NETWORK_LEN;
        }

        let board = self.board;
        for (dir, next) in board.linked(at) {
            if arrived == Some(dir)
                || visited & next.bit() != u64::MIN
                || self.color.is_start_goal(next)
            {
                continue;
            }

            if self.walk(next, depth.saturating_add(1), Some(dir), visited | next.bit()) {
                return true;
            }
        }
        false
    }
}

/// `color` の始点ゴール辺の駒（角を除く）を返す。
fn start_squares(color: Color) -> impl Iterator<Item = Square> {
    let last = Square::BOARD_LEN.wrapping_sub(1);
    (1..last).filter_map(move |i| match color {
        Color::Black => Square::from_xy(i, 0),
        Color::White => Square::from_xy(0, i),
    })
}

/// `color` のネットワークを探索する。
///
/// 始点ゴール辺の各駒から深さ優先で接続をたどる。長さ6以上で終点ゴールへ届く経路が
/// あれば完成（経路数 `NETWORK_PATHS`）。無ければ、始点ごとに数えた終点ゴール到達回数の
/// 最大値を返す（`NETWORK_PATHS` 未満に丸める）。
#[must_use]
pub fn scan(board: &Board, color: Color) -> NetworkScan {
    let mut best: i32 = 0;

    for start in start_squares(color) {
        if board.piece_at(start) != Some(color) {
            continue;
        }

        let mut walker = Walker {
            board,
            color,
            paths: 0,
        };
        if walker.walk(start, 1, None, start.bit()) {
            return NetworkScan {
                found: true,
                paths: NETWORK_PATHS,
            };
        }
        best = best.max(walker.paths);
    }

    NetworkScan {
        found: false,
        paths: best.min(MAX_PARTIAL_PATHS),
    }
}

/// `color` のネットワークが完成しているかを返す。
#[inline]
#[must_use]
pub fn has_network(board: &Board, color: Color) -> bool {
    scan(board, color).found()
}
