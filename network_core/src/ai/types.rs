use crate::engine::rules::Move;

/// 探索で得た最善手。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BestMove {
    /// 評価値が確定した時点の残り深さ（同点時の優先順位に使う）。
    depth: u8,
    /// 最善手（合法手が無ければ `Move::Quit`）。
    mv: Move,
    /// 探索側から見た評価値。
    score: i32,
}

impl BestMove {
    /// 残り深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// 最善手を返す。
    #[inline]
    #[must_use]
    pub const fn mv(self) -> Move {
        self.mv
    }

    #[inline]
    pub(crate) const fn new(mv: Move, score: i32, depth: u8) -> Self {
        Self { depth, mv, score }
    }

    /// 評価値を返す。
    #[inline]
    #[must_use]
    pub const fn score(self) -> i32 {
        self.score
    }
}

/// 対局者。自分の盤面を持ち、自分と相手の手を記録する。
pub trait Player {
    /// 次の手を選び、自分の盤面に適用して返す。
    fn choose_move(&mut self) -> Move;

    /// 自分の手として `mv` を適用する。不正なら盤面を変えずに `false`。
    fn force_move(&mut self, mv: Move) -> bool;

    /// 相手の手として `mv` を適用する。不正なら盤面を変えずに `false`。
    fn opponent_move(&mut self, mv: Move) -> bool;
}
