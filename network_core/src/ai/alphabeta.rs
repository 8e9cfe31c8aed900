use crate::ai::types::{BestMove, Player};
use crate::engine::board::Board;
use crate::engine::rules::{Move, enforce_move};
use crate::engine::types::{Color, Square};

mod eval;
mod limits;
mod search;

pub use eval::evaluate;
pub use limits::DEFAULT_DEPTH;

use limits::SearchLimits;
use search::{SearchContext, search_root};

/// 決着（ネットワーク完成）を表す評価値。
pub const WIN_SCORE: i32 = 100;

/// 探索窓の初期値（評価値の範囲より十分大きい）。
const INF: i32 = 500;

/// 定跡で打つ手数（盤上の駒数がこれ未満なら探索しない）。
const OPENING_ROUNDS: u8 = 2;

/// アルファベータ探索で手を選ぶプレイヤー。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// このプレイヤーが管理する盤面。
    board: Board,
    /// 自分の色。
    color: Color,
    /// 探索の制限。
    limits: SearchLimits,
}

impl Agent {
    /// 盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 自分の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.limits.max_depth()
    }

    /// 既定の探索深さ（`DEFAULT_DEPTH`）で初期化する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_DEPTH)
    }

    /// 現局面から最善手を探索する（盤面は変更しない）。
    #[inline]
    pub fn search(&mut self) -> BestMove {
        let mut ctx = SearchContext::new(self.color);
        let best = search_root(&mut self.board, self.limits, &mut ctx);

        let stats = ctx.stats();
        tracing::debug!(
            color = ?self.color,
            mv = ?best.mv(),
            score = best.score(),
            depth = best.depth(),
            nodes = stats.nodes(),
            leaves = stats.leaves(),
            cutoffs = stats.cutoffs(),
            "search finished"
        );
        best
    }

    /// `depth` を指定して初期化する（0は1として扱う）。
    #[inline]
    #[must_use]
    pub const fn with_depth(color: Color, depth: u8) -> Self {
        Self {
            board: Board::new(),
            color,
            limits: SearchLimits::new(depth),
        }
    }
}

impl Player for Agent {
    #[inline]
    fn choose_move(&mut self) -> Move {
        if self.board.rounds() < OPENING_ROUNDS {
            let book = opening_move(self.color);
            if enforce_move(&mut self.board, book, self.color).is_ok() {
                tracing::debug!(color = ?self.color, mv = ?book, "opening book");
                return book;
            }
        }

        let mv = self.search().mv();
        if mv == Move::Quit {
            tracing::warn!(color = ?self.color, "no legal move");
            return Move::Quit;
        }

        match enforce_move(&mut self.board, mv, self.color) {
            Ok(()) => mv,
            Err(err) => {
                tracing::warn!(color = ?self.color, ?mv, ?err, "searched move was rejected");
                Move::Quit
            }
        }
    }

    #[inline]
    fn force_move(&mut self, mv: Move) -> bool {
        enforce_move(&mut self.board, mv, self.color).is_ok()
    }

    #[inline]
    fn opponent_move(&mut self, mv: Move) -> bool {
        enforce_move(&mut self.board, mv, self.color.opponent()).is_ok()
    }
}

/// 定跡の初手（白は左ゴール列の中央、黒は下ゴール行の中央）。
fn opening_move(color: Color) -> Move {
    let square = match color {
        Color::Black => Square::from_xy(3, 0),
        Color::White => Square::from_xy(0, 3),
    };
    square.map_or(Move::Quit, Move::add)
}
