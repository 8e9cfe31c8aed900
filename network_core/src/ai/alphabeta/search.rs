use crate::ai::types::BestMove;
use crate::engine::board::Board;
use crate::engine::rules::{Move, ScopedMove, candidate_moves};
use crate::engine::types::Color;

use super::eval::evaluate;
use super::limits::{SearchLimits, SearchStats};
use super::{INF, WIN_SCORE};

/// 探索実行に必要な共有コンテキスト。
pub(super) struct SearchContext {
    /// 評価の視点（最大化する側）。
    me: Color,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索コンテキストを生成する。
    pub(super) fn new(me: Color) -> Self {
        Self {
            me,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// ルート探索。`me` の手番から `limits` の深さまで読む。
///
/// 盤面は適用/取り消しを繰り返して使い、戻るときには元の状態に戻っている。
pub(super) fn search_root(
    board: &mut Board,
    limits: SearchLimits,
    ctx: &mut SearchContext,
) -> BestMove {
    let me = ctx.me;
    expand(board, me, -INF, INF, limits.max_depth(), ctx)
}

/// ミニマックス（αβ付き）。評価は常に `ctx.me` 視点。
///
/// 残り深さ0、または決着済みの局面では評価値をその時点の残り深さ付きで返す。
fn minimax(
    board: &mut Board,
    mover: Color,
    alpha: i32,
    beta: i32,
    depth: u8,
    ctx: &mut SearchContext,
) -> BestMove {
    ctx.stats.inc_nodes();

    let score = evaluate(board, ctx.me);
    if depth == u8::MIN || score == WIN_SCORE || score == WIN_SCORE.wrapping_neg() {
        ctx.stats.inc_leaves();
        return BestMove::new(Move::Quit, score, depth);
    }

    expand(board, mover, alpha, beta, depth, ctx)
}

/// `mover` の候補手をすべて試し、最善の応手を返す。
///
/// 同点なら、最大化側は残り深さの大きい手（早い勝ち）、最小化側は小さい手を選ぶ。
/// 合法手が無ければ静的評価を返す。
fn expand(
    board: &mut Board,
    mover: Color,
    mut alpha: i32,
    mut beta: i32,
    depth: u8,
    ctx: &mut SearchContext,
) -> BestMove {
    let moves = candidate_moves(board, mover);
    if moves.is_empty() {
        ctx.stats.inc_leaves();
        return BestMove::new(Move::Quit, evaluate(board, ctx.me), depth);
    }

    let maximizing = mover == ctx.me;
    let initial = if maximizing { alpha } else { beta };
    let mut best = BestMove::new(Move::Quit, initial, u8::MIN);
    let next_depth = depth.saturating_sub(1);

    for mv in moves {
        let reply = {
            let Ok(mut applied) = ScopedMove::apply(board, mv, mover) else {
                continue;
            };
            minimax(&mut applied, mover.opponent(), alpha, beta, next_depth, ctx)
        };

        if maximizing {
            if improves_max(reply, best) {
                best = BestMove::new(mv, reply.score(), reply.depth());
                alpha = reply.score();
            }
        } else if improves_min(reply, best) {
            best = BestMove::new(mv, reply.score(), reply.depth());
            beta = reply.score();
        }

        if alpha >= beta {
            ctx.stats.inc_cutoffs();
            break;
        }
    }

    best
}

/// 最大化側として `reply` が `best` より良いか。
const fn improves_max(reply: BestMove, best: BestMove) -> bool {
    reply.score() > best.score() || (reply.score() == best.score() && reply.depth() > best.depth())
}

/// 最小化側として `reply` が `best` より良いか。
const fn improves_min(reply: BestMove, best: BestMove) -> bool {
    reply.score() < best.score() || (reply.score() == best.score() && reply.depth() < best.depth())
}
