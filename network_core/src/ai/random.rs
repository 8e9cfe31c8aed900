use crate::ai::types::Player;
use crate::engine::board::Board;
use crate::engine::rules::{Move, candidate_moves, enforce_move};
use crate::engine::types::Color;

/// 64-bit 線形合同法 (LCG) の簡易 RNG。`seed` で決定的に再現できる。
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// 内部状態を `seed` から初期化する（0 でも動くように攪拌する）。
    #[inline]
    const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 合法手からランダムに1手を選ぶプレイヤー。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// このプレイヤーが管理する盤面。
    board: Board,
    /// 自分の色。
    color: Color,
    /// 乱数生成器。
    rng: Lcg64,
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

    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color, seed: u64) -> Self {
        Self {
            board: Board::new(),
            color,
            rng: Lcg64::new(seed),
        }
    }
}

impl Player for Agent {
    #[inline]
    fn choose_move(&mut self) -> Move {
        let moves = candidate_moves(&self.board, self.color);
        let Some(&mv) = moves.get(choose_index(moves.len(), self.rng.next_u32())) else {
            tracing::warn!(color = ?self.color, "no legal move");
            return Move::Quit;
        };

        match enforce_move(&mut self.board, mv, self.color) {
            Ok(()) => mv,
            Err(err) => {
                tracing::warn!(color = ?self.color, ?mv, ?err, "random move was rejected");
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

/// `0..len` から `random` に基づき添字を1つ選ぶ（`len` が 0 なら 0）。
fn choose_index(len: usize, random: u32) -> usize {
    let len_u64 = u64::try_from(len).unwrap_or(u64::MAX);
    let product = u64::from(random).wrapping_mul(len_u64);
    usize::try_from(product.wrapping_shr(32)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::{Agent, choose_index};
    use crate::ai::types::Player as _;
    use crate::engine::board::Board;
    use crate::engine::rules::{Move, candidate_moves};
    use crate::engine::types::{Color, Square};

    #[test]
    fn index_stays_in_range() {
        for random in [u32::MIN, 1, u32::MAX / 2, u32::MAX] {
            assert!(choose_index(48, random) < 48);
        }
        assert_eq!(choose_index(48, u32::MIN), 0);
        assert_eq!(choose_index(48, u32::MAX), 47);
    }

    #[test]
    fn same_seed_plays_the_same_moves() {
        let mut first = Agent::new(Color::White, 7);
        let mut second = Agent::new(Color::White, 7);

        for _ in 0..5 {
            let mv = first.choose_move();
            assert_eq!(second.choose_move(), mv);
            assert_ne!(mv, Move::Quit);
        }
        assert_eq!(first.board(), second.board());
        assert_eq!(first.board().rounds(), 5);
    }

    #[test]
    fn chosen_move_is_a_candidate() {
        let mut agent = Agent::new(Color::Black, 42);
        let before = candidate_moves(agent.board(), Color::Black);
        let mv = agent.choose_move();
        assert!(before.contains(&mv));
    }

    #[test]
    fn rejects_illegal_opponent_move() {
        let mut agent = Agent::new(Color::Black, 1);
        let corner = Square::from_xy(0, 0).unwrap_or_else(|| panic!("corner"));
        assert!(!agent.opponent_move(Move::add(corner)));
        assert_eq!(agent.board(), &Board::new());
    }
}
