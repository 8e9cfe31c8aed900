use core::ops::{Deref, DerefMut};

use crate::engine::board::{Board, BoardError, neighborhood};
use crate::engine::types::{Color, Square};

/// 配置フェーズの長さ（盤上の駒数がこの値に達するまでは Add のみ）。
pub const PLACEMENT_ROUNDS: u8 = 20;

/// 1手。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Move {
    /// 新しい駒を置く。
    Add {
        /// 置くマス。
        to: Square,
    },
    /// 自分の駒を別のマスへ移す。
    Step {
        /// 移動先。
        to: Square,
        /// 移動元（空きになる）。
        from: Square,
    },
    /// 指す手が無い（投了）。盤面には適用できない。
    Quit,
}

impl Move {
    /// `Add` を生成する。
    #[inline]
    #[must_use]
    pub const fn add(to: Square) -> Self {
        Self::Add { to }
    }

    /// 移動先（`Quit` は `None`）。
    #[inline]
    #[must_use]
    pub const fn destination(self) -> Option<Square> {
        match self {
            Self::Add { to } | Self::Step { to, .. } => Some(to),
            Self::Quit => None,
        }
    }

    /// 移動元（`Step` のみ）。
    #[inline]
    #[must_use]
    pub const fn source(self) -> Option<Square> {
        match self {
            Self::Step { from, .. } => Some(from),
            Self::Add { .. } | Self::Quit => None,
        }
    }

    /// `Step` を生成する。
    #[inline]
    #[must_use]
    pub const fn step(to: Square, from: Square) -> Self {
        Self::Step { to, from }
    }
}

/// ゲームの段階。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// 駒を置く段階（Add のみ）。
    Placement,
    /// 駒を動かす段階（Step のみ）。
    Relocation,
}

impl Phase {
    /// 盤面の駒数から段階を判定する。
    #[inline]
    #[must_use]
    pub const fn of(board: &Board) -> Self {
        if board.rounds() < PLACEMENT_ROUNDS {
            Self::Placement
        } else {
            Self::Relocation
        }
    }
}

/// 手が受理されなかった理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MoveError {
    /// 相手のゴール辺には置けない。
    GoalArea,
    /// 移動元に自分の駒が無い。
    NotOwnPiece,
    /// 移動先が空いていない。
    Occupied,
    /// 3つ以上の駒が隣接する塊ができる。
    Overconnected,
    /// `Quit` は盤面に適用できない。
    Quit,
    /// 現在の段階では指せない種類の手。
    WrongPhase,
}

impl From<BoardError> for MoveError {
    #[inline]
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Occupied => Self::Occupied,
            BoardError::ColorMismatch => Self::NotOwnPiece,
        }
    }
}

/// 盤面の配置規則だけを検査する（段階は見ない）。
///
/// # Errors
///
/// 移動先が埋まっている、相手のゴール辺である、移動元が自分の駒でない、
/// または隣接規則に反する場合にエラーを返す。
#[inline]
pub fn legality(board: &Board, mv: Move, color: Color) -> Result<(), MoveError> {
    let (to, vacated) = match mv {
        Move::Quit => return Err(MoveError::Quit),
        Move::Add { to } => (to, u64::MIN),
        Move::Step { to, from } => {
            if board.piece_at(from) != Some(color) {
                return Err(MoveError::NotOwnPiece);
            }
            (to, from.bit())
        }
    };

    if board.piece_at(to).is_some() {
        return Err(MoveError::Occupied);
    }

    if color.is_forbidden_goal(to) {
        return Err(MoveError::GoalArea);
    }

    // 移動元の駒は動いた後には残らないので数えない。
    let own = board.pieces(color) & !vacated;
    let adjacent = neighborhood(to.bit()) & own;
    match adjacent.count_ones() {
        0 => Ok(()),
        1 => {
            let pair = neighborhood(adjacent) & own & !to.bit();
            if pair == u64::MIN {
                Ok(())
            } else {
                Err(MoveError::Overconnected)
            }
        }
        _ => Err(MoveError::Overconnected),
    }
}

/// 配置規則を満たすかを返す。
#[inline]
#[must_use]
pub fn is_legal(board: &Board, mv: Move, color: Color) -> bool {
    legality(board, mv, color).is_ok()
}

/// 配置規則と段階の両方を検査する。
///
/// # Errors
///
/// `legality` のエラーに加え、配置段階の `Step`、移動段階の `Add` は
/// `MoveError::WrongPhase` を返す。
#[inline]
pub fn check_move(board: &Board, mv: Move, color: Color) -> Result<(), MoveError> {
    legality(board, mv, color)?;

    match (mv, Phase::of(board)) {
        (Move::Add { .. }, Phase::Relocation) | (Move::Step { .. }, Phase::Placement) => {
            Err(MoveError::WrongPhase)
        }
        _ => Ok(()),
    }
}

/// 検査したうえで手を盤面に適用する。失敗時は盤面を変更しない。
///
/// # Errors
///
/// `check_move` と同じ条件でエラーを返す。
#[inline]
pub fn enforce_move(board: &mut Board, mv: Move, color: Color) -> Result<(), MoveError> {
    if let Err(err) = check_move(board, mv, color) {
        tracing::trace!(?mv, ?color, ?err, "move rejected");
        return Err(err);
    }

    match mv {
        Move::Add { to } => board.add(to, color)?,
        Move::Step { to, from } => {
            board.remove(from, color)?;
            board.add(to, color)?;
        }
        Move::Quit => return Err(MoveError::Quit),
    }
    Ok(())
}

/// 現在の段階で `color` が指せる手をすべて列挙する。
///
/// 移動先は x 優先（x 外側、y 内側）、`Step` では各移動先について移動元も同じ順。
#[must_use]
pub fn candidate_moves(board: &Board, color: Color) -> Vec<Move> {
    let empty = !board.occupied();
    let destinations = Square::all().filter(move |to| empty & to.bit() != u64::MIN);

    match Phase::of(board) {
        Phase::Placement => destinations
            .map(Move::add)
            .filter(|&mv| is_legal(board, mv, color))
            .collect(),
        Phase::Relocation => destinations
            .flat_map(|to| board.squares_of(color).map(move |from| Move::step(to, from)))
            .filter(|&mv| is_legal(board, mv, color))
            .collect(),
    }
}

/// 盤面へ一時的に適用した手。破棄時に必ず元に戻す。
///
/// 探索中の適用/取り消しを対にするためのガード。`Deref` で盤面として扱える。
#[derive(Debug)]
pub struct ScopedMove<'board> {
    /// 適用先の盤面。
    board: &'board mut Board,
    /// 手番。
    color: Color,
    /// 適用した手。
    mv: Move,
}

impl<'board> ScopedMove<'board> {
    /// 手を検査して適用し、取り消し用のガードを返す。
    ///
    /// # Errors
    ///
    /// `enforce_move` と同じ条件でエラーを返す（盤面は変更されない）。
    #[inline]
    pub fn apply(board: &'board mut Board, mv: Move, color: Color) -> Result<Self, MoveError> {
        enforce_move(board, mv, color)?;
        Ok(Self { board, color, mv })
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    #[inline]
    fn drop(&mut self) {
        let restored = undo(self.board, self.mv, self.color);
        debug_assert!(restored.is_ok(), "undo failed: {restored:?}");
    }
}

/// 適用済みの手を取り消す。
fn undo(board: &mut Board, mv: Move, color: Color) -> Result<(), BoardError> {
    match mv {
        Move::Add { to } => board.remove(to, color),
        Move::Step { to, from } => {
            board.remove(to, color)?;
            board.add(from, color)
        }
        Move::Quit => Ok(()),
    }
}
