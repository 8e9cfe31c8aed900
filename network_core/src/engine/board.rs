use crate::engine::types::{Axis, Color, Direction, Square};

/// A列（x = 0）のマスク。
const FILE_A: u64 = 0x0101_0101_0101_0101;

/// H列（x = 7）のマスク。
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// 1ビット分のシフト量。
const SHIFT_1: u32 = 1;

/// 8ビット分のシフト量。
const SHIFT_8: u32 = 8;

/// 1マス分のリンク表（方向ごとに接続先のマス）。
type Links = [Option<Square>; 8];

/// 空のリンク表。
const NO_LINKS: Links = [None; 8];

/// 盤面の直接操作に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BoardError {
    /// 指定マスの駒が指定色ではない（空きを含む）。
    ColorMismatch,
    /// 指定マスはすでに埋まっている。
    Occupied,
}

/// 盤面（駒の配置＋同色駒間の接続グラフ）。
///
/// 接続はマス座標で保持する。`p` が方向 `d` に `q` とリンクしているのは、
/// `d` 方向の直線上で `p` から最も近い駒が `q` であり、かつ同色のときに限る
/// （ゴール辺に沿う軸を除く）。リンクは常に両端で対称に張られる。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 黒駒のビットボード。
    black: u64,
    /// マスごとのリンク表（`Square::index` で引く）。
    links: [Links; 64],
    /// 盤上の駒数（add で増え、remove で減る）。
    rounds: u8,
    /// 白駒のビットボード。
    white: u64,
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 駒を置き、接続グラフを更新する。
    ///
    /// # Errors
    ///
    /// 指定マスが空いていない場合、`BoardError::Occupied` を返す。
    #[inline]
    pub fn add(&mut self, square: Square, color: Color) -> Result<(), BoardError> {
        if self.piece_at(square).is_some() {
            return Err(BoardError::Occupied);
        }

        self.rounds = self.rounds.saturating_add(1);
        *self.bitboard_mut(color) |= square.bit();
        self.set_links(square, NO_LINKS);

        for axis in Axis::ALL {
            self.sweep_add(square, color, axis);
        }
        Ok(())
    }

    /// 指定マス・方向のリンク先を返す。
    #[inline]
    #[must_use]
    pub fn link(&self, square: Square, direction: Direction) -> Option<Square> {
        self.links_of(square)
            .get(direction.index())
            .copied()
            .flatten()
    }

    /// 指定マスの全リンクを（方向、リンク先）で返す。
    #[inline]
    pub fn linked(&self, square: Square) -> impl Iterator<Item = (Direction, Square)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.link(square, dir).map(|target| (dir, target)))
    }

    /// 空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            black: u64::MIN,
            links: [NO_LINKS; 64],
            rounds: u8::MIN,
            white: u64::MIN,
        }
    }

    /// 指定色の駒が持つリンク数の合計を返す（1本の接続は両端で2回数える）。
    #[inline]
    #[must_use]
    pub fn neighbor_count(&self, color: Color) -> u32 {
        let mut total: u32 = 0;
        for square in self.squares_of(color) {
            let count = self.links_of(square).iter().flatten().count();
            total = total.saturating_add(u32::try_from(count).unwrap_or(u32::MAX));
        }
        total
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> u64 {
        self.black | self.white
    }

    /// 指定マスの駒を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Color> {
        let mask = square.bit();
        if self.black & mask != u64::MIN {
            Some(Color::Black)
        } else if self.white & mask != u64::MIN {
            Some(Color::White)
        } else {
            None
        }
    }

    /// 指定色のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn pieces(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 駒を取り除き、接続グラフを更新する。
    ///
    /// 取り除いた駒を挟んでいた2駒が同色なら直接つなぎ直す。
    ///
    /// # Errors
    ///
    /// 指定マスに `color` の駒が無い場合、`BoardError::ColorMismatch` を返す。
    #[inline]
    pub fn remove(&mut self, square: Square, color: Color) -> Result<(), BoardError> {
        if self.piece_at(square) != Some(color) {
            return Err(BoardError::ColorMismatch);
        }

        self.rounds = self.rounds.saturating_sub(1);
        *self.bitboard_mut(color) &= !square.bit();

        for axis in Axis::ALL {
            self.sweep_remove(square, axis);
        }
        self.set_links(square, NO_LINKS);
        Ok(())
    }

    /// 盤上の駒数（ラウンドカウンタ）を返す。
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// 指定色の駒があるマスを x 優先の順で返す。
    #[inline]
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        let bb = self.pieces(color);
        Square::all().filter(move |square| bb & square.bit() != u64::MIN)
    }

    /// 接続グラフが盤面から一から計算したものと一致するかを返す。
    ///
    /// 増分更新の検証用。空きマスはリンクを持たず、各リンクは最寄りの同色駒を指す。
    #[must_use]
    pub fn links_are_consistent(&self) -> bool {
        Square::all().all(|square| {
            let color = self.piece_at(square);
            Direction::ALL.into_iter().all(|dir| {
                let expected = color.and_then(|own| {
                    if dir.axis().runs_along_goal(square) {
                        return None;
                    }
                    self.nearest(square, dir)
                        .filter(|&target| self.piece_at(target) == Some(own))
                });
                let actual = self.link(square, dir);
                let symmetric = actual.is_none_or(|target| {
                    self.link(target, dir.opposite()) == Some(square)
                });
                expected == actual && symmetric
            })
        })
    }

    /// 指定色のビットボードへの可変参照を返す。
    const fn bitboard_mut(&mut self, color: Color) -> &mut u64 {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// 指定マスのリンク表を返す。
    fn links_of(&self, square: Square) -> Links {
        self.links
            .get(usize::from(square.index()))
            .copied()
            .unwrap_or(NO_LINKS)
    }

    /// `from` から `direction` へ進んで最初に見つかる駒のマスを返す（`from` 自身は除く）。
    fn nearest(&self, from: Square, direction: Direction) -> Option<Square> {
        let occupied = self.occupied();
        let mut current = from.step(direction);
        while let Some(square) = current {
            if occupied & square.bit() != u64::MIN {
                return Some(square);
            }
            current = square.step(direction);
        }
        None
    }

    /// 1方向のリンクを書き換える。
    fn set_link(&mut self, square: Square, direction: Direction, target: Option<Square>) {
        if let Some(slot) = self
            .links
            .get_mut(usize::from(square.index()))
            .and_then(|links| links.get_mut(direction.index()))
        {
            *slot = target;
        }
    }

    /// リンク表を丸ごと書き換える。
    fn set_links(&mut self, square: Square, links: Links) {
        if let Some(slot) = self.links.get_mut(usize::from(square.index())) {
            *slot = links;
        }
    }

    /// 追加した駒から軸の両向きへ走査し、最寄りの駒とのリンクを張り直す。
    ///
    /// 最寄りが同色ならつなぐ。異色なら、それまで新しい駒を挟んでつながっていた
    /// リンクがあれば切れる。
    fn sweep_add(&mut self, square: Square, color: Color, axis: Axis) {
        if axis.runs_along_goal(square) {
            return;
        }

        let forward = axis.forward();
        for dir in [forward, forward.opposite()] {
            let Some(found) = self.nearest(square, dir) else {
                continue;
            };
            let same = self.piece_at(found) == Some(color);
            self.set_link(square, dir, same.then_some(found));
            self.set_link(found, dir.opposite(), same.then_some(square));
        }
    }

    /// 取り除いた駒の両側の最寄り駒を求め、同色同士ならつなぎ直す。
    fn sweep_remove(&mut self, square: Square, axis: Axis) {
        if axis.runs_along_goal(square) {
            return;
        }

        let forward = axis.forward();
        let ahead = self.nearest(square, forward);
        let behind = self.nearest(square, forward.opposite());

        match (ahead, behind) {
            (Some(front), Some(back)) if self.piece_at(front) == self.piece_at(back) => {
                self.set_link(front, forward.opposite(), Some(back));
                self.set_link(back, forward, Some(front));
            }
            _ => {
                if let Some(front) = ahead {
                    self.set_link(front, forward.opposite(), None);
                }
                if let Some(back) = behind {
                    self.set_link(back, forward, None);
                }
            }
        }
    }
}

/// 指定ビット集合の周囲8マスを表すビットボードを返す（自身は含まない）。
pub(crate) const fn neighborhood(bb: u64) -> u64 {
    let east = (bb & !FILE_H).wrapping_shl(SHIFT_1);
    let west = (bb & !FILE_A).wrapping_shr(SHIFT_1);
    let row = bb | east | west;

    let ring = row.wrapping_shl(SHIFT_8) | row.wrapping_shr(SHIFT_8) | east | west;
    ring & !bb
}
