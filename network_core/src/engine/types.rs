/// 手番（駒の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 後手。ゴールは上下の行（y = 0, 7）。
    Black,
    /// 先手。ゴールは左右の列（x = 0, 7）。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// ネットワークの始点となるゴール辺上にあるかを返す。
    #[inline]
    #[must_use]
    pub const fn is_start_goal(self, square: Square) -> bool {
        match self {
            Self::Black => square.y() == 0,
            Self::White => square.x() == 0,
        }
    }

    /// ネットワークの終点となるゴール辺上にあるかを返す。
    #[inline]
    #[must_use]
    pub const fn is_end_goal(self, square: Square) -> bool {
        let last = Square::BOARD_LEN.wrapping_sub(1);
        match self {
            Self::Black => square.y() == last,
            Self::White => square.x() == last,
        }
    }

    /// 相手のゴール辺（この色が置けない辺）上にあるかを返す。
    #[inline]
    #[must_use]
    pub const fn is_forbidden_goal(self, square: Square) -> bool {
        let last = Square::BOARD_LEN.wrapping_sub(1);
        match self {
            Self::Black => square.x() == 0 || square.x() == last,
            Self::White => square.y() == 0 || square.y() == last,
        }
    }
}

/// 盤面上のマス（0..=63のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square(
    /// `y * 8 + x` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 盤のマス数。
    pub const COUNT: u8 = Self::BOARD_LEN.wrapping_mul(Self::BOARD_LEN);

    /// 全マスを x 優先（x 外側、y 内側）の順で返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::BOARD_LEN)
            .flat_map(|x| (0..Self::BOARD_LEN).filter_map(move |y| Self::from_xy(x, y)))
    }

    /// そのマスを表すビット（`u64`）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u64 {
        let one = u64::MIN.wrapping_add(1);
        let shift = u32::from(self.0);

        one.checked_shl(shift).unwrap_or(u64::MIN)
    }

    /// インデックスから `Square` を生成する（範囲チェックなし）。
    #[cfg(test)]
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 盤面座標（x, y）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match y.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(x) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 隣のマスを返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = match self.x().checked_add_signed(dx) {
            Some(value) => value,
            None => return None,
        };
        let y = match self.y().checked_add_signed(dy) {
            Some(value) => value,
            None => return None,
        };

        Self::from_xy(x, y)
    }

    /// x 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

/// 8方向。北は y が増える向き、東は x が増える向き。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// 全方向（リンク表の並び順）。
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// 1マス進むときの (dx, dy)。
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    /// リンク表でのインデックス（0..=7）。
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
        }
    }

    /// この方向が属する軸を返す。
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::East | Self::West => Axis::Horizontal,
            Self::NorthEast | Self::SouthWest => Axis::Diagonal,
            Self::NorthWest | Self::SouthEast => Axis::AntiDiagonal,
        }
    }

    /// 逆向きの方向を返す。
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

/// 盤上の直線（4軸）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// 南北。
    Vertical,
    /// 東西。
    Horizontal,
    /// 北東-南西。
    Diagonal,
    /// 北西-南東。
    AntiDiagonal,
}

impl Axis {
    /// 全軸。
    pub const ALL: [Self; 4] = [
        Self::Vertical,
        Self::Horizontal,
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// 軸の正の向き。
    #[inline]
    #[must_use]
    pub const fn forward(self) -> Direction {
        match self {
            Self::Vertical => Direction::North,
            Self::Horizontal => Direction::East,
            Self::Diagonal => Direction::NorthEast,
            Self::AntiDiagonal => Direction::NorthWest,
        }
    }

    /// ゴール辺に沿う軸かを返す。
    ///
    /// ゴール列（x = 0, 7）の縦方向と、ゴール行（y = 0, 7）の横方向では駒同士は接続しない。
    #[inline]
    #[must_use]
    pub const fn runs_along_goal(self, square: Square) -> bool {
        let last = Square::BOARD_LEN.wrapping_sub(1);
        match self {
            Self::Vertical => square.x() == 0 || square.x() == last,
            Self::Horizontal => square.y() == 0 || square.y() == last,
            Self::Diagonal | Self::AntiDiagonal => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Color, Direction, Square};

    fn sq(x: u8, y: u8) -> Square {
        Square::from_xy(x, y).unwrap_or_else(|| panic!("({x}, {y}) is off the board"))
    }

    #[test]
    fn from_xy_rejects_off_board_coordinates() {
        assert!(Square::from_xy(8, 0).is_none());
        assert!(Square::from_xy(0, 8).is_none());
        assert_eq!(sq(3, 5).x(), 3);
        assert_eq!(sq(3, 5).y(), 5);
        assert_eq!(sq(3, 5).index(), 43);
    }

    #[test]
    fn step_stays_on_board() {
        assert_eq!(sq(0, 0).step(Direction::SouthWest), None);
        assert_eq!(sq(7, 7).step(Direction::NorthEast), None);
        assert_eq!(sq(3, 3).step(Direction::NorthWest), Some(sq(2, 4)));
        assert_eq!(sq(3, 3).step(Direction::SouthEast), Some(sq(4, 2)));
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite().index(), dir.index());
        }
    }

    #[test]
    fn all_squares_are_x_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), usize::from(Square::COUNT));
        assert_eq!(squares.first().copied(), Some(sq(0, 0)));
        assert_eq!(squares.get(1).copied(), Some(sq(0, 1)));
        assert_eq!(squares.get(8).copied(), Some(sq(1, 0)));
    }

    #[test]
    fn goal_edges_follow_color() {
        assert!(Color::White.is_start_goal(sq(0, 3)));
        assert!(Color::White.is_end_goal(sq(7, 3)));
        assert!(Color::White.is_forbidden_goal(sq(3, 0)));
        assert!(Color::Black.is_start_goal(sq(3, 0)));
        assert!(Color::Black.is_end_goal(sq(3, 7)));
        assert!(Color::Black.is_forbidden_goal(sq(0, 3)));
        assert!(Axis::Vertical.runs_along_goal(sq(0, 4)));
        assert!(!Axis::Horizontal.runs_along_goal(sq(0, 4)));
        assert!(!Axis::Diagonal.runs_along_goal(sq(0, 0)));
    }
}
