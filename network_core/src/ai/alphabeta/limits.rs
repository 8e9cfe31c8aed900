/// 既定の探索深さ（ply）。
pub const DEFAULT_DEPTH: u8 = 3;

/// 探索の制限。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct SearchLimits {
    /// 探索の最大深さ（ply）。
    max_depth: u8,
}

impl SearchLimits {
    /// 探索の最大深さ（ply）を返す。
    pub(super) const fn max_depth(self) -> u8 {
        self.max_depth
    }

    /// 探索制限を生成する（深さ0は1として扱う）。
    pub(super) const fn new(max_depth: u8) -> Self {
        Self {
            max_depth: normalize_depth(max_depth),
        }
    }
}

/// 探索深さを正規化する（0の場合は1にする）。
const fn normalize_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else {
        depth
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// アルファベータ枝刈りの回数。
    cutoffs: u64,
    /// 静的評価で打ち切った局面数。
    leaves: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    pub(super) const fn cutoffs(self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 静的評価で打ち切った局面数を加算する。
    pub(super) const fn inc_leaves(&mut self) {
        self.leaves = self.leaves.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 静的評価で打ち切った局面数を返す。
    pub(super) const fn leaves(self) -> u64 {
        self.leaves
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(self) -> u64 {
        self.nodes
    }
}
