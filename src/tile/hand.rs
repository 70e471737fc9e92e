use super::tile::{Suit, Tile, TileKind};

/// 手牌计数（34 种牌各自的数量）
///
/// 向听和胡牌判定只关心每种牌的数量，不关心具体副本。
/// 计数不强制每种牌最多 4 张，调用方提供的手牌被视为可信
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCounts {
    counts: [u8; TileKind::COUNT],
    total: usize,
}

impl TileCounts {
    /// 创建空计数
    pub fn new() -> Self {
        Self {
            counts: [0; TileKind::COUNT],
            total: 0,
        }
    }

    pub fn from_tiles(tiles: &[Tile]) -> Self {
        Self::from_kinds(tiles.iter().map(|t| t.kind))
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = TileKind>) -> Self {
        let mut counts = Self::new();
        for kind in kinds {
            counts.add(kind);
        }
        counts
    }

    /// 添加一张牌
    pub fn add(&mut self, kind: TileKind) {
        self.counts[kind.index()] = self.counts[kind.index()].saturating_add(1);
        self.total += 1;
    }

    /// 移除一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功移除
    /// - `false`：没有该牌
    pub fn remove(&mut self, kind: TileKind) -> bool {
        let count = &mut self.counts[kind.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        self.total -= 1;
        true
    }

    /// 移除 `n` 张同种牌，数量不足时不做任何修改
    pub fn remove_n(&mut self, kind: TileKind, n: u8) -> bool {
        let count = &mut self.counts[kind.index()];
        if *count < n {
            return false;
        }
        *count -= n;
        self.total -= n as usize;
        true
    }

    /// 添加一张牌后的新计数
    pub fn with_added(&self, kind: TileKind) -> Self {
        let mut next = *self;
        next.add(kind);
        next
    }

    pub fn count(&self, kind: TileKind) -> u8 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// 某种数牌花色的 9 格计数（下标 0 对应数字 1）
    ///
    /// 字牌花色返回全 0
    pub fn suit_counts(&self, suit: Suit) -> [u8; 9] {
        let mut out = [0u8; 9];
        let offset = match suit {
            Suit::Man => 0,
            Suit::Pin => 9,
            Suit::Sou => 18,
            Suit::Honor => return out,
        };
        out.copy_from_slice(&self.counts[offset..offset + 9]);
        out
    }

    /// 7 种字牌的计数，按东南西北中发白
    pub fn honor_counts(&self) -> [u8; 7] {
        let mut out = [0u8; 7];
        out.copy_from_slice(&self.counts[TileKind::NUMBERED_COUNT..]);
        out
    }

    /// 所有数量不为 0 的牌，按显示顺序
    pub fn iter(&self) -> impl Iterator<Item = (TileKind, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .filter_map(|(i, &c)| TileKind::from_index(i).map(|k| (k, c)))
    }
}

impl Default for TileCounts {
    fn default() -> Self {
        Self::new()
    }
}
