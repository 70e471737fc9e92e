use super::hand::TileCounts;
use super::pair::pair_candidates;
use super::tile::{Honor, Suit, Tile, TileKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 牌组（顺子或刻子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// 顺子（同花色连续三张）
    Sequence { suit: Suit, start: u8 },
    /// 刻子（三张相同牌）
    Triplet { kind: TileKind },
}

/// 胡牌拆解结果：1 个雀头 + 4 组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub pair: TileKind,
    /// 通常恰好 4 组
    pub groups: SmallVec<[Group; 4]>,
}

/// 胡牌判定器
///
/// 只认标准型（4 组 + 1 雀头），必须恰好 14 张
pub struct WinChecker;

impl WinChecker {
    /// 胡牌所需张数
    pub const WINNING_SIZE: usize = 14;

    /// 标准型的组数
    pub const GROUPS: usize = 4;

    /// 判定手牌是否胡牌
    ///
    /// 张数不是 14 时直接返回 `false`（不是错误）
    pub fn is_winning_hand(tiles: &[Tile]) -> bool {
        tiles.len() == Self::WINNING_SIZE && Self::is_winning_counts(&TileCounts::from_tiles(tiles))
    }

    pub fn is_winning_counts(counts: &TileCounts) -> bool {
        Self::is_complete(counts, Self::GROUPS)
    }

    /// 暗手是否恰好拆成 `groups_needed` 组加 1 个雀头
    ///
    /// 有副露时每个副露占去一组，暗手只需凑齐剩下的组数
    pub fn is_complete(counts: &TileCounts, groups_needed: usize) -> bool {
        counts.total() == groups_needed * 3 + 2
            && pair_candidates(counts).any(|(_, rest)| Self::find_groups(&rest).is_some())
    }

    /// 拆出一种胡牌组合（雀头按显示顺序优先取靠前的）
    pub fn decompose(tiles: &[Tile]) -> Option<WinResult> {
        if tiles.len() != Self::WINNING_SIZE {
            return None;
        }
        let counts = TileCounts::from_tiles(tiles);
        let found = pair_candidates(&counts)
            .find_map(|(pair, rest)| Self::find_groups(&rest).map(|groups| WinResult { pair, groups }));
        found
    }

    /// 把剩余的牌完整拆成顺子和刻子，有余牌则返回 `None`
    fn find_groups(counts: &TileCounts) -> Option<SmallVec<[Group; 4]>> {
        if counts.total() % 3 != 0 {
            return None;
        }

        let mut groups = SmallVec::new();
        for suit in Suit::numbered() {
            if !Self::find_groups_for_suit(suit, counts.suit_counts(suit), &mut groups) {
                return None;
            }
        }

        // 字牌只能组成刻子
        for (honor, count) in Honor::ALL.into_iter().zip(counts.honor_counts()) {
            if count % 3 != 0 {
                return None;
            }
            for _ in 0..count / 3 {
                groups.push(Group::Triplet {
                    kind: TileKind::Honor(honor),
                });
            }
        }

        Some(groups)
    }

    /// 单一花色的拆解
    ///
    /// 从最小的数字开始：该数字的 `count % 3` 张必须作为顺子的起点，
    /// 其余组成刻子。三副相同的顺子等价于三副刻子，所以这一取法不会漏解
    fn find_groups_for_suit(suit: Suit, mut counts: [u8; 9], groups: &mut SmallVec<[Group; 4]>) -> bool {
        for i in 0..9 {
            let runs = counts[i] % 3;
            if runs > 0 {
                if i + 2 >= 9 || counts[i + 1] < runs || counts[i + 2] < runs {
                    return false;
                }
                counts[i + 1] -= runs;
                counts[i + 2] -= runs;
                for _ in 0..runs {
                    groups.push(Group::Sequence {
                        suit,
                        start: i as u8 + 1,
                    });
                }
            }

            for _ in 0..counts[i] / 3 {
                if let Some(kind) = TileKind::numbered(suit, i as u8 + 1) {
                    groups.push(Group::Triplet { kind });
                }
            }
            counts[i] = 0;
        }
        true
    }
}

/// 判定 14 张手牌是否胡牌
#[inline]
pub fn is_winning_hand(tiles: &[Tile]) -> bool {
    WinChecker::is_winning_hand(tiles)
}
