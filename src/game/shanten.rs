use crate::error::{EngineError, Result};
use crate::tile::{best_over_pairs, Suit, Tile, TileCounts, TileKind, WinChecker};
use crate::utils::SuitCode;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// 向听计算结果
///
/// - `-1`：已胡牌
/// - `0`：听牌
/// - `n`：还需换 n 张牌才能听牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShantenResult {
    pub shanten: i8,
    /// 能让向听数下降的牌，按规范键字典序排列且无重复
    pub improvements: Vec<TileKind>,
}

impl ShantenResult {
    pub fn is_winning(&self) -> bool {
        self.shanten < 0
    }

    pub fn is_tenpai(&self) -> bool {
        self.shanten == 0
    }

    /// 改良牌的规范键
    pub fn improvement_keys(&self) -> Vec<String> {
        self.improvements.iter().map(TileKind::key).collect()
    }
}

/// 各面子数下能得到的最多搭子数
///
/// 下标为面子数（0-4，超过 4 组按 4 计），值为搭子数，`-1` 表示不可达。
/// 搭子：对子、两面/边张（相邻两张）、嵌张（隔一张），都只差一张成面子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupProfile([i8; GroupProfile::SLOTS]);

impl GroupProfile {
    const MAX_MELDS: usize = 4;
    const SLOTS: usize = Self::MAX_MELDS + 1;
    const UNREACHABLE: i8 = -1;

    /// 没有任何牌：0 面子 0 搭子
    fn empty() -> Self {
        let mut slots = [Self::UNREACHABLE; Self::SLOTS];
        slots[0] = 0;
        Self(slots)
    }

    fn unreachable() -> Self {
        Self([Self::UNREACHABLE; Self::SLOTS])
    }

    fn single(melds: usize, partials: i8) -> Self {
        let mut profile = Self::unreachable();
        profile.0[melds.min(Self::MAX_MELDS)] = partials;
        profile
    }

    /// 在本组合基础上再加 `melds` 面子、`partials` 搭子
    fn shifted(&self, melds: usize, partials: i8) -> Self {
        let mut out = Self::unreachable();
        for (m, &p) in self.0.iter().enumerate() {
            if p == Self::UNREACHABLE {
                continue;
            }
            let slot = &mut out.0[(m + melds).min(Self::MAX_MELDS)];
            *slot = (*slot).max(p + partials);
        }
        out
    }

    /// 逐格取较优
    fn merge(&mut self, other: Self) {
        for (slot, p) in self.0.iter_mut().zip(other.0) {
            *slot = (*slot).max(p);
        }
    }

    /// 两个独立部分（不同花色）的组合
    fn combine(&self, other: &Self) -> Self {
        let mut out = Self::unreachable();
        for (m, &p) in other.0.iter().enumerate() {
            if p != Self::UNREACHABLE {
                out.merge(self.shifted(m, p));
            }
        }
        out
    }

    /// 由面子/搭子数算向听
    ///
    /// `8 - 2 * 面子 - min(搭子, 4 - 面子) - 雀头`，副露计入面子
    fn shanten(&self, exposed_melds: usize, has_pair: bool) -> i8 {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != Self::UNREACHABLE)
            .map(|(m, &p)| {
                let melds = (m + exposed_melds).min(Self::MAX_MELDS) as i8;
                let partials = p.min(Self::MAX_MELDS as i8 - melds);
                ShantenCalculator::MAX_SHANTEN - 2 * melds - partials - has_pair as i8
            })
            .min()
            .unwrap_or(ShantenCalculator::MAX_SHANTEN)
    }
}

/// 一种字牌的闭式拆分：(刻子数, 是否剩一个对子搭子)
///
/// 字牌不能组成顺子，`c` 张只能是 `c / 3` 副刻子加余下的对子或孤张
pub(crate) fn honor_kind_groups(count: u8) -> (usize, bool) {
    ((count / 3) as usize, count % 3 == 2)
}

/// 向听搜索
///
/// 数牌按花色递归拆分（面子、搭子或孤张），以花色计数编码做记忆化；
/// 同一次计算里的各个雀头候选和试摸共享一张表
#[derive(Debug, Default)]
struct ShantenSearch {
    memo: HashMap<SuitCode, GroupProfile>,
}

impl ShantenSearch {
    fn new() -> Self {
        Self::default()
    }

    /// 取遍所有雀头选择（含不取雀头）后的最小向听
    fn shanten(&mut self, counts: &TileCounts, exposed_melds: usize) -> i8 {
        best_over_pairs(counts, true, |pair, rest| {
            self.profile(rest).shanten(exposed_melds, pair.is_some())
        })
        .unwrap_or(ShantenCalculator::MAX_SHANTEN)
    }

    fn profile(&mut self, counts: &TileCounts) -> GroupProfile {
        let mut profile = self.honor_profile(counts.honor_counts());
        for suit in Suit::numbered() {
            let suit_profile = self.suit_profile(counts.suit_counts(suit));
            profile = profile.combine(&suit_profile);
        }
        profile
    }

    fn honor_profile(&self, counts: [u8; 7]) -> GroupProfile {
        counts
            .into_iter()
            .filter(|&c| c > 0)
            .fold(GroupProfile::empty(), |acc, c| {
                let (melds, pair) = honor_kind_groups(c);
                acc.combine(&GroupProfile::single(melds, pair as i8))
            })
    }

    /// 单一数牌花色的最优拆分
    ///
    /// 每次处理最小的非空数字：作孤张丢弃、刻子、顺子、对子、相邻搭子或嵌张
    fn suit_profile(&mut self, counts: [u8; 9]) -> GroupProfile {
        let code = SuitCode::encode(&counts);
        if let Some(profile) = self.memo.get(&code) {
            return *profile;
        }

        let profile = match counts.iter().position(|&c| c > 0) {
            None => GroupProfile::empty(),
            Some(i) => {
                let mut options: SmallVec<[([u8; 9], usize, i8); 6]> = SmallVec::new();
                options.push((take(counts, &[(i, 1)]), 0, 0));
                if counts[i] >= 3 {
                    options.push((take(counts, &[(i, 3)]), 1, 0));
                }
                if counts[i] >= 2 {
                    options.push((take(counts, &[(i, 2)]), 0, 1));
                }
                if i + 1 < 9 && counts[i + 1] > 0 {
                    if i + 2 < 9 && counts[i + 2] > 0 {
                        options.push((take(counts, &[(i, 1), (i + 1, 1), (i + 2, 1)]), 1, 0));
                    }
                    options.push((take(counts, &[(i, 1), (i + 1, 1)]), 0, 1));
                }
                if i + 2 < 9 && counts[i + 2] > 0 {
                    options.push((take(counts, &[(i, 1), (i + 2, 1)]), 0, 1));
                }

                let mut best = GroupProfile::unreachable();
                for (rest, melds, partials) in options {
                    best.merge(self.suit_profile(rest).shifted(melds, partials));
                }
                best
            }
        };

        self.memo.insert(code, profile);
        profile
    }
}

fn take(mut counts: [u8; 9], used: &[(usize, u8)]) -> [u8; 9] {
    for &(slot, n) in used {
        counts[slot] -= n;
    }
    counts
}

/// 向听数计算器
///
/// 向听数（Shanten Number）：距离听牌还需要换几张牌
pub struct ShantenCalculator;

impl ShantenCalculator {
    /// 13 张手牌的最大向听数
    pub const MAX_SHANTEN: i8 = 8;

    /// 计算向听数和改良牌
    ///
    /// # 参数
    ///
    /// - `hand`: 手牌，13 或 14 张
    ///
    /// # Errors
    ///
    /// 张数不是 13 或 14 时返回 `InvalidHandSize`
    pub fn calculate(hand: &[Tile]) -> Result<ShantenResult> {
        Self::calculate_with_melds(hand, 0)
    }

    /// 带副露的向听计算
    ///
    /// 每个副露占 3 张，暗手应为 `13 - 3k` 或 `14 - 3k` 张
    pub fn calculate_with_melds(hand: &[Tile], exposed_melds: usize) -> Result<ShantenResult> {
        Self::validate_size(hand.len(), exposed_melds)?;

        // 14 张（含副露）先看是否已胡
        let counts = TileCounts::from_tiles(hand);
        let groups_needed = GroupProfile::MAX_MELDS - exposed_melds;
        if WinChecker::is_complete(&counts, groups_needed) {
            return Ok(ShantenResult {
                shanten: -1,
                improvements: Vec::new(),
            });
        }

        let mut search = ShantenSearch::new();
        let shanten = search.shanten(&counts, exposed_melds);

        let mut improvements: Vec<TileKind> = TileKind::all()
            .filter(|&kind| search.shanten(&counts.with_added(kind), exposed_melds) < shanten)
            .collect();
        improvements.sort_by_cached_key(TileKind::key);
        improvements.dedup();

        Ok(ShantenResult {
            shanten,
            improvements,
        })
    }

    /// 检查暗手张数：`13 - 3k` 或 `14 - 3k`，`k` 为副露数且不超过 4
    pub fn validate_size(size: usize, exposed_melds: usize) -> Result<()> {
        let effective = size + 3 * exposed_melds;
        if exposed_melds > GroupProfile::MAX_MELDS || (effective != 13 && effective != 14) {
            return Err(EngineError::InvalidHandSize {
                size,
                melds: exposed_melds,
            });
        }
        Ok(())
    }

    /// 只算向听数，不校验张数，也不求改良牌
    pub fn shanten_of_counts(counts: &TileCounts, exposed_melds: usize) -> i8 {
        ShantenSearch::new().shanten(counts, exposed_melds)
    }
}

/// 计算 13 或 14 张手牌的向听数
#[inline]
pub fn calculate_shanten(hand: &[Tile]) -> Result<ShantenResult> {
    ShantenCalculator::calculate(hand)
}
