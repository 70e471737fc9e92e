use super::constants::{ALL_HONORS_DOUBLES, BASE_DOUBLES, BASE_POINTS};
use crate::tile::{Honor, Tile, TileCounts, TileKind, WinChecker, Wind};
use serde::{Deserialize, Serialize};

/// 计分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 点数：`10 × 2^doubles`
    pub score: u32,
    /// 番数
    pub doubles: u32,
    /// 每一项加番的说明，按计算顺序排列
    pub details: Vec<String>,
}

/// 胡牌时的场况
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinContext {
    /// 是否自摸
    pub is_self_draw: bool,
    /// 门风
    pub seat_wind: Wind,
    /// 圈风
    pub prevalent_wind: Wind,
}

impl WinContext {
    pub fn new(is_self_draw: bool, seat_wind: Wind, prevalent_wind: Wind) -> Self {
        Self {
            is_self_draw,
            seat_wind,
            prevalent_wind,
        }
    }
}

/// 番数累加器
#[derive(Debug, Default)]
struct DoublesTally {
    doubles: u32,
    details: Vec<String>,
}

impl DoublesTally {
    fn add(&mut self, doubles: u32, detail: String) {
        self.doubles += doubles;
        self.details.push(detail);
    }

    fn finish(self) -> ScoreResult {
        ScoreResult {
            score: BASE_POINTS.saturating_mul(2_u32.saturating_pow(self.doubles)),
            doubles: self.doubles,
            details: self.details,
        }
    }
}

/// 计分器
///
/// 不检查手牌是否真的胡牌，调用方应先用 `is_winning_hand` 确认
pub struct Scorer;

impl Scorer {
    /// 计算胡牌得分
    ///
    /// # 参数
    ///
    /// - `hand`: 胡牌时的手牌；只有 13 张时把 `winning_tile` 补进去，14 张时按原样计算
    /// - `winning_tile`: 和了的那张牌
    /// - `context`: 自摸与风位
    ///
    /// # 番种
    ///
    /// 1. 底番 1 番
    /// 2. 自摸 +1
    /// 3. 门风刻子 +1
    /// 4. 圈风刻子 +1（与门风相同时不重复计）
    /// 5. 每副三元刻子 +1
    /// 6. 字一色 +3
    pub fn score(hand: &[Tile], winning_tile: Tile, context: &WinContext) -> ScoreResult {
        let mut tiles = hand.to_vec();
        if tiles.len() == WinChecker::WINNING_SIZE - 1 {
            tiles.push(winning_tile);
        }
        let counts = TileCounts::from_tiles(&tiles);
        let honor_count = |honor: Honor| counts.count(TileKind::Honor(honor));

        let mut tally = DoublesTally::default();
        tally.add(BASE_DOUBLES, format!("Base score: {BASE_DOUBLES} double"));

        if context.is_self_draw {
            tally.add(1, "Self-draw: +1 double".to_string());
        }

        let seat = context.seat_wind;
        if honor_count(seat.into()) >= 3 {
            tally.add(1, format!("Player wind ({seat}): +1 double"));
        }

        let prevalent = context.prevalent_wind;
        if prevalent != seat && honor_count(prevalent.into()) >= 3 {
            tally.add(1, format!("Prevalent wind ({prevalent}): +1 double"));
        }

        for dragon in Honor::DRAGONS {
            if honor_count(dragon) >= 3 {
                tally.add(1, format!("Dragon ({}): +1 double", dragon.name()));
            }
        }

        if tiles.iter().all(Tile::is_honor) {
            tally.add(ALL_HONORS_DOUBLES, format!("All honors: +{ALL_HONORS_DOUBLES} doubles"));
        }

        let result = tally.finish();
        log::debug!(
            "scored hand of {} tiles: {} doubles, {} points",
            tiles.len(),
            result.doubles,
            result.score
        );
        result
    }
}

/// 计算胡牌得分
#[inline]
pub fn score_hand(
    hand: &[Tile],
    winning_tile: Tile,
    is_self_draw: bool,
    seat_wind: Wind,
    prevalent_wind: Wind,
) -> ScoreResult {
    Scorer::score(
        hand,
        winning_tile,
        &WinContext::new(is_self_draw, seat_wind, prevalent_wind),
    )
}
