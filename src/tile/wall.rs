use super::tile::{Tile, TileKind};
use crate::error::{EngineError, Result};
use crate::utils::LcgRng;
use rand::{Rng, SeedableRng};

/// 牌墙（Wall）
///
/// 存储全部 136 张可用牌（34 种 × 4 张，不含花牌），从牌墙头部依次摸牌。
/// 发牌和摸牌不会打乱剩余牌的顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    /// 牌堆，大小固定
    tiles: Box<[Tile]>,
    /// 已摸出的牌数（下一张为 `tiles[drawn_count]`）
    drawn_count: usize,
}

impl Wall {
    /// 总牌数：136 张
    pub const TOTAL_COUNT: usize = 136;

    /// 每名玩家起手牌数
    pub const HAND_SIZE: usize = 13;

    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 4;

    /// 未洗牌的完整牌墙
    ///
    /// 顺序：万、筒、条 1-9，再东南西北中发白，每种 4 张连续排列。
    /// id 为 `kind.index() * 4 + copy`
    pub fn ordered() -> Self {
        let tiles: Vec<Tile> = TileKind::all()
            .flat_map(|kind| {
                (0..Tile::COPIES).map(move |copy| {
                    Tile::with_id(kind, kind.index() as u32 * Tile::COPIES + copy)
                })
            })
            .collect();

        // 牌数不对只可能是程序错误
        assert_eq!(
            tiles.len(),
            Self::TOTAL_COUNT,
            "wall should have {} tiles, got {}",
            Self::TOTAL_COUNT,
            tiles.len()
        );

        Self {
            tiles: tiles.into_boxed_slice(),
            drawn_count: 0,
        }
    }

    /// 创建牌墙：有种子时可复现，否则使用线程随机数
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::shuffled(&mut rand::thread_rng()),
        }
    }

    /// 使用线性同余生成器洗牌，相同种子得到相同牌序
    pub fn seeded(seed: u64) -> Self {
        Self::shuffled(&mut LcgRng::seed_from_u64(seed))
    }

    /// 使用调用方提供的随机源洗牌
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut wall = Self::ordered();
        fisher_yates_shuffle(&mut wall.tiles[..], rng);
        log::debug!("shuffled wall of {} tiles", wall.tiles.len());
        wall
    }

    /// 使用给定牌序创建牌墙（回放或测试用）
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self {
            tiles: tiles.into_boxed_slice(),
            drawn_count: 0,
        }
    }

    /// 发牌
    ///
    /// 轮流发牌：每轮给每名玩家各一张，共 13 轮。
    ///
    /// # Errors
    ///
    /// - `InvalidPlayerCount`：人数不在 2-4 之间
    /// - `InsufficientTiles`：剩余牌数不够，此时牌墙保持不变
    pub fn deal(&mut self, num_players: usize) -> Result<Vec<Vec<Tile>>> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&num_players) {
            return Err(EngineError::InvalidPlayerCount { count: num_players });
        }

        let needed = num_players * Self::HAND_SIZE;
        let available = self.remaining_count();
        if needed > available {
            return Err(EngineError::InsufficientTiles { needed, available });
        }

        let mut hands = vec![Vec::with_capacity(Self::HAND_SIZE + 1); num_players];
        for _ in 0..Self::HAND_SIZE {
            for hand in hands.iter_mut() {
                hand.push(self.tiles[self.drawn_count]);
                self.drawn_count += 1;
            }
        }

        log::debug!(
            "dealt {} hands, {} tiles remaining",
            num_players,
            self.remaining_count()
        );
        Ok(hands)
    }

    /// 摸一张牌（从牌墙头部）
    ///
    /// # Returns
    ///
    /// - `Some(Tile)`：成功摸牌
    /// - `None`：牌墙已空（流局，不是错误）
    pub fn draw(&mut self) -> Option<Tile> {
        let tile = self.tiles.get(self.drawn_count).copied()?;
        self.drawn_count += 1;
        Some(tile)
    }

    /// 剩余的牌，保持原有顺序
    pub fn remaining(&self) -> &[Tile] {
        &self.tiles[self.drawn_count..]
    }

    pub fn remaining_count(&self) -> usize {
        self.tiles.len().saturating_sub(self.drawn_count)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_count() == 0
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn_count
    }

    /// 总牌数（含已摸出的）
    pub fn total_count(&self) -> usize {
        self.tiles.len()
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::ordered()
    }
}

/// Fisher-Yates 洗牌
///
/// 自行实现而不用 `SliceRandom::shuffle`，保证同一随机流总是得到同一牌序
pub fn fisher_yates_shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_wall_creation() {
        let wall = Wall::ordered();
        assert_eq!(wall.total_count(), Wall::TOTAL_COUNT);
        assert_eq!(wall.remaining_count(), Wall::TOTAL_COUNT);
        assert!(!wall.is_empty());
    }

    #[test]
    fn test_wall_tile_distribution() {
        let wall = Wall::seeded(99);
        let mut counts = HashMap::new();
        for tile in wall.remaining() {
            *counts.entry(tile.kind).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), TileKind::COUNT);
        assert!(counts.values().all(|&c| c == 4));
    }

    #[test]
    fn test_ids_are_unique() {
        let wall = Wall::seeded(3);
        let mut ids: Vec<u32> = wall.remaining().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Wall::TOTAL_COUNT);
        assert!(wall.remaining().iter().all(|t| t.id / Tile::COPIES == t.kind.index() as u32));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        assert_eq!(Wall::seeded(12345), Wall::seeded(12345));
        assert_ne!(Wall::seeded(1).remaining(), Wall::seeded(2).remaining());
        assert_ne!(Wall::seeded(1).remaining(), Wall::ordered().remaining());
    }

    #[test]
    fn test_wall_draw_all() {
        let mut wall = Wall::seeded(5);
        let first = wall.remaining()[0];
        assert_eq!(wall.draw(), Some(first));

        let mut count = 1;
        while wall.draw().is_some() {
            count += 1;
        }
        assert_eq!(count, Wall::TOTAL_COUNT);
        assert!(wall.is_empty());
        assert!(wall.remaining().is_empty());
        assert!(wall.draw().is_none());
    }

    #[test]
    fn test_deal_round_robin() {
        let mut wall = Wall::seeded(8);
        let order: Vec<Tile> = wall.remaining().to_vec();
        let hands = wall.deal(3).unwrap();

        assert_eq!(hands.len(), 3);
        for (player, hand) in hands.iter().enumerate() {
            assert_eq!(hand.len(), Wall::HAND_SIZE);
            for (round, tile) in hand.iter().enumerate() {
                assert_eq!(*tile, order[round * 3 + player]);
            }
        }
        assert_eq!(wall.remaining(), &order[39..]);
    }

    #[test]
    fn test_deal_rejects_player_count() {
        let mut wall = Wall::ordered();
        assert_eq!(wall.deal(1), Err(EngineError::InvalidPlayerCount { count: 1 }));
        assert_eq!(wall.deal(5), Err(EngineError::InvalidPlayerCount { count: 5 }));
        assert_eq!(wall.remaining_count(), Wall::TOTAL_COUNT);
    }

    #[test]
    fn test_deal_insufficient_tiles_leaves_wall_untouched() {
        let tiles = Wall::ordered().remaining()[..30].to_vec();
        let mut wall = Wall::from_tiles(tiles);
        assert_eq!(
            wall.deal(3),
            Err(EngineError::InsufficientTiles { needed: 39, available: 30 })
        );
        assert_eq!(wall.remaining_count(), 30);
    }
}
