/// 牌相关模块
///
/// 包含牌（Tile）、牌墙（Wall）、手牌计数（TileCounts）和胡牌判定

pub mod tile;
pub mod wall;
pub mod hand;
pub mod pair;
pub mod win_check;

// 重新导出常用类型
pub use tile::{Tile, TileKind, Suit, Honor, Wind, sort_tiles};
pub use wall::Wall;
pub use hand::TileCounts;
pub use pair::{pair_candidates, best_over_pairs};
pub use win_check::{WinChecker, WinResult, Group, is_winning_hand};
