/// 常量定义
///
/// 建议优先级和计分用到的数字

/// 优先级下限
pub const MIN_PRIORITY: u8 = 1;

/// 优先级上限
pub const MAX_PRIORITY: u8 = 10;

/// 摸到胡牌
pub const WIN_PRIORITY: u8 = 10;

/// 打出后听牌
pub const DISCARD_TENPAI_PRIORITY: u8 = 9;

/// 打出后一向听
pub const DISCARD_ONE_SHANTEN_PRIORITY: u8 = 7;

/// 其他打牌建议
pub const DISCARD_DEFAULT_PRIORITY: u8 = 6;

/// 13 张已听牌
pub const WAITING_TENPAI_PRIORITY: u8 = 8;

/// 13 张一向听
pub const WAITING_ONE_SHANTEN_PRIORITY: u8 = 6;

/// 13 张其他情况
pub const WAITING_DEFAULT_PRIORITY: u8 = 4;

/// 每次胡牌的底分（乘以 2^番数）
pub const BASE_POINTS: u32 = 10;

/// 任何胡牌都有的 1 番
pub const BASE_DOUBLES: u32 = 1;

/// 字一色的番数
pub const ALL_HONORS_DOUBLES: u32 = 3;

/// 安全度的基础值
pub const BASE_SAFETY: i32 = 5;

/// 见牌加成的上限
pub const MAX_VISIBLE_BONUS: i32 = 3;
