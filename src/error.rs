use std::fmt;

/// 引擎错误
///
/// 均为调用方误用，发现即返回，不做重试
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 手牌张数不合法（向听计算只接受 13 或 14 张，每个副露减 3 张）
    InvalidHandSize { size: usize, melds: usize },
    /// 玩家人数不在 2-4 之间
    InvalidPlayerCount { count: usize },
    /// 牌墙剩余牌数不足以发牌
    InsufficientTiles { needed: usize, available: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidHandSize { size, melds: 0 } => {
                write!(f, "hand must have 13 or 14 tiles for shanten calculation, got {size}")
            }
            EngineError::InvalidHandSize { size, melds } => {
                let m = (*melds).min(4);
                let (short, full) = (13 - 3 * m, 14 - 3 * m);
                write!(f, "hand with {melds} exposed melds must have {short} or {full} tiles, got {size}")
            }
            EngineError::InvalidPlayerCount { count } => {
                write!(f, "number of players must be between 2 and 4, got {count}")
            }
            EngineError::InsufficientTiles { needed, available } => {
                write!(f, "not enough tiles in wall for dealing: need {needed}, have {available}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

pub type Result<T> = std::result::Result<T, EngineError>;
