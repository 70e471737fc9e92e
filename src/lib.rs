/// 港式麻将手牌分析引擎
///
/// 向听计算、胡牌判定、打牌建议与计分

pub mod error;
pub mod game;
pub mod tile;
pub mod utils;

// 重新导出常用类型
pub use error::{EngineError, Result};
pub use game::advisor::{
    advice_summary, analyze_hand, evaluate_defensive_value, Action, AdviceResult, Advisor, Alternative,
    GameSummary,
};
pub use game::call::{CallKind, CallOption, Meld, MeldKind};
pub use game::config::AdvisorConfig;
pub use game::scoring::{score_hand, ScoreResult, Scorer, WinContext};
pub use game::shanten::{calculate_shanten, ShantenCalculator, ShantenResult};
pub use tile::{is_winning_hand, sort_tiles, Honor, Suit, Tile, TileCounts, TileKind, Wall, WinChecker, Wind};
pub use utils::LcgRng;
