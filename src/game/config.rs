use serde::{Deserialize, Serialize};

/// 建议策略参数
///
/// 鸣牌评分的权重都是经验值，可按需调整
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorConfig {
    /// 鸣牌评分：每降低一向听的分值
    pub call_shanten_weight: i32,
    /// 吃（顺子）的加分
    pub run_call_bonus: i32,
    /// 鸣字牌的扣分
    pub honor_call_penalty: i32,
    /// 鸣牌评分达到此值才建议鸣牌
    pub call_threshold: i32,
    /// 鸣牌建议的最高优先级
    pub max_call_priority: u8,

    /// 打牌建议附带的备选数
    pub discard_alternatives: usize,
    /// 备选相对首选降低的优先级
    pub alternative_priority_drop: u8,
    /// 打牌理由里列出的有效牌数
    pub preview_tiles: usize,
    /// 听牌/一向听时列出的有效牌数
    pub waiting_preview_tiles: usize,
    /// 并行评估各个打牌选择
    pub parallel_discards: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            call_shanten_weight: 3,
            run_call_bonus: 1,
            honor_call_penalty: 1,
            call_threshold: 7,
            max_call_priority: 9,

            discard_alternatives: 3,
            alternative_priority_drop: 2,
            preview_tiles: 3,
            waiting_preview_tiles: 5,
            parallel_discards: true,
        }
    }
}
