use super::call::{CallKind, CallOption};
use super::config::AdvisorConfig;
use super::constants::*;
use super::shanten::{ShantenCalculator, ShantenResult};
use crate::error::Result;
use crate::tile::{Tile, WinChecker, Wind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// 建议的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Discard,
    Keep,
    Call,
}

/// 备选建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub action: Action,
    pub tile: Option<Tile>,
    pub reasoning: String,
    pub priority: u8,
}

/// 建议结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub action: Action,
    /// 建议打出/保留的牌，或被鸣的牌
    pub tile: Option<Tile>,
    pub reasoning: String,
    /// 1-10，越大越紧要
    pub priority: u8,
    /// 按优先顺序排列的次选
    pub alternatives: Vec<Alternative>,
}

impl AdviceResult {
    fn new(action: Action, tile: Option<Tile>, reasoning: String, priority: u8) -> Self {
        Self {
            action,
            tile,
            reasoning,
            priority: clamp_priority(priority as i32),
            alternatives: Vec::new(),
        }
    }
}

/// 当前局面
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub hand: Vec<Tile>,
    #[serde(default)]
    pub drawn_tile: Option<Tile>,
    #[serde(default)]
    pub available_calls: Vec<CallOption>,
    pub round: u32,
    #[serde(alias = "playerWind")]
    pub seat_wind: Wind,
    pub prevalent_wind: Wind,
    /// 宝牌指示牌，港式基本规则下为空
    #[serde(default, alias = "dora")]
    pub bonus_tiles: Vec<Tile>,
}

impl GameSummary {
    pub fn new(hand: Vec<Tile>) -> Self {
        Self {
            hand,
            ..Self::default()
        }
    }

    pub fn with_drawn(mut self, tile: Tile) -> Self {
        self.drawn_tile = Some(tile);
        self
    }

    pub fn with_calls(mut self, calls: Vec<CallOption>) -> Self {
        self.available_calls = calls;
        self
    }

    /// 手牌加上摸到的牌
    pub fn current_hand(&self) -> Vec<Tile> {
        let mut tiles = self.hand.clone();
        tiles.extend(self.drawn_tile);
        tiles
    }
}

/// 一个打牌选择的评估
#[derive(Debug, Clone)]
struct DiscardOption {
    index: usize,
    tile: Tile,
    result: ShantenResult,
}

impl DiscardOption {
    /// 向听小的在前，同向听时有效牌多的在前，再按手牌位置
    fn rank_key(&self) -> (i8, Reverse<usize>, usize) {
        (self.result.shanten, Reverse(self.result.improvements.len()), self.index)
    }
}

/// 打牌/鸣牌建议器
///
/// 无状态：每次调用都从局面重新计算
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// 分析局面并给出建议
    ///
    /// 依次检查：
    /// 1. 摸到的牌是否胡牌
    /// 2. 是否有值得的鸣牌
    /// 3. 14 张时打哪张
    /// 4. 13 张时等什么牌
    ///
    /// # Errors
    ///
    /// 手牌张数不合法时返回 `InvalidHandSize`
    pub fn analyze(&self, summary: &GameSummary) -> Result<AdviceResult> {
        let current = summary.current_hand();

        if let Some(drawn) = summary.drawn_tile {
            ShantenCalculator::validate_size(current.len(), 0)?;
            if WinChecker::is_winning_hand(&current) {
                log::debug!("drawn tile {} completes the hand", drawn.key());
                return Ok(AdviceResult::new(
                    Action::Keep,
                    Some(drawn),
                    "Winning hand! Declare mahjong.".to_string(),
                    WIN_PRIORITY,
                ));
            }
        }

        if !summary.available_calls.is_empty() {
            if let Some(advice) = self.analyze_calls(&summary.hand, &summary.available_calls)? {
                return Ok(advice);
            }
        }

        if current.len() == WinChecker::WINNING_SIZE {
            return self.analyze_discards(&current);
        }

        self.analyze_waiting(&summary.hand)
    }

    /// 评估所有鸣牌，最优的达到阈值才返回
    fn analyze_calls(&self, hand: &[Tile], calls: &[CallOption]) -> Result<Option<AdviceResult>> {
        let before = ShantenCalculator::calculate(hand)?;
        let scores: Vec<i32> = calls
            .iter()
            .map(|call| self.evaluate_call(hand, call, before.shanten))
            .collect();

        let mut best: Option<usize> = None;
        for (i, &score) in scores.iter().enumerate() {
            if best.map_or(true, |b| score > scores[b]) {
                best = Some(i);
            }
        }
        let Some(best) = best else {
            return Ok(None);
        };

        let best_score = scores[best];
        if best_score < self.config.call_threshold {
            log::debug!(
                "best call {} scored {}, below threshold {}",
                calls[best].kind.name(),
                best_score,
                self.config.call_threshold
            );
            return Ok(None);
        }

        let call = &calls[best];
        let priority = best_score.min(self.config.max_call_priority as i32);
        let mut advice = AdviceResult::new(
            Action::Call,
            call.claimed_tile(),
            format!(
                "Call {} to improve hand structure. This gives you a completed meld and better chances.",
                call.kind.name()
            ),
            clamp_priority(priority),
        );
        advice.alternatives = calls
            .iter()
            .zip(&scores)
            .enumerate()
            .filter(|&(i, _)| i != best)
            .map(|(_, (other, &score))| Alternative {
                action: Action::Call,
                tile: other.claimed_tile(),
                reasoning: format!("Alternative: call {}", other.kind.name()),
                priority: clamp_priority(score),
            })
            .collect();

        log::debug!("recommending {} with priority {}", call.kind.name(), advice.priority);
        Ok(Some(advice))
    }

    /// 鸣牌评分
    ///
    /// 鸣牌后剩余的暗手按一个副露计算向听，向听下降越多分越高。
    /// 手里凑不出这组牌时记 0 分
    fn evaluate_call(&self, hand: &[Tile], call: &CallOption, before: i8) -> i32 {
        let Some(rest) = call.remaining_hand(hand) else {
            log::trace!("call {} needs tiles not in hand", call.kind.name());
            return 0;
        };
        let after = match ShantenCalculator::calculate_with_melds(&rest, 1) {
            Ok(result) => result.shanten,
            Err(e) => {
                log::trace!("call {} not evaluated: {e}", call.kind.name());
                return 0;
            }
        };

        let mut score = (before as i32 - after as i32) * self.config.call_shanten_weight;
        if call.kind == CallKind::Chi {
            score += self.config.run_call_bonus;
        }
        if call.claimed_tile().is_some_and(|t| t.is_honor()) {
            score -= self.config.honor_call_penalty;
        }
        log::trace!("call {} shanten {} -> {}, score {}", call.kind.name(), before, after, score);
        score.max(0)
    }

    /// 14 张：逐张试打，按结果排序
    fn analyze_discards(&self, hand: &[Tile]) -> Result<AdviceResult> {
        let evaluate = |index: usize| -> Result<DiscardOption> {
            let mut rest = hand.to_vec();
            let tile = rest.remove(index);
            Ok(DiscardOption {
                index,
                tile,
                result: ShantenCalculator::calculate(&rest)?,
            })
        };

        let mut options: Vec<DiscardOption> = if self.config.parallel_discards {
            (0..hand.len()).into_par_iter().map(evaluate).collect::<Result<Vec<_>>>()?
        } else {
            (0..hand.len()).map(evaluate).collect::<Result<Vec<_>>>()?
        };
        options.sort_by_key(DiscardOption::rank_key);

        let Some(best) = options.first() else {
            return self.analyze_waiting(hand);
        };

        let (prefix, priority) = match best.result.shanten {
            0 => ("Discard this tile to reach tenpai (ready to win). ", DISCARD_TENPAI_PRIORITY),
            1 => ("Good discard that brings you closer to tenpai. ", DISCARD_ONE_SHANTEN_PRIORITY),
            _ => ("Best available discard to improve hand structure. ", DISCARD_DEFAULT_PRIORITY),
        };
        let keys = best.result.improvement_keys();
        let more = if keys.len() > self.config.preview_tiles { "..." } else { "" };
        let reasoning = format!(
            "{prefix}This leaves {} useful tiles: {}{more}.",
            keys.len(),
            preview(&keys, self.config.preview_tiles)
        );

        let alt_priority = priority.saturating_sub(self.config.alternative_priority_drop).max(MIN_PRIORITY);
        let alternatives = options
            .iter()
            .skip(1)
            .take(self.config.discard_alternatives)
            .map(|option| Alternative {
                action: Action::Discard,
                tile: Some(option.tile),
                reasoning: format!(
                    "Alternative discard. Shanten: {}, {} useful tiles.",
                    option.result.shanten,
                    option.result.improvements.len()
                ),
                priority: alt_priority,
            })
            .collect();

        log::debug!(
            "discard {} -> shanten {}, {} useful tiles",
            best.tile.key(),
            best.result.shanten,
            keys.len()
        );

        let mut advice = AdviceResult::new(Action::Discard, Some(best.tile), reasoning, priority);
        advice.alternatives = alternatives;
        Ok(advice)
    }

    /// 13 张：说明听牌状态和有效牌
    fn analyze_waiting(&self, hand: &[Tile]) -> Result<AdviceResult> {
        let result = ShantenCalculator::calculate(hand)?;
        let keys = result.improvement_keys();

        let (reasoning, priority) = match result.shanten {
            0 => (
                format!(
                    "You're in tenpai! Wait for these tiles: {}.",
                    preview(&keys, self.config.waiting_preview_tiles)
                ),
                WAITING_TENPAI_PRIORITY,
            ),
            1 => (
                format!(
                    "One away from tenpai. Look for these useful tiles: {}.",
                    preview(&keys, self.config.waiting_preview_tiles)
                ),
                WAITING_ONE_SHANTEN_PRIORITY,
            ),
            _ => (
                format!(
                    "Focus on improving hand structure. {} tiles can help: {}.",
                    keys.len(),
                    preview(&keys, self.config.preview_tiles)
                ),
                WAITING_DEFAULT_PRIORITY,
            ),
        };

        log::debug!("waiting hand at shanten {}", result.shanten);
        Ok(AdviceResult::new(Action::Keep, None, reasoning, priority))
    }
}

/// 前 `n` 个键，逗号分隔
fn preview(keys: &[String], n: usize) -> String {
    keys.iter().take(n).map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn clamp_priority(priority: i32) -> u8 {
    priority.clamp(MIN_PRIORITY as i32, MAX_PRIORITY as i32) as u8
}

/// 用默认策略分析局面
pub fn analyze_hand(summary: &GameSummary) -> Result<AdviceResult> {
    Advisor::default().analyze(summary)
}

/// 评估一张牌的安全度（1-10）
///
/// 字牌和幺九较安全，场上已见的同种牌越多越安全，4-6 的中张较危险
pub fn evaluate_defensive_value(tile: &Tile, visible_tiles: &[Tile]) -> u8 {
    let visible = visible_tiles.iter().filter(|t| t.same_kind(tile)).count() as i32;

    let mut safety = BASE_SAFETY;
    if tile.is_honor() {
        safety += 2;
    } else if tile.kind.is_terminal() {
        safety += 1;
    }
    safety += visible.min(MAX_VISIBLE_BONUS);
    if matches!(tile.kind.rank(), Some(4..=6)) {
        safety -= 1;
    }

    clamp_priority(safety)
}

/// 一段话概括局面和建议
///
/// # Errors
///
/// 手牌张数不合法时返回 `InvalidHandSize`
pub fn advice_summary(summary: &GameSummary, advice: &AdviceResult) -> Result<String> {
    let current = summary.current_hand();
    let shanten = ShantenCalculator::calculate(&current)?.shanten;

    let mut text = format!(
        "Round {}, playing as {} wind. Hand size: {}, Shanten: {}. ",
        summary.round,
        summary.seat_wind,
        current.len(),
        shanten
    );
    match (advice.action, advice.tile) {
        (Action::Discard, Some(tile)) => text.push_str(&format!("Recommended discard: {}. ", tile.key())),
        (Action::Call, _) => text.push_str("Recommended call available. "),
        _ => {}
    }
    text.push_str(&format!("Priority: {}/10. {}", advice.priority, advice.reasoning));
    Ok(text)
}
