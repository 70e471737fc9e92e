use crate::tile::{Tile, TileKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 牌组类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeldKind {
    /// 顺子
    Sequence,
    /// 刻子
    Triplet,
    /// 明杠
    Quad,
    /// 暗杠
    ConcealedQuad,
}

impl MeldKind {
    /// 是否为自己摸齐的暗组
    pub fn is_concealed(&self) -> bool {
        matches!(self, MeldKind::ConcealedQuad)
    }

    /// 该牌组应有的张数
    pub fn tile_count(&self) -> usize {
        match self {
            MeldKind::Sequence | MeldKind::Triplet => 3,
            MeldKind::Quad | MeldKind::ConcealedQuad => 4,
        }
    }
}

/// 牌组（副露或暗杠）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: SmallVec<[Tile; 4]>,
    /// 被吃/碰/杠的玩家，暗杠为 `None`
    pub from_player: Option<u8>,
}

impl Meld {
    /// 暗杠
    pub fn concealed_quad(kind: TileKind) -> Self {
        Self {
            kind: MeldKind::ConcealedQuad,
            tiles: (0..Tile::COPIES)
                .map(|copy| Tile::with_id(kind, kind.index() as u32 * Tile::COPIES + copy))
                .collect(),
            from_player: None,
        }
    }

    pub fn is_concealed(&self) -> bool {
        self.kind.is_concealed()
    }
}

/// 鸣牌类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    /// 吃（顺子）
    #[serde(alias = "sequence-claim")]
    Chi,
    /// 碰（刻子）
    #[serde(alias = "triplet-claim")]
    Pon,
    /// 明杠
    #[serde(alias = "quad-claim")]
    Kan,
}

impl CallKind {
    pub fn name(&self) -> &'static str {
        match self {
            CallKind::Chi => "chi",
            CallKind::Pon => "pon",
            CallKind::Kan => "kan",
        }
    }

    /// 鸣牌后形成的牌组类型
    pub fn meld_kind(&self) -> MeldKind {
        match self {
            CallKind::Chi => MeldKind::Sequence,
            CallKind::Pon => MeldKind::Triplet,
            CallKind::Kan => MeldKind::Quad,
        }
    }
}

/// 可选的鸣牌
///
/// `tiles[0]` 是别家打出的那张牌，其余是自己手里要拿出来的牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallOption {
    #[serde(rename = "type")]
    pub kind: CallKind,
    pub tiles: Vec<Tile>,
    pub from_player: u8,
}

impl CallOption {
    pub fn new(kind: CallKind, tiles: Vec<Tile>, from_player: u8) -> Self {
        Self {
            kind,
            tiles,
            from_player,
        }
    }

    /// 被鸣的那张牌
    pub fn claimed_tile(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    /// 需要从手牌中拿出的牌
    pub fn own_tiles(&self) -> &[Tile] {
        self.tiles.get(1..).unwrap_or(&[])
    }

    /// 鸣牌后手里剩下的牌
    ///
    /// 按种类逐张移除 `own_tiles`；手里缺少其中任何一张时返回 `None`
    pub fn remaining_hand(&self, hand: &[Tile]) -> Option<Vec<Tile>> {
        let mut rest = hand.to_vec();
        for tile in self.own_tiles() {
            let index = rest.iter().position(|t| t.same_kind(tile))?;
            rest.remove(index);
        }
        Some(rest)
    }

    /// 转为副露牌组
    pub fn to_meld(&self) -> Meld {
        Meld {
            kind: self.kind.meld_kind(),
            tiles: self.tiles.iter().copied().collect(),
            from_player: Some(self.from_player),
        }
    }
}
