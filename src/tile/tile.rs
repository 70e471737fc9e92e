use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 花色
///
/// 三种数牌（万、筒、条）加字牌，排序即显示顺序
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Man = 0,
    Pin = 1,
    Sou = 2,
    Honor = 3,
}

impl Suit {
    /// 三种数牌花色
    pub fn numbered() -> [Suit; 3] {
        [Suit::Man, Suit::Pin, Suit::Sou]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Man => "man",
            Suit::Pin => "pin",
            Suit::Sou => "sou",
            Suit::Honor => "honor",
        }
    }
}

/// 字牌：四风 + 三元
///
/// 声明顺序即显示顺序：东、南、西、北、中、发、白
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Honor {
    East,
    South,
    West,
    North,
    Red,
    Green,
    White,
}

impl Honor {
    pub const ALL: [Honor; 7] = [
        Honor::East,
        Honor::South,
        Honor::West,
        Honor::North,
        Honor::Red,
        Honor::Green,
        Honor::White,
    ];

    pub const DRAGONS: [Honor; 3] = [Honor::Red, Honor::Green, Honor::White];

    pub fn name(&self) -> &'static str {
        match self {
            Honor::East => "east",
            Honor::South => "south",
            Honor::West => "west",
            Honor::North => "north",
            Honor::Red => "red",
            Honor::Green => "green",
            Honor::White => "white",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == name)
    }

    /// 字牌内部索引（0-6）
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_dragon(&self) -> bool {
        matches!(self, Honor::Red | Honor::Green | Honor::White)
    }
}

/// 风位（门风 / 圈风）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wind {
    #[default]
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    pub fn name(&self) -> &'static str {
        Honor::from(*self).name()
    }
}

impl From<Wind> for Honor {
    fn from(wind: Wind) -> Self {
        match wind {
            Wind::East => Honor::East,
            Wind::South => Honor::South,
            Wind::West => Honor::West,
            Wind::North => Honor::North,
        }
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 牌的种类（不区分具体副本）
///
/// 共 34 种：万、筒、条各 1-9，加 7 种字牌。
/// 派生的 `Ord` 即显示顺序：万 < 筒 < 条 < 字，字牌内按 `Honor` 声明顺序。
/// 序列化为规范键字符串（`man-1`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Man(u8),
    Pin(u8),
    Sou(u8),
    Honor(Honor),
}

impl TileKind {
    /// 牌的种类数：34
    pub const COUNT: usize = 34;

    /// 数牌种类数：27
    pub const NUMBERED_COUNT: usize = 27;

    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// 创建数牌，验证输入有效性
    pub fn numbered(suit: Suit, rank: u8) -> Option<Self> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return None;
        }
        match suit {
            Suit::Man => Some(TileKind::Man(rank)),
            Suit::Pin => Some(TileKind::Pin(rank)),
            Suit::Sou => Some(TileKind::Sou(rank)),
            Suit::Honor => None,
        }
    }

    pub fn suit(&self) -> Suit {
        match self {
            TileKind::Man(_) => Suit::Man,
            TileKind::Pin(_) => Suit::Pin,
            TileKind::Sou(_) => Suit::Sou,
            TileKind::Honor(_) => Suit::Honor,
        }
    }

    /// 数牌的数字（字牌返回 `None`）
    pub fn rank(&self) -> Option<u8> {
        match self {
            TileKind::Man(r) | TileKind::Pin(r) | TileKind::Sou(r) => Some(*r),
            TileKind::Honor(_) => None,
        }
    }

    pub fn honor(&self) -> Option<Honor> {
        match self {
            TileKind::Honor(h) => Some(*h),
            _ => None,
        }
    }

    pub fn is_honor(&self) -> bool {
        matches!(self, TileKind::Honor(_))
    }

    /// 幺九数牌（1 或 9）
    pub fn is_terminal(&self) -> bool {
        matches!(self.rank(), Some(1) | Some(9))
    }

    /// 转换为 34 种牌的索引
    ///
    /// - 万子：0-8
    /// - 筒子：9-17
    /// - 条子：18-26
    /// - 字牌：27-33
    ///
    /// 数牌的点数必须在 1-9 之间，请用 [`TileKind::numbered`] 构造
    pub fn index(&self) -> usize {
        if let Some(rank) = self.rank() {
            debug_assert!(
                (Self::MIN_RANK..=Self::MAX_RANK).contains(&rank),
                "numbered tile rank out of range: {self:?}"
            );
        }
        match self {
            TileKind::Man(r) => (*r - 1) as usize,
            TileKind::Pin(r) => 9 + (*r - 1) as usize,
            TileKind::Sou(r) => 18 + (*r - 1) as usize,
            TileKind::Honor(h) => Self::NUMBERED_COUNT + h.index(),
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        let rank = (index % 9) as u8 + 1;
        match index {
            0..=8 => Some(TileKind::Man(rank)),
            9..=17 => Some(TileKind::Pin(rank)),
            18..=26 => Some(TileKind::Sou(rank)),
            27..=33 => Some(TileKind::Honor(Honor::ALL[index - Self::NUMBERED_COUNT])),
            _ => None,
        }
    }

    /// 全部 34 种牌，按显示顺序
    pub fn all() -> impl Iterator<Item = TileKind> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }

    /// 规范键，如 `man-1`、`honor-east`
    ///
    /// 用于计数和集合成员判断；改良牌列表按该键的字典序排列
    pub fn key(&self) -> String {
        match self {
            TileKind::Honor(h) => format!("honor-{}", h.name()),
            _ => format!("{}-{}", self.suit().name(), self.rank().unwrap_or_default()),
        }
    }

    /// `key` 的逆运算
    pub fn from_key(key: &str) -> Option<Self> {
        let (suit, value) = key.split_once('-')?;
        match suit {
            "honor" => Honor::from_name(value).map(TileKind::Honor),
            "man" => Self::numbered(Suit::Man, value.parse().ok()?),
            "pin" => Self::numbered(Suit::Pin, value.parse().ok()?),
            "sou" => Self::numbered(Suit::Sou, value.parse().ok()?),
            _ => None,
        }
    }

    /// 显示名称：数牌为 `3pin`，字牌为 `red`
    pub fn display_name(&self) -> String {
        match self {
            TileKind::Honor(h) => h.name().to_string(),
            _ => format!("{}{}", self.rank().unwrap_or_default(), self.suit().name()),
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for TileKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for TileKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        TileKind::from_key(&key).ok_or_else(|| de::Error::custom(format!("unknown tile key `{key}`")))
    }
}

/// 一张具体的牌
///
/// `id` 区分同种牌的不同副本，牌墙生成的 id 为 `kind.index() * 4 + copy`。
/// 派生的相等比较同时比较种类和 id（同一实例）；按种类比较请用 [`Tile::same_kind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub id: u32,
}

impl Tile {
    /// 每种牌的副本数
    pub const COPIES: u32 = 4;

    /// 创建一张牌，id 取该种牌第一个副本的 id
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            id: kind.index() as u32 * Self::COPIES,
        }
    }

    /// 使用指定 id 创建一张牌
    pub fn with_id(kind: TileKind, id: u32) -> Self {
        Self { kind, id }
    }

    pub fn suit(&self) -> Suit {
        self.kind.suit()
    }

    pub fn is_honor(&self) -> bool {
        self.kind.is_honor()
    }

    pub fn key(&self) -> String {
        self.kind.key()
    }

    pub fn display_name(&self) -> String {
        self.kind.display_name()
    }

    /// 检查是否为同一种牌（不考虑具体副本）
    pub fn same_kind(&self, other: &Tile) -> bool {
        self.kind == other.kind
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Tile::new(kind)
    }
}

/// 按显示顺序排序（稳定排序，同种牌保持原有先后）
pub fn sort_tiles(tiles: &mut [Tile]) {
    tiles.sort_by_key(|t| t.kind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_rejects_out_of_range_rank() {
        assert_eq!(TileKind::numbered(Suit::Man, 0), None);
        assert_eq!(TileKind::numbered(Suit::Sou, 10), None);
        assert_eq!(TileKind::numbered(Suit::Honor, 1), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rank out of range")]
    fn test_index_rejects_rank_ten() {
        TileKind::Man(10).index();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rank out of range")]
    fn test_index_rejects_rank_zero() {
        TileKind::Pin(0).index();
    }

    #[test]
    fn test_numbered_creation() {
        let kind = TileKind::numbered(Suit::Pin, 9).unwrap();
        assert_eq!(kind.suit(), Suit::Pin);
        assert_eq!(kind.rank(), Some(9));

        assert!(TileKind::numbered(Suit::Man, 0).is_none());
        assert!(TileKind::numbered(Suit::Man, 10).is_none());
        assert!(TileKind::numbered(Suit::Honor, 1).is_none());
    }

    #[test]
    fn test_index_conversion() {
        for (i, kind) in TileKind::all().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_index(i), Some(kind));
        }
        assert_eq!(TileKind::all().count(), TileKind::COUNT);
        assert!(TileKind::from_index(34).is_none());
    }

    #[test]
    fn test_key_and_name() {
        assert_eq!(TileKind::Man(1).key(), "man-1");
        assert_eq!(TileKind::Honor(Honor::East).key(), "honor-east");
        assert_eq!(TileKind::Sou(7).display_name(), "7sou");
        assert_eq!(TileKind::Honor(Honor::Green).display_name(), "green");

        for kind in TileKind::all() {
            assert_eq!(TileKind::from_key(&kind.key()), Some(kind));
        }
        assert!(TileKind::from_key("man-0").is_none());
        assert!(TileKind::from_key("honor-blue").is_none());
        assert!(TileKind::from_key("man").is_none());
    }

    #[test]
    fn test_same_kind_vs_identity() {
        let a = Tile::with_id(TileKind::Man(5), 16);
        let b = Tile::with_id(TileKind::Man(5), 17);
        assert!(a.same_kind(&b));
        assert_ne!(a, b);
        assert!(!a.same_kind(&Tile::new(TileKind::Pin(5))));
    }

    #[test]
    fn test_display_order() {
        let mut tiles: Vec<Tile> = [
            TileKind::Honor(Honor::White),
            TileKind::Sou(1),
            TileKind::Honor(Honor::East),
            TileKind::Man(9),
            TileKind::Pin(2),
            TileKind::Man(3),
            TileKind::Honor(Honor::North),
        ]
        .into_iter()
        .map(Tile::new)
        .collect();

        sort_tiles(&mut tiles);
        let kinds: Vec<TileKind> = tiles.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TileKind::Man(3),
                TileKind::Man(9),
                TileKind::Pin(2),
                TileKind::Sou(1),
                TileKind::Honor(Honor::East),
                TileKind::Honor(Honor::North),
                TileKind::Honor(Honor::White),
            ]
        );
    }

    #[test]
    fn test_terminal_and_honor() {
        assert!(TileKind::Man(1).is_terminal());
        assert!(TileKind::Sou(9).is_terminal());
        assert!(!TileKind::Pin(5).is_terminal());
        assert!(!TileKind::Honor(Honor::Red).is_terminal());
        assert!(TileKind::Honor(Honor::Red).is_honor());
        assert!(Honor::Red.is_dragon());
        assert!(!Honor::from(Wind::West).is_dragon());
    }
}
