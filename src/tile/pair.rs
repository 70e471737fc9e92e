use super::hand::TileCounts;
use super::tile::TileKind;

/// 雀头候选
///
/// 依次给出每种数量不少于 2 张的牌，以及去掉这一对之后的计数。
/// 胡牌判定和向听计算共用这一枚举
pub fn pair_candidates(counts: &TileCounts) -> impl Iterator<Item = (TileKind, TileCounts)> + '_ {
    counts.iter().filter(|&(_, c)| c >= 2).map(move |(kind, _)| {
        let mut rest = *counts;
        rest.remove_n(kind, 2);
        (kind, rest)
    })
}

/// 在所有雀头选择上取最小值
///
/// `allow_no_pair` 为真时额外评估"不取雀头"（传入 `None` 和原计数）。
/// 没有任何可评估的选择时返回 `None`
pub fn best_over_pairs<T, F>(counts: &TileCounts, allow_no_pair: bool, mut eval: F) -> Option<T>
where
    T: Ord,
    F: FnMut(Option<TileKind>, &TileCounts) -> T,
{
    let no_pair = allow_no_pair.then(|| eval(None, counts));
    pair_candidates(counts)
        .map(|(kind, rest)| eval(Some(kind), &rest))
        .chain(no_pair)
        .min()
}
