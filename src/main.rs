/// 可执行文件入口（演示用）
///
/// 用法：`hkmj-demo [seed]`

use hkmj_engine::{advice_summary, analyze_hand, sort_tiles, GameSummary, Wall, Wind};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(12345);

    println!("港式麻将手牌分析演示（种子 {seed}）");

    let mut wall = Wall::seeded(seed);
    println!("创建牌墙：{} 张牌", wall.total_count());

    let mut hands = match wall.deal(4) {
        Ok(hands) => hands,
        Err(e) => {
            eprintln!("发牌失败：{e}");
            return;
        }
    };
    println!("发牌完成，剩余：{} 张", wall.remaining_count());

    let mut hand = hands.swap_remove(0);
    sort_tiles(&mut hand);
    let names: Vec<String> = hand.iter().map(|t| t.display_name()).collect();
    println!("东家手牌：{}", names.join(" "));

    let Some(drawn) = wall.draw() else {
        println!("牌墙已空");
        return;
    };
    println!("摸牌：{}", drawn.display_name());

    let summary = GameSummary {
        round: 1,
        seat_wind: Wind::East,
        prevalent_wind: Wind::East,
        ..GameSummary::new(hand).with_drawn(drawn)
    };

    match analyze_hand(&summary).and_then(|advice| {
        let text = advice_summary(&summary, &advice)?;
        Ok((advice, text))
    }) {
        Ok((advice, text)) => {
            println!("{text}");
            for alt in &advice.alternatives {
                let tile = alt.tile.map(|t| t.display_name()).unwrap_or_default();
                println!("  备选 {tile}（优先级 {}）：{}", alt.priority, alt.reasoning);
            }
        }
        Err(e) => eprintln!("分析失败：{e}"),
    }
}
