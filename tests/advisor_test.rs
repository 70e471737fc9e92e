use hkmj_engine::{
    advice_summary, analyze_hand, evaluate_defensive_value, Action, Advisor, AdvisorConfig, CallKind,
    CallOption, GameSummary, Honor, Suit, Tile, TileKind, Wind,
};

/// 解析 "123m 45p east" 形式的手牌
fn hand(spec: &str) -> Vec<Tile> {
    let mut tiles = Vec::new();
    for part in spec.split_whitespace() {
        if let Some(honor) = Honor::from_name(part) {
            tiles.push(Tile::new(TileKind::Honor(honor)));
            continue;
        }
        let (digits, suit) = part.split_at(part.len() - 1);
        let suit = match suit {
            "m" => Suit::Man,
            "p" => Suit::Pin,
            _ => Suit::Sou,
        };
        for d in digits.chars() {
            tiles.push(Tile::new(TileKind::numbered(suit, d.to_digit(10).unwrap() as u8).unwrap()));
        }
    }
    tiles
}

fn tile(spec: &str) -> Tile {
    hand(spec)[0]
}

/// 一向听：123456m 11p 55s 79s east
fn one_shanten_summary() -> GameSummary {
    let calls = vec![
        CallOption::new(CallKind::Pon, hand("5s 5s 5s"), 1),
        CallOption::new(CallKind::Chi, hand("8s 7s 9s"), 3),
        CallOption::new(CallKind::Pon, hand("east east east"), 2),
    ];
    GameSummary::new(hand("123456m 11p 55s 79s east")).with_calls(calls)
}

#[test]
fn test_completing_draw_always_keeps() {
    let cases = [
        ("12345678m 111p 11s", "9m"),
        ("123m 456p east east east red red red white", "white"),
        ("1112345678999m", "5m"),
    ];
    for (spec, drawn) in cases {
        let summary = GameSummary::new(hand(spec))
            .with_drawn(tile(drawn))
            .with_calls(vec![CallOption::new(CallKind::Chi, hand("3m 1m 2m"), 3)]);
        let advice = analyze_hand(&summary).unwrap();
        assert_eq!(advice.action, Action::Keep, "{spec}");
        assert_eq!(advice.priority, 10);
        assert_eq!(advice.tile, Some(tile(drawn)));
        assert_eq!(advice.reasoning, "Winning hand! Declare mahjong.");
    }
}

#[test]
fn test_calls_below_threshold_fall_through() {
    let advice = analyze_hand(&one_shanten_summary()).unwrap();
    assert_eq!(advice.action, Action::Keep);
    assert_eq!(advice.priority, 6);
    assert!(advice.reasoning.starts_with("One away from tenpai."));
    assert!(advice.alternatives.is_empty());
}

#[test]
fn test_best_call_with_lower_threshold() {
    let advisor = Advisor::new(AdvisorConfig {
        call_threshold: 3,
        ..AdvisorConfig::default()
    });
    let advice = advisor.analyze(&one_shanten_summary()).unwrap();

    // 吃 8s：一向听 -> 听牌，3 分 + 吃牌 1 分
    assert_eq!(advice.action, Action::Call);
    assert_eq!(advice.priority, 4);
    assert_eq!(advice.tile.map(|t| t.kind), Some(TileKind::Sou(8)));
    assert!(advice.reasoning.starts_with("Call chi"));

    assert_eq!(advice.alternatives.len(), 2);
    assert_eq!(advice.alternatives[0].action, Action::Call);
    assert_eq!(advice.alternatives[0].tile.map(|t| t.kind), Some(TileKind::Sou(5)));
    assert_eq!(advice.alternatives[0].priority, 3);
    // 手里只有一张东，评分为 0，优先级取下限
    assert_eq!(advice.alternatives[1].priority, 1);
}

#[test]
fn test_discard_ranking() {
    let summary = GameSummary::new(hand("12345678m 111p 11s")).with_drawn(tile("north"));
    let advice = analyze_hand(&summary).unwrap();
    assert_eq!(advice.action, Action::Discard);
    assert_eq!(advice.tile.map(|t| t.kind), Some(TileKind::Honor(Honor::North)));
    assert_eq!(advice.priority, 9);
    assert_eq!(
        advice.reasoning,
        "Discard this tile to reach tenpai (ready to win). This leaves 3 useful tiles: man-3, man-6, man-9."
    );
    assert_eq!(advice.alternatives.len(), 3);
    for alt in &advice.alternatives {
        assert_eq!(alt.action, Action::Discard);
        assert_eq!(alt.priority, 7);
        assert!(alt.reasoning.starts_with("Alternative discard. Shanten: 1"));
    }
}

#[test]
fn test_fourteen_tile_hand_without_draw() {
    let advice = analyze_hand(&GameSummary::new(hand("159m 159p 159s east south west north red"))).unwrap();
    assert_eq!(advice.action, Action::Discard);
    assert_eq!(advice.priority, 6);
    assert!(advice.reasoning.starts_with("Best available discard to improve hand structure."));
    assert!(advice.reasoning.ends_with("..."));
}

#[test]
fn test_waiting_far_from_tenpai() {
    let advice = analyze_hand(&GameSummary::new(hand("159m 159p 159s east south west north"))).unwrap();
    assert_eq!(advice.action, Action::Keep);
    assert_eq!(advice.priority, 4);
    assert_eq!(
        advice.reasoning,
        "Focus on improving hand structure. 31 tiles can help: honor-east, honor-north, honor-south."
    );
}

#[test]
fn test_analysis_is_deterministic() {
    let summary = GameSummary::new(hand("1133557m 2468p east red")).with_drawn(tile("3p"));
    let first = analyze_hand(&summary).unwrap();
    for _ in 0..3 {
        assert_eq!(analyze_hand(&summary).unwrap(), first);
    }
}

#[test]
fn test_defensive_value_honor_at_least_middle() {
    let honor = tile("green");
    for rank in 2..=8 {
        let numbered = Tile::new(TileKind::Pin(rank));
        for visible in 0..=4 {
            let honor_visible = vec![honor; visible];
            let numbered_visible = vec![numbered; visible];
            assert!(
                evaluate_defensive_value(&honor, &honor_visible)
                    >= evaluate_defensive_value(&numbered, &numbered_visible)
            );
        }
    }
}

#[test]
fn test_defensive_value_range() {
    for kind in TileKind::all() {
        let tile = Tile::new(kind);
        for visible in 0..=6 {
            let value = evaluate_defensive_value(&tile, &vec![tile; visible]);
            assert!((1..=10).contains(&value));
        }
    }
}

#[test]
fn test_summary_text() {
    let summary = GameSummary {
        round: 3,
        seat_wind: Wind::West,
        prevalent_wind: Wind::South,
        ..GameSummary::new(hand("12345678m 111p 11s")).with_drawn(tile("north"))
    };
    let advice = analyze_hand(&summary).unwrap();
    let text = advice_summary(&summary, &advice).unwrap();
    assert_eq!(
        text,
        format!(
            "Round 3, playing as west wind. Hand size: 14, Shanten: 0. Recommended discard: honor-north. Priority: 9/10. {}",
            advice.reasoning
        )
    );
}

#[test]
fn test_summary_from_json() {
    let json = r#"{
        "hand": [{"kind": "man-1", "id": 0}, {"kind": "honor-red", "id": 124}],
        "availableCalls": [{"type": "pon", "tiles": [{"kind": "honor-red", "id": 125}], "fromPlayer": 2}],
        "round": 1,
        "playerWind": "east",
        "prevalentWind": "south",
        "dora": []
    }"#;
    let summary: GameSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.hand.len(), 2);
    assert_eq!(summary.drawn_tile, None);
    assert_eq!(summary.available_calls[0].kind, CallKind::Pon);
    assert_eq!(summary.seat_wind, Wind::East);
    assert_eq!(summary.prevalent_wind, Wind::South);
    assert!(summary.bonus_tiles.is_empty());
}
