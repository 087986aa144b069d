// src/config/scoring.rs
//! スコアの点数表だよ。点数はこの3つだけ！

/// 組札にカードが1枚上がるたびに +5、降りるたびに -5。
pub const FOUNDATION_CARD_POINTS: i32 = 5;

/// 配り直し1回につき払うコスト。
pub const REDEAL_COST: i32 = 52;

/// 山札を1回クリックしたときにめくる最大枚数。
pub const STOCK_TURN_COUNT: usize = 3;
