// src/config/timing.rs
//! アニメーションの間隔 (ミリ秒) の定数だよ。
//! 論理的な状態は一瞬で切り替わって、見た目だけこの間隔でパラパラ追いつく方式！

/// 配り直しのとき、場札の行が1つ進むごとに足される待ち時間。
pub const DEAL_ROW_STAGGER_MS: i32 = 75;

/// 配り直しのとき、カード1枚ごとに足される待ち時間。
pub const DEAL_CARD_STAGGER_MS: i32 = 50;

/// 山札から捨て札にめくるとき、カード1枚ごとの待ち時間。
pub const TURN_STOCK_STAGGER_MS: i32 = 50;

/// 捨て札を山札に戻すとき、カード1枚ごとの待ち時間。
pub const RESET_STOCK_STAGGER_MS: i32 = 25;

/// 場札の複数枚移動にかける合計時間。枚数で割って1枚あたりの間隔にする。
pub const RUN_DROP_TOTAL_MS: i32 = 250;
