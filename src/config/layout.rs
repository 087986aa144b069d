// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードやスタックの座標、オフセットなど。座標は Canvas の左上が原点！

pub const CARD_WIDTH: f32 = 100.0; // カードの幅
pub const CARD_HEIGHT: f32 = 145.0; // カードの高さ

// --- 各エリアの開始位置 ---
pub const STOCK_POS_X: f32 = 20.0; // 山札のX座標
pub const STOCK_POS_Y: f32 = 20.0; // 山札のY座標

pub const WASTE_POS_X: f32 = 170.0; // 捨て札置き場のX座標
pub const WASTE_POS_Y: f32 = 20.0; // 捨て札置き場のY座標

pub const FOUNDATION_START_X: f32 = 470.0; // 上がり札置き場 (Foundation) の開始X座標
pub const FOUNDATION_START_Y: f32 = 20.0; // 上がり札置き場のY座標
pub const FOUNDATION_X_OFFSET: f32 = 150.0; // 上がり札置き場間のX方向の間隔

pub const TABLEAU_START_X: f32 = 20.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 190.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = 150.0; // 場札の列間のX方向の間隔
pub const TABLEAU_Y_OFFSET_FACE_DOWN: f32 = 15.0; // 場札の裏向きカードのY方向オフセット
pub const TABLEAU_Y_OFFSET_FACE_UP: f32 = 30.0; // 場札の表向きカードのY方向オフセット

// --- スコア表示 ---
pub const SCORE_POS_X: f64 = 330.0; // スコア文字列のX座標
pub const SCORE_POS_Y: f64 = 100.0; // スコア文字列のY座標
