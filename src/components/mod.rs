// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// ゲームの「データ」にあたる型たちはここに集めてある。整理整頓！🧹✨
pub mod card;
pub mod pile;
pub mod game_state;
pub mod position;
pub mod dragging_info;
