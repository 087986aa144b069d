// src/logic/mod.rs
//! ゲームの「判断」を集めたモジュールだよ。
//! デッキ生成、ルール判定、自動移動先の探索。どれも状態を壊さない読み取り専用！

pub mod auto_move;
pub mod deck;
pub mod rules;
