// src/systems/win_condition_system.rs
//! 勝利判定システムだよ！🏆
//! 組札の合計枚数を数えて、GameState の status を付け替えるだけの小さいシステム。

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules;
use log::info;

/// 勝利判定を行うシステム。状態は持たない！
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 組札の枚数からゲームの status を更新するよ。
    /// 52枚全部が組札に上がっていたら `Won`、そうでなければ `Playing`。
    /// アンドゥで組札からカードが降りたときも、これで Playing に戻る。
    pub fn run(&self, state: &mut GameState) {
        let count = state.foundation_card_count();
        let won = rules::check_win_condition(count);
        if won && state.status != GameStatus::Won {
            info!("🏆 全カードが組札に上がりました！勝利！");
        }
        state.status = if won { GameStatus::Won } else { GameStatus::Playing };
    }
}
