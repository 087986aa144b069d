// src/systems/mod.rs
//! GameState を書き換える「実行役」を集めたモジュールだよ。
//! ルール判定 (logic) が OK を出した操作だけが、ここで実際に適用される。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod undo;
pub mod win_condition_system;

pub use deal_system::DealSystem;
pub use move_card_system::MoveCardSystem;
pub use stock_system::StockSystem;
pub use undo::{MoveRecord, UndoStack};
pub use win_condition_system::WinConditionSystem;

// --- システム横断のテスト ---
// どのシャッフル結果でも成り立つ性質だけを確かめる:
// 「52枚は常にどこか1つの山にいる」「全操作はアンドゥで完全に巻き戻せる」
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Card;
    use crate::components::game_state::GameState;
    use std::collections::HashSet;

    // 52枚がちょうど1回ずつ存在するかチェックするヘルパー
    fn assert_partition(state: &GameState) {
        assert_eq!(state.card_count(), 52, "カードの総数が52枚じゃない！");
        let mut seen = HashSet::new();
        for (_, pile) in state.piles() {
            for card in pile.cards() {
                assert!(seen.insert((card.suit, card.rank)), "カードが重複してる！ {:?}", card);
            }
        }
    }

    #[test]
    fn random_playthrough_keeps_partition_and_undoes_to_deal() {
        let deal_system = DealSystem::default();
        let stock_system = StockSystem::new();
        let move_system = MoveCardSystem::new();

        let mut state = GameState::new();
        deal_system.execute(&mut state);
        assert_partition(&state);

        // 配った直後の状態を覚えておく。ここまで巻き戻れたら勝ち！
        let after_deal = state.clone();
        let mut undo = UndoStack::new();

        // 適当にゲームを進める: 山札をめくりつつ、一番上のカードの
        // 自動移動を試しまくる。どのシャッフルでも成り立つ操作だけ！
        for _ in 0..40 {
            if let Some(record) = stock_system.advance(&mut state) {
                undo.record(record);
            }
            assert_partition(&state);

            // 捨て札と各場札の一番上で自動移動を試す
            let mut top_ids: Vec<usize> = Vec::new();
            if let Some(card) = state.waste.top() {
                top_ids.push(card.id());
            }
            for pile in state.tableaus.iter() {
                if let Some(card) = pile.top() {
                    top_ids.push(card.id());
                }
            }
            for card_id in top_ids {
                if let Some(record) = move_system.request_auto_play(&mut state, card_id) {
                    undo.record(record);
                }
                assert_partition(&state);
            }
        }

        // 全部アンドゥすると、配った直後の状態にビット単位で戻るはず！
        while undo.undo_last(&mut state) {
            assert_partition(&state);
        }
        assert_eq!(state, after_deal, "全アンドゥで配った直後の状態に戻るはず！");

        // おまけ: カードIDの全単射もチェック
        let ids: HashSet<usize> = state
            .piles()
            .flat_map(|(_, pile)| pile.cards().iter().map(Card::id))
            .collect();
        assert_eq!(ids.len(), 52);
        println!("ランダムプレイスルーの不変条件テスト、成功！🎉");
    }
}
