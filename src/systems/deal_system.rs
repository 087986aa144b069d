// src/systems/deal_system.rs

// === 使うものを宣言するよ！ ===
use crate::components::game_state::GameState;
use crate::config::scoring::REDEAL_COST;
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::systems::undo::MoveRecord;
use log::info;

// === 初期カード配置システム！ ===
// ゲーム開始時 (と配り直し時) に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)] // `DealSystem::default()` で簡単にインスタンスを作れるようにするおまじない ✨
pub struct DealSystem;

impl DealSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 引数
    /// - `state`: 可変参照 (&mut GameState)。中身を丸ごと配り直すから `&mut` が付いてるよ。
    ///
    /// # 処理の流れ
    /// 1. スコアだけ覚えておいて、状態を空っぽに作り直す (前のゲームのカードは全部捨てる🧹)。
    /// 2. 新しいカードデッキ (52枚、全部裏向き) を作ってシャッフルし、山札に積む。
    /// 3. 山札の上から場札に三角形に配っていく。配る順番は行ごと:
    ///    1行目は1〜7列目に1枚ずつ、2行目は2〜7列目に…という順番。
    ///    各列は「行番号 == 列番号」になる最後の1枚だけ表向き！👀
    ///    配り終わると各列の枚数は 1, 2, ..., 7 枚になって、山札には24枚残る。
    /// 4. 配り直し代としてスコアから 52 引く。ここはアンドゥできない！
    ///
    /// # 戻り値
    /// - `MoveRecord::Deal`。アンドゥ履歴はこれを record() した時点で丸ごと消える。
    pub fn execute(&self, state: &mut GameState) -> MoveRecord {
        // --- 1. 状態のリセット (スコアは引き継ぐ！) ---
        let carried_score = state.score;
        *state = GameState::new();
        state.score = carried_score - REDEAL_COST;

        // --- 2. デッキの準備 ---
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck);
        info!("🃏 デッキ作成完了！ ({}枚)", deck.len());
        for card in deck {
            state.stock.push(card);
        }

        // --- 3. 場札への三角配り ---
        // 行ごとに配るのがポイント。col 列目 (1始まり) には row = 1..=col の
        // カードが積まれるから、最後に積まれる row == col の1枚だけ表になる。
        let mut dealt = 0;
        for row in 1..=7usize {
            for col in row..=7usize {
                if let Some(mut card) = state.stock.pop() {
                    card.is_face_up = row == col;
                    state.tableaus[col - 1].push(card);
                    dealt += 1;
                }
            }
        }
        info!("✅ 場札への配置完了！ ({}枚配置、山札に{}枚)", dealt, state.stock.len());

        // --- 4. ドラッグ可否の付け直し ---
        state.refresh_all_draggable();

        MoveRecord::Deal
    }
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::game_state::GameStatus;
    use std::collections::HashSet;

    #[test]
    fn test_initial_deal() {
        // --- 準備 ---
        let mut state = GameState::new();
        let deal_system = DealSystem::default();

        // --- 実行 ---
        println!("--- test_initial_deal 開始 ---");
        let record = deal_system.execute(&mut state);
        assert_eq!(record, MoveRecord::Deal);
        println!("--- deal_system.execute() 完了 ---");

        // --- 検証 ---
        // 1. カードの総数は52枚のはず！
        assert_eq!(state.card_count(), 52, "配置されたカードの総数が52枚ではありません！");
        println!("✔️ カード総数チェックOK");

        // 2. 山札 (Stock) は 52 - (1+2+...+7) = 24 枚で、全部裏向き！
        assert_eq!(state.stock.len(), 24, "山札のカード枚数が24枚ではありません！");
        assert!(
            state.stock.cards().iter().all(|c| !c.is_face_up),
            "山札に表向きのカードがあります！"
        );
        assert!(
            state.stock.cards().iter().all(|c| !c.is_draggable),
            "山札に掴めるカードがあります！"
        );
        println!("✔️ 山札チェックOK (24枚、全部裏)");

        // 3. 場札 (Tableau) の枚数は 1, 2, ..., 7 で、表向きは各列の一番上だけ！
        for i in 0..7 {
            let pile = &state.tableaus[i];
            assert_eq!(pile.len(), i + 1, "場札[{}]の枚数が{}枚ではありません！", i, i + 1);
            let face_up_count = pile.cards().iter().filter(|c| c.is_face_up).count();
            assert_eq!(face_up_count, 1, "場札[{}]の表向きカードが1枚ではありません！", i);
            assert!(
                pile.top().map_or(false, |c| c.is_face_up),
                "場札[{}]の一番上が裏向きです！",
                i
            );
            assert!(
                pile.top().map_or(false, |c| c.is_draggable),
                "場札[{}]の一番上が掴めません！",
                i
            );
            // 一番上以外は全部裏向きで掴めない
            for card in &pile.cards()[..pile.len() - 1] {
                assert!(!card.is_face_up, "場札[{}]の途中に表向きカードがあります！", i);
                assert!(!card.is_draggable);
            }
        }
        println!("✔️ 場札チェックOK (1..7枚、表向きは各列1枚)");

        // 4. 捨て札と組札は空のはず
        assert!(state.waste.is_empty(), "Waste にカードが配置されています！");
        assert!(
            state.foundations.iter().all(|p| p.is_empty()),
            "Foundation にカードが配置されています！"
        );
        println!("✔️ Waste/Foundation が空であることのチェックOK");

        // 5. スコアは配り直し代の -52、ステータスは Playing
        assert_eq!(state.score, -REDEAL_COST, "配り直し代が引かれていません！");
        assert_eq!(state.status, GameStatus::Playing);

        // 6. カードの重複がないかチェック (念のため)
        let mut unique_cards = HashSet::new();
        for (_, pile) in state.piles() {
            for card in pile.cards() {
                assert!(
                    unique_cards.insert((card.suit, card.rank)),
                    "配置されたカードに重複が見つかりました！ {:?}",
                    card
                );
            }
        }
        assert_eq!(unique_cards.len(), 52);
        println!("✔️ カードの重複チェックOK");

        println!("✅✅✅ test_initial_deal 成功！ 🎉🎉🎉");
    }

    #[test]
    fn redeal_accumulates_cost_and_keeps_card_count() {
        let mut state = GameState::new();
        let deal_system = DealSystem::default();

        deal_system.execute(&mut state);
        assert_eq!(state.score, -REDEAL_COST);

        // もう一回配り直すと、さらに -52 (スコアは引き継がれる)
        deal_system.execute(&mut state);
        assert_eq!(state.score, -REDEAL_COST * 2, "配り直し代は積み重なるはず！");
        assert_eq!(state.card_count(), 52, "配り直してもカードは52枚のはず！");
        println!("配り直し累積コストテスト、成功！🎉");
    }
}
