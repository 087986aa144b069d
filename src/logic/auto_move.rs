// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! ダブルクリックされたカードがどの組札に飛べるか、とかを判断するんだ。

// --- 必要なものをインポート ---
use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::pile::StackType;
use crate::logic::rules;
use log::debug;

/// 特定のカードが、現在のゲーム状態において、自動的に移動できる
/// 組札（Foundation）があるかどうかを探す関数だよ。
/// 見つかった場合は、移動先の StackType (Foundation のインデックス付き) を返す。
///
/// # 引数
/// * `state`: 現在のゲーム状態への参照。
/// * `card`: 移動させたいカードへの参照。
///
/// # 戻り値
/// * `Some(StackType)`: 移動可能な組札が見つかった場合、その組札の StackType (`StackType::Foundation(index)`)。
/// * `None`: 移動可能な組札が見つからなかった場合。
pub fn find_automatic_foundation_move(state: &GameState, card: &Card) -> Option<StackType> {
    debug!(
        "[AutoMove] Finding automatic foundation move for {}...",
        card.display_name()
    );

    // 4つの Foundation (インデックス 0 から 3 まで) を順番にチェックするループだよ。
    for i in 0..4u8 {
        // 移動可能かチェック！スートの割り当ては固定じゃないから、
        // 「どの組札が受け入れてくれるか」を順番に聞いて回る方式。
        // 最初に見つかった組札で決まり！
        if rules::can_move_to_foundation(state, card, i) {
            debug!("  Found valid foundation [{}] for {}.", i, card.display_name());
            return Some(StackType::Foundation(i));
        }
        // もし↑の if が false なら、この Foundation には移動できないので、
        // ループは次のインデックス (次の Foundation) に進むよ。
    }

    // ループが最後まで終わっても、移動可能な Foundation が見つからなかった場合。
    debug!("  No suitable foundation found for {}.", card.display_name());
    None
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    // ヘルパー: テスト用の表向きカードを作って指定の山に積む
    fn add_card(state: &mut GameState, suit: Suit, rank: Rank, stack: StackType) -> Card {
        let mut card = Card::new(suit, rank);
        card.is_face_up = true;
        state.pile_mut(stack).push(card.clone());
        card
    }

    #[test]
    fn test_find_automatic_foundation_move() {
        let mut state = GameState::new();

        // --- Foundation の状態を設定 ---
        // Foundation 0: 空
        // Foundation 1: A♦️
        add_card(&mut state, Suit::Diamond, Rank::Ace, StackType::Foundation(1));
        // Foundation 2: A♣️, 2♣️
        add_card(&mut state, Suit::Club, Rank::Ace, StackType::Foundation(2));
        add_card(&mut state, Suit::Club, Rank::Two, StackType::Foundation(2));
        // Foundation 3: A♠️
        add_card(&mut state, Suit::Spade, Rank::Ace, StackType::Foundation(3));

        // --- テストケース ---
        // 1. A❤️ (空いてる Foundation 0 に移動できるはず)
        let ace_hearts = add_card(&mut state, Suit::Heart, Rank::Ace, StackType::Waste);
        assert_eq!(
            find_automatic_foundation_move(&state, &ace_hearts),
            Some(StackType::Foundation(0)),
            "A❤️ は空の Foundation 0 に移動できるはず"
        );
        state.waste.pop();

        // 2. 2♦️ (Foundation 1 の A♦️ の上に移動できるはず)
        let two_diamonds = add_card(&mut state, Suit::Diamond, Rank::Two, StackType::Waste);
        assert_eq!(
            find_automatic_foundation_move(&state, &two_diamonds),
            Some(StackType::Foundation(1)),
            "2♦️ は Foundation 1 (A♦️) の上に移動できるはず"
        );
        state.waste.pop();

        // 3. 3♣️ (Foundation 2 の 2♣️ の上に移動できるはず)
        let three_clubs = add_card(&mut state, Suit::Club, Rank::Three, StackType::Waste);
        assert_eq!(
            find_automatic_foundation_move(&state, &three_clubs),
            Some(StackType::Foundation(2)),
            "3♣️ は Foundation 2 (2♣️) の上に移動できるはず"
        );
        state.waste.pop();

        // 4. 4♣️ (Foundation 2 の 2♣️ の上には置けない)
        let four_clubs = add_card(&mut state, Suit::Club, Rank::Four, StackType::Waste);
        assert_eq!(
            find_automatic_foundation_move(&state, &four_clubs),
            None,
            "4♣️ は Foundation 2 (2♣️) の上には置けないはず"
        );
        state.waste.pop();

        // 5. K❤️ (どの Foundation にも直接は置けない)
        let king_hearts = add_card(&mut state, Suit::Heart, Rank::King, StackType::Waste);
        assert_eq!(
            find_automatic_foundation_move(&state, &king_hearts),
            None,
            "K❤️ はどの Foundation にも自動移動できないはず"
        );

        println!("自動移動先探索 (Foundation) テスト、成功！🎉");
    }

    #[test]
    fn test_auto_move_skips_buried_tableau_card() {
        let mut state = GameState::new();
        add_card(&mut state, Suit::Spade, Rank::Ace, StackType::Foundation(0));

        // 2♠️ の上に別のカードが乗ってる → 自動移動できない
        let two_spades = add_card(&mut state, Suit::Spade, Rank::Two, StackType::Tableau(0));
        add_card(&mut state, Suit::Heart, Rank::Five, StackType::Tableau(0));

        assert_eq!(
            find_automatic_foundation_move(&state, &two_spades),
            None,
            "上にカードが乗ってる 2♠️ は自動移動できないはず"
        );
    }
}
