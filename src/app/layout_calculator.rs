// src/app/layout_calculator.rs
//! Calculates the drawing position of cards in different stacks.

use std::collections::HashMap;

use crate::components::game_state::GameState;
use crate::components::pile::StackType;
use crate::components::position::Position;
use crate::config::layout::{
    FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET,
    STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET,
    TABLEAU_Y_OFFSET_FACE_DOWN, TABLEAU_Y_OFFSET_FACE_UP,
    WASTE_POS_X, WASTE_POS_Y,
};

/// スタックタイプとスタック内での順序に基づいて、カードの描画位置を計算します。
///
/// # 引数
/// * `state`: ゲーム状態への参照 (場札の Y 座標はその下のカードの表裏で変わるため)。
/// * `stack_type`: カードが属するスタックのタイプ。
/// * `position_in_stack`: スタック内でのカードの順序 (0から始まる)。
///
/// # 戻り値
/// * 計算されたカードの `Position`。
pub fn calculate_card_position(
    state: &GameState,
    stack_type: StackType,
    position_in_stack: usize,
) -> Position {
    match stack_type {
        StackType::Stock => Position { x: STOCK_POS_X, y: STOCK_POS_Y },
        StackType::Waste => Position { x: WASTE_POS_X, y: WASTE_POS_Y },
        StackType::Foundation(index) => Position {
            x: FOUNDATION_START_X + FOUNDATION_X_OFFSET * index as f32,
            y: FOUNDATION_START_Y,
        },
        StackType::Tableau(index) => {
            let base_x = TABLEAU_START_X + TABLEAU_X_OFFSET * index as f32;

            // position_in_stack より下にあるカードの表裏を見て Y座標を積み上げる。
            // (自分自身のぶんは含まない)
            let pile = &state.tableaus[index as usize];
            let mut y = TABLEAU_START_Y;
            for card in pile.cards().iter().take(position_in_stack) {
                y += if card.is_face_up {
                    TABLEAU_Y_OFFSET_FACE_UP
                } else {
                    TABLEAU_Y_OFFSET_FACE_DOWN
                };
            }
            Position { x: base_x, y }
        }
    }
}

/// 全カードの現在の描画位置をカードID → Position のマップで返すよ。
/// アニメーションの「移動前の位置」スナップショットに使う。
pub fn snapshot_positions(state: &GameState) -> HashMap<usize, Position> {
    let mut positions = HashMap::with_capacity(52);
    for (stack, pile) in state.piles() {
        for (index, card) in pile.cards().iter().enumerate() {
            positions.insert(card.id(), calculate_card_position(state, stack, index));
        }
    }
    positions
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    #[test]
    fn fixed_stacks_have_fixed_positions() {
        let state = GameState::new();
        assert_eq!(
            calculate_card_position(&state, StackType::Stock, 5),
            Position { x: STOCK_POS_X, y: STOCK_POS_Y }
        );
        assert_eq!(
            calculate_card_position(&state, StackType::Waste, 2),
            Position { x: WASTE_POS_X, y: WASTE_POS_Y }
        );
        let f2 = calculate_card_position(&state, StackType::Foundation(2), 0);
        assert_eq!(f2.x, FOUNDATION_START_X + FOUNDATION_X_OFFSET * 2.0);
    }

    #[test]
    fn tableau_fan_depends_on_face_up_state() {
        // 裏2枚 + 表1枚の列で、4枚目の位置を計算してみる
        let mut state = GameState::new();
        state.tableaus[3].push(Card::new(Suit::Club, Rank::Nine));
        state.tableaus[3].push(Card::new(Suit::Heart, Rank::Eight));
        let mut up = Card::new(Suit::Spade, Rank::Seven);
        up.is_face_up = true;
        state.tableaus[3].push(up);

        let pos = calculate_card_position(&state, StackType::Tableau(3), 3);
        assert_eq!(pos.x, TABLEAU_START_X + TABLEAU_X_OFFSET * 3.0);
        assert_eq!(
            pos.y,
            TABLEAU_START_Y + TABLEAU_Y_OFFSET_FACE_DOWN * 2.0 + TABLEAU_Y_OFFSET_FACE_UP,
            "裏2枚ぶん + 表1枚ぶんのオフセットが積み上がるはず"
        );
    }

    #[test]
    fn snapshot_covers_all_cards() {
        let mut state = GameState::new();
        crate::systems::DealSystem::default().execute(&mut state);
        let snapshot = snapshot_positions(&state);
        assert_eq!(snapshot.len(), 52, "スナップショットは52枚全部の位置を持つはず");
    }
}
