// src/app/event_handler.rs
//! ユーザー入力やUIイベントに関連するロジック。
//! 「座標 (x, y) に何があるか」をゲーム状態とレイアウトから判定するよ。
//! ここは純粋な計算だけ！ブラウザ API には触らない (だからテストも書ける✨)。

use crate::components::game_state::GameState;
use crate::components::pile::StackType;
use crate::components::position::Position;
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};
use crate::app::layout_calculator::calculate_card_position;

/// クリックされた要素の種類を表す Enum だよ！
/// カードがクリックされたのか、それともスタックの空きスペースがクリックされたのかを示すんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた場合。どのカードか (カードID 0-51) を保持するよ。
    Card(usize),
    /// スタックの空きエリアがクリックされた場合。どの種類のスタックか (StackType) を保持するよ。
    Stack(StackType),
}

/// 点 (x, y) がカード1枚ぶんの矩形の中にあるか。
fn point_in_card(pos: Position, x: f32, y: f32) -> bool {
    x >= pos.x && x <= pos.x + CARD_WIDTH && y >= pos.y && y <= pos.y + CARD_HEIGHT
}

/// クリックされた座標 (x, y) に基づいて、どのゲーム要素 (カード or スタック) が
/// クリックされたかを特定する関数だよ！
///
/// # 引数
/// * `state`: ゲーム世界の現在の状態。ここからカードの位置情報を計算するんだ。
/// * `x`: クリックされた Canvas 上の X 座標。
/// * `y`: クリックされた Canvas 上の Y 座標。
///
/// # 戻り値
/// * `Some(ClickTarget::Card(card_id))`: カードがクリックされた場合。
///   重なってるカードは「一番上」のものが勝つよ。
/// * `Some(ClickTarget::Stack(stack_type))`: スタックの空きエリアがクリックされた場合。
///   (空の山札をクリックしてリセット、とかで使う！)
/// * `None`: 何もない場所 (背景) がクリックされた場合。
pub fn find_clicked_element(state: &GameState, x: f32, y: f32) -> Option<ClickTarget> {
    // --- まずカードを探す ---
    // 各山の中では上のカードほど手前に描かれるので、上から順に調べて
    // 最初に当たったカードを返す。山同士は画面上で重ならない配置なのでこれで十分！
    for (stack, pile) in state.piles() {
        for (index, card) in pile.cards().iter().enumerate().rev() {
            let pos = calculate_card_position(state, stack, index);
            if point_in_card(pos, x, y) {
                return Some(ClickTarget::Card(card.id()));
            }
        }
    }

    // --- カードがなければ、空きスタックの置き場エリアを探す ---
    for stack in all_stack_bases() {
        let pos = calculate_card_position(state, stack, 0);
        if point_in_card(pos, x, y) {
            return Some(ClickTarget::Stack(stack));
        }
    }

    None
}

/// ドロップ先の山を特定する関数だよ。
/// カードの上にドロップされたらそのカードの山、空きエリアならそのエリアの山。
///
/// ドロップできない山 (山札とか) が返ることもあるけど、
/// それは MoveCardSystem がルールで弾いてくれるので、ここでは気にしない！
pub fn find_drop_target(state: &GameState, x: f32, y: f32) -> Option<StackType> {
    // カードの上にドロップ → そのカードが属する山
    for (stack, pile) in state.piles() {
        for (index, _card) in pile.cards().iter().enumerate().rev() {
            let pos = calculate_card_position(state, stack, index);
            if point_in_card(pos, x, y) {
                return Some(stack);
            }
        }
    }

    // 空きエリアへのドロップ
    for stack in all_stack_bases() {
        let pos = calculate_card_position(state, stack, 0);
        if point_in_card(pos, x, y) {
            return Some(stack);
        }
    }

    None
}

/// 置き場エリアとして判定する全スタックのリスト。
fn all_stack_bases() -> impl Iterator<Item = StackType> {
    let foundations = (0..4u8).map(StackType::Foundation);
    let tableaus = (0..7u8).map(StackType::Tableau);
    std::iter::once(StackType::Stock)
        .chain(std::iter::once(StackType::Waste))
        .chain(foundations)
        .chain(tableaus)
}
