//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::game_state::GameState;
use crate::components::pile::StackType;
// 共通ヘルパーを使うためにインポート
use super::common::is_one_rank_above;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// ルールはこう:
/// 1. 移動元が場札 (Tableau) の場合、そのカードは列の**一番上**じゃないとダメ。
///    (列の途中のカードをまとめて組札に持っていくのは禁止！)
/// 2. 組札が空の場合、置けるのは A (エース) だけ。スートはなんでもOK！
///    組札のスートは最初に置かれた A で決まる方式だよ。
/// 3. 組札にカードがある場合、同じスートで、ランクが一番上のカードの
///    ちょうど1つ上じゃないとダメ。
///
/// # 引数
/// * `state`: ゲーム状態のスナップショット。移動元の位置チェックにも使う。
/// * `card`: 移動させようとしているカード。
/// * `target_foundation_index`: 移動先の組札の番号 (0-3)。
///
/// # 戻り値
/// * 移動可能なら `true`、そうでなければ `false`。
pub fn can_move_to_foundation(
    state: &GameState,
    card: &Card,
    target_foundation_index: u8,
) -> bool {
    if target_foundation_index >= 4 {
        return false; // 0-3 以外は無効なインデックス
    }

    // 1. 移動元が場札なら、一番上のカードかチェック！
    if let Some((StackType::Tableau(col), index)) = state.locate_card(card.suit, card.rank) {
        if index + 1 != state.tableaus[col as usize].len() {
            return false; // 列の途中のカードは組札に行けない！🙅‍♀️
        }
    }

    // 2. & 3. ランクとスートのチェック
    match state.foundations[target_foundation_index as usize].top() {
        // 組札が空の場合 (一番上のカードがない場合)
        None => {
            // エース (A) なら置ける！👑 スートは問わない！
            card.rank == Rank::Ace
        }
        // 組札に既にカードがある場合
        Some(top_card) => {
            // スートが同じで、ランクが「次」なら置ける！
            card.suit == top_card.suit && is_one_rank_above(card, top_card)
        }
    }
}
