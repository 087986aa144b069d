//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
// 共通ヘルパーを使うためにインポート
use super::common::{is_one_rank_below, CardColor};

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// # 引数
/// * `card`: 移動させようとしているカード (複数枚移動なら、その一番下のカード)。
/// * `tableau_top_card`: 移動先の場札の一番上にあるカード (空の列なら None)。
///
/// # 戻り値
/// * 移動可能なら `true`、そうでなければ `false`。
pub fn can_move_to_tableau(card: &Card, tableau_top_card: Option<&Card>) -> bool {
    match tableau_top_card {
        // 場札の列が空の場合
        None => {
            // キング (K) なら置ける！🤴
            card.rank == Rank::King
        }
        // 場札の列に既にカードがある場合
        Some(top_card) => {
            // 裏向きのカードの上には置けない (普通は起こらないけど念のため)
            if !top_card.is_face_up {
                return false;
            }

            // 1. 色が違うか？ (赤と黒)
            let move_color = CardColor::from_suit(card.suit);
            let target_color = CardColor::from_suit(top_card.suit);
            if move_color == target_color {
                return false; // 同じ色なら重ねられない！🟥🟥 or ⬛️⬛️ はダメ！
            }

            // 2. ランクが連続しているか？ (移動するカードが1つ小さい)
            is_one_rank_below(card, top_card)
        }
    }
}
