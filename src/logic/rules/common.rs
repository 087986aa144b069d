//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) への移動ルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red, // ハートとダイヤは赤！♦️❤️
            Suit::Club | Suit::Spade => CardColor::Black,  // クラブとスペードは黒！♣️♠️
        }
    }
}

/// `card` のランクが `other` のちょうど1つ上かどうか。組札の積み上げ判定用。
/// (例: 上が A なら 2、上が 10 なら J)
pub(crate) fn is_one_rank_above(card: &Card, other: &Card) -> bool {
    (card.rank as usize) == (other.rank as usize) + 1
}

/// `card` のランクが `other` のちょうど1つ下かどうか。場札の積み下げ判定用。
/// (例: 上が Q なら J、上が 7 なら 6)
pub(crate) fn is_one_rank_below(card: &Card, other: &Card) -> bool {
    (card.rank as usize) + 1 == (other.rank as usize)
}
