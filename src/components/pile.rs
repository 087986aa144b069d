// src/components/pile.rs

// serde を使うためにインポート！StackType は JS 側から JSON で渡ってくるからね。
use serde::{Serialize, Deserialize};

use super::card::Card;

/// カードが存在する場所（山）の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// Serialize, Deserialize: この Enum を JSON 形式に変換したり、JSON から戻したり
/// できるようにする！ドロップ先の指定が JS からこの形で飛んでくるんだ！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。4つあるので番号 (0-3) を持つ。
    /// スートは固定じゃなくて、最初に置かれた A のスートで決まるよ。
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

impl StackType {
    /// 場札かどうか。場札だけ複数枚まとめて動かせるから、判定をよく使うんだ。
    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    /// 組札かどうか。スコア計算 (+5/-5) の分岐で使うよ。
    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}

/// カードの山そのものを表す構造体だよ。
///
/// 中身はただの `Vec<Card>` で、**末尾が一番上のカード**という約束！
/// 山札も捨て札も組札も場札も、全部この Pile で表すよ。
/// どの種類の山かは GameState 側が StackType で知ってる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// 空の山を作るよ。
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// 山の枚数。
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// 山が空かどうか。
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード (あれば)。末尾が一番上だよ！
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 一番上のカードへの可変参照。表向きにしたりフラグを変えたりする時用。
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// 一番上にカードを置くよ。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上のカードを取るよ (あれば)。
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 上から `n` 枚をまとめて取り出すよ。順番はそのまま (下から上の順)。
    /// 場札の「表向きの並び (run) をまとめて動かす」移動で使うんだ。
    /// 枚数が足りなければ空の Vec を返して、山には触らない。
    pub fn split_off_top(&mut self, n: usize) -> Vec<Card> {
        if n == 0 || n > self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(self.cards.len() - n)
    }

    /// カードの列をまとめて上に積むよ。順番はそのまま (先頭が一番下になる)。
    pub fn append(&mut self, mut run: Vec<Card>) {
        self.cards.append(&mut run);
    }

    /// 指定した正体のカードが下から何番目にあるか (0 が一番下)。
    pub fn index_of(&self, suit: super::card::Suit, rank: super::card::Rank) -> Option<usize> {
        self.cards.iter().position(|c| c.suit == suit && c.rank == rank)
    }

    /// 中身を下から順に眺めるためのスライス。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 中身への可変スライス。draggable フラグの一括更新とかで使う。
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn push_pop_top() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);

        pile.push(card(Suit::Heart, Rank::Ace));
        pile.push(card(Suit::Spade, Rank::King));

        // 末尾が一番上！
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top().unwrap().rank, Rank::King);

        let popped = pile.pop().unwrap();
        assert_eq!(popped.rank, Rank::King, "pop は一番上から取るはず！");
        assert_eq!(pile.top().unwrap().rank, Rank::Ace);
    }

    #[test]
    fn split_off_top_keeps_order() {
        let mut pile = Pile::new();
        pile.push(card(Suit::Club, Rank::Nine));
        pile.push(card(Suit::Heart, Rank::Eight));
        pile.push(card(Suit::Spade, Rank::Seven));

        // 上から2枚 (8❤️ と 7♠️) を取り出す。順番は下から上のまま！
        let run = pile.split_off_top(2);
        assert_eq!(run.len(), 2);
        assert_eq!(run[0].rank, Rank::Eight);
        assert_eq!(run[1].rank, Rank::Seven);
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.top().unwrap().rank, Rank::Nine);

        // 取り出した列を別の山に積んでも順番は変わらない
        let mut other = Pile::new();
        other.append(run);
        assert_eq!(other.cards()[0].rank, Rank::Eight);
        assert_eq!(other.top().unwrap().rank, Rank::Seven);
    }

    #[test]
    fn split_off_top_too_many_is_noop() {
        let mut pile = Pile::new();
        pile.push(card(Suit::Heart, Rank::Ace));

        // 枚数が足りない時は何もしない (空 Vec が返る)
        let run = pile.split_off_top(2);
        assert!(run.is_empty(), "足りない枚数の split は空のはず！");
        assert_eq!(pile.len(), 1, "山は崩れてないはず！");
    }

    #[test]
    fn index_of_finds_card() {
        let mut pile = Pile::new();
        pile.push(card(Suit::Club, Rank::Three));
        pile.push(card(Suit::Diamond, Rank::Two));

        assert_eq!(pile.index_of(Suit::Club, Rank::Three), Some(0));
        assert_eq!(pile.index_of(Suit::Diamond, Rank::Two), Some(1));
        assert_eq!(pile.index_of(Suit::Spade, Rank::Ace), None);
    }
}
