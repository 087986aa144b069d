// src/components/card.rs

// serde を使う宣言！カード情報を JSON にして JS 側に渡す時に使うよ！
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashMap のキーとかで使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 全スートを並べた配列。デッキ生成のループで使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// スートの通し番号 (0-3)。カードID の計算に使う。
    /// 約束事: 0: Heart, 1: Diamond, 2: Club, 3: Spade
    pub fn index(self) -> usize {
        match self {
            Suit::Heart => 0,
            Suit::Diamond => 1,
            Suit::Club => 2,
            Suit::Spade => 3,
        }
    }

    /// 表示用の英語名 (複数形)。カード画像のファイル名に合わせてるよ。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
            Suit::Spade => "Spades",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// スートと同じように #[derive(...)] を付けておくよ！
/// PartialOrd, Ord も追加して、ランクの大小比較 (`<`, `>`) もできるようにしておこう！
/// ソリティアの「1つ上/1つ下」判定で使いまくる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

/// 全ランクを並べた配列。これもデッキ生成用！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

impl Rank {
    /// 表示用の短い名前。"A", "2", ..., "J", "Q", "K"
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// 「このカードは、ハート♥️のAだよ！」という正体 (suit + rank) と、
/// 画面表示に関わる状態を持つんだ。
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (trueなら表向き)
/// - `is_draggable`: 今ドラッグで掴めるかどうか。山札のカードは掴めない、
///   捨て札は一番上だけ、場札は表向きなら全部、みたいなルールで更新されるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)] // Copy は外したよ。カードの状態は変わる可能性があるからね。
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub is_draggable: bool,
}

impl Card {
    /// 新しいカードを作るよ。最初は裏向き＆ドラッグ不可！
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            is_draggable: false,
        }
    }

    /// カードの通し番号 (0-51) を返すよ。
    /// JS 側とカードをやりとりする時の ID として使うんだ。
    /// スートごとに 13 枚ずつ並べた番号: Heart の A が 0、Spade の K が 51。
    pub fn id(&self) -> usize {
        self.suit.index() * 13 + (self.rank as usize - 1)
    }

    /// 通し番号 (0-51) からカードの正体を復元するよ。
    /// 範囲外の ID なら None。
    pub fn identity_from_id(id: usize) -> Option<(Suit, Rank)> {
        if id >= 52 {
            return None;
        }
        let suit = ALL_SUITS[id / 13];
        let rank = ALL_RANKS[id % 13];
        Some((suit, rank))
    }

    /// "A Hearts" みたいな表示名。ログとか画像ファイル名のベースに使う。
    pub fn display_name(&self) -> String {
        format!("{} {}", self.rank.label(), self.suit.name())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        // 値がちゃんと設定されてるか確認
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up, "作りたてのカードは裏向きのはず！");
        assert!(!card.is_draggable, "作りたてのカードはドラッグ不可のはず！");

        println!("作成したカード: {:?}", card);
        println!("Card 作成テスト、成功！🎉");
    }

    #[test]
    fn rank_comparison() {
        // ランクの大小比較がちゃんとできるか確認
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King > Rank::Ace);
        assert_eq!(Rank::Seven, Rank::Seven);

        // 「1つ上」の判定は as usize でやる
        assert_eq!(Rank::Two as usize, Rank::Ace as usize + 1);
        assert_eq!(Rank::King as usize, 13);

        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn card_id_round_trip() {
        // 全カードについて id() -> identity_from_id() が往復できるかチェック！
        for &suit in ALL_SUITS.iter() {
            for &rank in ALL_RANKS.iter() {
                let card = Card::new(suit, rank);
                let id = card.id();
                assert!(id < 52, "ID が範囲外: {}", id);
                assert_eq!(
                    Card::identity_from_id(id),
                    Some((suit, rank)),
                    "ID {} から復元したカードが違う！",
                    id
                );
            }
        }
        // 範囲外は None
        assert_eq!(Card::identity_from_id(52), None);
        println!("カードID 往復テスト、成功！🎉");
    }

    #[test]
    fn display_name_format() {
        let card = Card::new(Suit::Heart, Rank::Ace);
        assert_eq!(card.display_name(), "A Hearts");
        let card = Card::new(Suit::Club, Rank::Ten);
        assert_eq!(card.display_name(), "10 Clubs");
    }
}
