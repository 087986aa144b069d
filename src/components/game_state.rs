// src/components/game_state.rs

// serde を使う宣言！ゲーム状態を JSON にして JS 側に渡すよ！
use serde::{Serialize, Deserialize};

use super::card::{Card, Rank, Suit};
use super::pile::{Pile, StackType};

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// ゲームがまだプレイ中なのか、それとも全カードが組札に上がって勝ったのか、
/// みたいな状況を示すのに使うよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 52枚全部が組札に上がった状態。
    Won,
}

/// ゲーム全体の状態を1つにまとめた構造体だよ。
///
/// 昔の実装みたいにグローバル変数や画面の属性にバラバラに状態を持たせるんじゃなくて、
/// 全部この構造体のフィールドに持つ！状態を書き換えていいのは systems のエグゼキュータ
/// だけ、という約束で運用するよ。
///
/// 不変条件 (大事！):
/// - 52枚のカードは stock + waste + foundations + tableaus のどこか1つの山に
///   ちょうど1回ずつ入っている (重複なし、行方不明なし)。
/// - 場札の表向きカードは必ず裏向きカードの上に連続して積まれている。
/// - 組札は同スートで A から上に積み上がる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// 山札。全部裏向き。
    pub stock: Pile,
    /// 捨て札。全部表向きで、一番上だけドラッグできる。
    pub waste: Pile,
    /// 組札4つ。スートは最初に置かれた A で決まる。
    pub foundations: [Pile; 4],
    /// 場札7列。
    pub tableaus: [Pile; 7],
    /// 現在のスコア。マイナスにもなるよ (配り直しで -52 だからね…)。
    pub score: i32,
    /// プレイ中 or 勝利。
    pub status: GameStatus,
}

impl GameState {
    /// 空っぽのゲーム状態を作るよ。カードはまだ1枚もない。
    /// カードを入れるのは DealSystem の仕事！
    pub fn new() -> Self {
        Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: core::array::from_fn(|_| Pile::new()),
            tableaus: core::array::from_fn(|_| Pile::new()),
            score: 0,
            status: GameStatus::Playing,
        }
    }

    /// StackType から対応する山への参照を取るよ。
    pub fn pile(&self, stack: StackType) -> &Pile {
        match stack {
            StackType::Stock => &self.stock,
            StackType::Waste => &self.waste,
            StackType::Foundation(i) => &self.foundations[i as usize],
            StackType::Tableau(i) => &self.tableaus[i as usize],
        }
    }

    /// StackType から対応する山への可変参照を取るよ。
    pub fn pile_mut(&mut self, stack: StackType) -> &mut Pile {
        match stack {
            StackType::Stock => &mut self.stock,
            StackType::Waste => &mut self.waste,
            StackType::Foundation(i) => &mut self.foundations[i as usize],
            StackType::Tableau(i) => &mut self.tableaus[i as usize],
        }
    }

    /// 全部の山を (種類, 山) のペアで順番に眺めるイテレータだよ。
    /// 描画とか JSON 化とか、「全カードを見たい」処理で使う。
    pub fn piles(&self) -> impl Iterator<Item = (StackType, &Pile)> {
        let foundations = self
            .foundations
            .iter()
            .enumerate()
            .map(|(i, p)| (StackType::Foundation(i as u8), p));
        let tableaus = self
            .tableaus
            .iter()
            .enumerate()
            .map(|(i, p)| (StackType::Tableau(i as u8), p));
        std::iter::once((StackType::Stock, &self.stock))
            .chain(std::iter::once((StackType::Waste, &self.waste)))
            .chain(foundations)
            .chain(tableaus)
    }

    /// 指定した正体のカードが今どの山の何番目にいるかを探すよ。
    /// カードは必ずどこか1つの山にしかいないはずなので、最初に見つかったものを返す。
    ///
    /// # 戻り値
    /// * `Some((stack, index))`: 見つかった場合。`index` は山の下から数えた位置 (0 が一番下)。
    /// * `None`: そのカードがどこにもいない場合 (配る前とか)。
    pub fn locate_card(&self, suit: Suit, rank: Rank) -> Option<(StackType, usize)> {
        for (stack, pile) in self.piles() {
            if let Some(index) = pile.index_of(suit, rank) {
                return Some((stack, index));
            }
        }
        None
    }

    /// カードID (0-51) 版の locate_card。JS から ID で渡ってくるのでこっちが入口。
    pub fn locate_card_by_id(&self, card_id: usize) -> Option<(StackType, usize)> {
        let (suit, rank) = Card::identity_from_id(card_id)?;
        self.locate_card(suit, rank)
    }

    /// 指定した山の index 番目のカードを覗くよ。
    pub fn card_at(&self, stack: StackType, index: usize) -> Option<&Card> {
        self.pile(stack).cards().get(index)
    }

    /// 場札の列について、表向きの並び (run) が始まる位置を返すよ。
    /// 列が全部裏向き (or 空) なら列の長さを返す。
    /// 「up カウンタ」を別に持つんじゃなくて、毎回中身から導出するのがポイント！
    pub fn face_up_run_start(&self, tableau_index: u8) -> usize {
        let pile = &self.tableaus[tableau_index as usize];
        pile.cards()
            .iter()
            .position(|c| c.is_face_up)
            .unwrap_or(pile.len())
    }

    /// 今ゲーム内にあるカードの総枚数。配った後は常に 52 のはず！
    pub fn card_count(&self) -> usize {
        self.piles().map(|(_, pile)| pile.len()).sum()
    }

    /// 組札に上がっているカードの合計枚数。52 になったら勝ち！
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(|p| p.len()).sum()
    }

    /// 指定した山のカードの is_draggable フラグを、山の種類ごとのルールで
    /// 付け直すよ。ルールはこう:
    /// - 山札: 1枚も掴めない (クリックでめくるだけ)
    /// - 捨て札: 一番上だけ
    /// - 組札: 一番上だけ (場札に戻す移動ができるからね)
    /// - 場札: 表向きのカード全部 (まとめて動かせるから)
    ///
    /// フラグは山の中身から完全に導出できるので、移動やアンドゥのたびに
    /// これを呼び直せば、元に戻した時もフラグまでピッタリ一致するんだ。✨
    pub fn refresh_draggable(&mut self, stack: StackType) {
        let pile = self.pile_mut(stack);
        let len = pile.len();
        match stack {
            StackType::Stock => {
                for card in pile.cards_mut() {
                    card.is_draggable = false;
                }
            }
            StackType::Waste | StackType::Foundation(_) => {
                for (i, card) in pile.cards_mut().iter_mut().enumerate() {
                    card.is_draggable = i + 1 == len;
                }
            }
            StackType::Tableau(_) => {
                for card in pile.cards_mut() {
                    card.is_draggable = card.is_face_up;
                }
            }
        }
    }

    /// 全部の山の is_draggable を付け直すよ。配り直しの後とかに使う。
    pub fn refresh_all_draggable(&mut self) {
        let stacks: Vec<StackType> = self.piles().map(|(stack, _)| stack).collect();
        for stack in stacks {
            self.refresh_draggable(stack);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
