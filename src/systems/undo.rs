// src/systems/undo.rs
//! アンドゥの仕組みだよ！⏪
//!
//! 昔ながらの「クロージャを積んでおいて呼ぶ」方式じゃなくて、
//! 「何が起きたか」をデータで持つコマンドレコード (`MoveRecord`) を積む方式。
//! 各レコードは自分の逆操作を計算するのに必要な値を全部持ってるので、
//! 生きたオブジェクトへの参照を抱え込まずに済むんだ。✨

use crate::components::game_state::{GameState, GameStatus};
use crate::components::pile::StackType;
use crate::logic::rules;
use log::{debug, warn};

/// プレイヤーの1操作を表すコマンドレコードだよ。
/// エグゼキュータ (systems) が操作を実行するたびに1つ返してくる。
///
/// それぞれのバリアントは「逆再生」に必要な情報をまるごと持ってる:
/// - `count`: 動いた枚数。逆方向に同じ枚数動かせば元通り。
/// - `exposed_flip`: 移動元の場札で裏向きカードが自動でめくれたかどうか。
///   アンドゥのときはこのカードを裏に戻さないといけない！
/// - `score_delta`: この操作で動いたスコア。アンドゥで引き戻す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRecord {
    /// 配り直し。アンドゥ対象外で、これを記録すると履歴が丸ごと消える。
    Deal,
    /// 山札から捨て札へ `count` 枚めくった。
    TurnStock { count: usize },
    /// 捨て札を `count` 枚まるごと山札に戻した。
    ResetStock { count: usize },
    /// カードの並びを `src` から `dst` へ `count` 枚動かした。
    /// (場札→場札の複数枚移動も、捨て札→場札の1枚移動もこれ)
    MoveRun {
        src: StackType,
        dst: StackType,
        count: usize,
        exposed_flip: bool,
        score_delta: i32,
    },
    /// カードを1枚、組札に上げた。
    PlayToFoundation {
        src: StackType,
        foundation_index: u8,
        exposed_flip: bool,
        score_delta: i32,
    },
}

/// アンドゥ履歴だよ。新しい操作ほど末尾に積まれる (最後の操作が一番先に戻る)。
#[derive(Debug, Default)]
pub struct UndoStack {
    records: Vec<MoveRecord>,
}

impl UndoStack {
    /// 空っぽの履歴を作るよ。
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// 履歴の長さ。
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 履歴が空かどうか。
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 履歴を全部消すよ。
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// 操作を記録するよ。
    /// 配り直し (`Deal`) だけは特別で、記録する代わりに履歴を全部消す。
    /// 配り直しをまたいでアンドゥはできない約束だからね！
    pub fn record(&mut self, record: MoveRecord) {
        match record {
            MoveRecord::Deal => {
                debug!("[Undo] Deal recorded: clearing {} history entries.", self.records.len());
                self.records.clear();
            }
            other => {
                debug!("[Undo] Recording {:?}", other);
                self.records.push(other);
            }
        }
    }

    /// 一番新しい操作を1つ取り消すよ。
    /// 履歴が空なら何もしないで false を返す (エラーじゃない！)。
    pub fn undo_last(&mut self, state: &mut GameState) -> bool {
        let Some(record) = self.records.pop() else {
            debug!("[Undo] History is empty. Nothing to undo.");
            return false;
        };
        debug!("[Undo] Undoing {:?}", record);
        apply_inverse(state, record);
        true
    }
}

/// レコード1つぶんの逆操作を状態に適用するよ。
/// ここを通った後の状態は、そのレコードが記録される直前の状態と
/// (カードの並び・表裏・ドラッグ可否・スコアまで) ピッタリ一致する。
fn apply_inverse(state: &mut GameState, record: MoveRecord) {
    match record {
        MoveRecord::Deal => {
            // record() が履歴ごと消すので、Deal が履歴から出てくることはないはず。
            warn!("[Undo] Deal record found on the stack. Ignoring.");
        }
        MoveRecord::TurnStock { count } => {
            // めくった枚数だけ、捨て札の上から山札に裏向きで戻す。
            // めくった順の逆順で戻るので、山札の並びも元通り！
            for _ in 0..count {
                if let Some(mut card) = state.waste.pop() {
                    card.is_face_up = false;
                    state.stock.push(card);
                }
            }
            state.refresh_draggable(StackType::Stock);
            state.refresh_draggable(StackType::Waste);
        }
        MoveRecord::ResetStock { count } => {
            // リセットの逆 = 山札の上から全部捨て札に表向きで戻す。
            for _ in 0..count {
                if let Some(mut card) = state.stock.pop() {
                    card.is_face_up = true;
                    state.waste.push(card);
                }
            }
            state.refresh_draggable(StackType::Stock);
            state.refresh_draggable(StackType::Waste);
        }
        MoveRecord::MoveRun { src, dst, count, exposed_flip, score_delta } => {
            undo_run_move(state, src, dst, count, exposed_flip, score_delta);
        }
        MoveRecord::PlayToFoundation { src, foundation_index, exposed_flip, score_delta } => {
            undo_run_move(
                state,
                src,
                StackType::Foundation(foundation_index),
                1,
                exposed_flip,
                score_delta,
            );
        }
    }
}

/// 「並びの移動」の逆再生。dst の上から count 枚を src に返すよ。
fn undo_run_move(
    state: &mut GameState,
    src: StackType,
    dst: StackType,
    count: usize,
    exposed_flip: bool,
    score_delta: i32,
) {
    let run = state.pile_mut(dst).split_off_top(count);

    // 移動のときに自動でめくれたカードは、先に裏向きに戻しておく。
    // (今の src の一番上が、まさにそのカード)
    if exposed_flip {
        if let Some(top) = state.pile_mut(src).top_mut() {
            top.is_face_up = false;
        }
    }

    state.pile_mut(src).append(run);
    state.score -= score_delta;

    // 勝利判定もやり直し。組札からカードが降りたら Playing に戻る。
    state.status = if rules::check_win_condition(state.foundation_card_count()) {
        GameStatus::Won
    } else {
        GameStatus::Playing
    };

    state.refresh_draggable(src);
    state.refresh_draggable(dst);
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    fn up_card(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.is_face_up = true;
        card
    }

    #[test]
    fn undo_on_empty_stack_is_noop() {
        let mut stack = UndoStack::new();
        let mut state = GameState::new();
        state.waste.push(up_card(Suit::Heart, Rank::Ace));
        let before = state.clone();

        assert!(!stack.undo_last(&mut state), "空の履歴のアンドゥは false のはず");
        assert_eq!(state, before, "空の履歴のアンドゥで状態が変わっちゃダメ！");
        println!("空アンドゥ no-op テスト、成功！🎉");
    }

    #[test]
    fn deal_record_clears_history() {
        let mut stack = UndoStack::new();
        stack.record(MoveRecord::TurnStock { count: 3 });
        stack.record(MoveRecord::ResetStock { count: 3 });
        assert_eq!(stack.len(), 2);

        // 配り直しで履歴は全部消える！
        stack.record(MoveRecord::Deal);
        assert!(stack.is_empty(), "Deal の記録で履歴が消えるはず");
        println!("Deal で履歴クリアのテスト、成功！🎉");
    }

    #[test]
    fn undo_move_run_restores_exposed_flip() {
        // 場札0: 裏向きの 9♣️ の上に表向きの 8❤️。
        // 8❤️ を場札1 (9♠️) に動かすと 9♣️ がめくれる、という状況を手で作る。
        let mut state = GameState::new();
        let mut nine_clubs = Card::new(Suit::Club, Rank::Nine);
        nine_clubs.is_face_up = false;
        state.tableaus[0].push(nine_clubs);
        state.tableaus[0].push(up_card(Suit::Heart, Rank::Eight));
        state.tableaus[1].push(up_card(Suit::Spade, Rank::Nine));
        state.refresh_all_draggable();

        let before = state.clone();

        // 手動で「移動済み」の状態を作る (エグゼキュータ相当の操作)
        let run = state.tableaus[0].split_off_top(1);
        state.tableaus[0].top_mut().unwrap().is_face_up = true; // 9♣️ がめくれた
        state.tableaus[1].append(run);
        state.refresh_all_draggable();

        let mut stack = UndoStack::new();
        stack.record(MoveRecord::MoveRun {
            src: StackType::Tableau(0),
            dst: StackType::Tableau(1),
            count: 1,
            exposed_flip: true,
            score_delta: 0,
        });

        assert!(stack.undo_last(&mut state));
        assert_eq!(state, before, "アンドゥで元の状態とビット単位で一致するはず！");
        assert!(
            !state.tableaus[0].cards()[0].is_face_up,
            "めくれた 9♣️ は裏に戻ってるはず"
        );
        println!("MoveRun アンドゥ (自動めくれ込み) テスト、成功！🎉");
    }

    #[test]
    fn undo_play_to_foundation_restores_score_and_status() {
        // 組札に 1 枚上げた状態から戻す
        let mut state = GameState::new();
        state.waste.push(up_card(Suit::Heart, Rank::Ace));
        state.refresh_all_draggable();
        let before = state.clone();

        // 手動で「上げ済み」にする
        let card = state.waste.pop().unwrap();
        state.foundations[0].push(card);
        state.score += 5;
        state.refresh_all_draggable();

        let mut stack = UndoStack::new();
        stack.record(MoveRecord::PlayToFoundation {
            src: StackType::Waste,
            foundation_index: 0,
            exposed_flip: false,
            score_delta: 5,
        });

        assert!(stack.undo_last(&mut state));
        assert_eq!(state, before, "スコアもドラッグ可否も含めて元通りのはず！");
        println!("PlayToFoundation アンドゥテスト、成功！🎉");
    }
}
