// src/systems/move_card_system.rs

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::pile::StackType;
use crate::config::scoring::FOUNDATION_CARD_POINTS;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules;
use crate::systems::undo::MoveRecord;
use crate::systems::win_condition_system::WinConditionSystem;
use log::{debug, info};

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// プレイヤーからの入力（「どのカードをどこに動かすか」）を受け取って、
/// それがソリティアのルール上可能かチェックし、可能なら GameState を更新するよ。
/// 状態を書き換えていいのはこのシステムたちだけ、という約束！
///
/// 各リクエストの契約はどれも同じ形:
/// - ルール上できない移動 → 何もしないで `None` (エラーじゃなくて、ただの無視)
/// - できた移動 → 状態を更新して、アンドゥ用の `MoveRecord` を返す
pub struct MoveCardSystem {
    // 今回は状態を持たないシステムとする
}

impl MoveCardSystem {
    /// 新しい MoveCardSystem を作るよ。
    pub fn new() -> Self {
        Self {}
    }

    /// カード移動リクエストを処理する本体だよ。
    ///
    /// # 処理の流れ
    /// 1. カードID から移動元の山と位置を解決する。
    /// 2. 動かす「並び (run)」を決める。場札なら掴んだカード＋その上全部、
    ///    それ以外なら一番上の1枚だけ。
    /// 3. ルールチェック。ダメなら何もしないで None。
    /// 4. 並びを移動元から外す。場札で裏向きカードが顔を出したら表にめくる
    ///    (移動の唯一の暗黙の副作用！)。
    /// 5. 移動先に積んで、スコアとドラッグ可否と勝利判定を更新。
    /// 6. 逆再生に必要な情報を詰めた MoveRecord を返す。
    pub fn request_move(
        &self,
        state: &mut GameState,
        card_id: usize,
        target: StackType,
    ) -> Option<MoveRecord> {
        let (suit, rank) = Card::identity_from_id(card_id)?;
        let (src, index) = state.locate_card(suit, rank)?;
        debug!(
            "MoveCardSystem: request_move card={} src={:?} index={} target={:?}",
            card_id, src, index, target
        );

        if src == target {
            return None; // 同じ山への移動は意味がないので無視
        }
        if src == StackType::Stock {
            return None; // 山札のカードはドラッグできない (クリックでめくるだけ)
        }

        let card = state.card_at(src, index)?.clone();
        if !card.is_face_up {
            return None; // 裏向きのカードは動かせない
        }

        // --- 動かす並びの長さを決める ---
        let run_len = match src {
            StackType::Tableau(col) => {
                // 掴んだカードから列の一番上までをまとめて動かす。
                // 表向きの並び (run) の範囲は中身から導出する。裏向き領域は掴めない！
                if index < state.face_up_run_start(col) {
                    return None;
                }
                state.tableaus[col as usize].len() - index
            }
            _ => {
                // 場札以外は一番上の1枚しか動かせない
                if index + 1 != state.pile(src).len() {
                    return None;
                }
                1
            }
        };

        // --- 移動先ごとのルールチェック＆実行 ---
        match target {
            StackType::Foundation(foundation_index) => {
                if run_len != 1 {
                    return None; // 複数枚まとめて組札には行けない！
                }
                if !rules::can_move_to_foundation(state, &card, foundation_index) {
                    debug!("  ルール違反！組札には置けませんでした。🙅‍♀️");
                    return None;
                }

                let exposed_flip = apply_run_move(state, src, target, 1);
                // 組札に上がると +5。組札から来た場合 (空き組札への A の引っ越し) は
                // 降りたぶんの -5 と相殺でプラマイゼロ。
                let score_delta = if src.is_foundation() {
                    0
                } else {
                    FOUNDATION_CARD_POINTS
                };
                state.score += score_delta;
                WinConditionSystem::new().run(state);

                info!(
                    "MoveCardSystem: {} を組札[{}] へ。スコア {:+}",
                    card.display_name(),
                    foundation_index,
                    score_delta
                );
                Some(MoveRecord::PlayToFoundation {
                    src,
                    foundation_index,
                    exposed_flip,
                    score_delta,
                })
            }
            StackType::Tableau(col) => {
                if !rules::can_move_to_tableau(&card, state.tableaus[col as usize].top()) {
                    debug!("  ルール違反！場札には置けませんでした。🙅‍♀️");
                    return None;
                }

                let exposed_flip = apply_run_move(state, src, target, run_len);
                // 組札からカードが降りた場合だけスコアが動く (-5)
                let score_delta = if src.is_foundation() {
                    -FOUNDATION_CARD_POINTS
                } else {
                    0
                };
                state.score += score_delta;
                WinConditionSystem::new().run(state);

                info!(
                    "MoveCardSystem: {} から {} 枚を場札[{}] へ。",
                    card.display_name(),
                    run_len,
                    col
                );
                Some(MoveRecord::MoveRun {
                    src,
                    dst: target,
                    count: run_len,
                    exposed_flip,
                    score_delta,
                })
            }
            StackType::Stock | StackType::Waste => {
                // 山札・捨て札にカードをドロップすることはできない
                None
            }
        }
    }

    /// ダブルクリックの自動移動だよ。
    /// その山の一番上のカードだけが対象。飛べる組札を探して、見つかったら移動！
    /// 見つからなければ何もしない (no-op)。
    pub fn request_auto_play(&self, state: &mut GameState, card_id: usize) -> Option<MoveRecord> {
        let (suit, rank) = Card::identity_from_id(card_id)?;
        let (src, index) = state.locate_card(suit, rank)?;

        if src == StackType::Stock {
            return None;
        }
        if index + 1 != state.pile(src).len() {
            return None; // 一番上のカードじゃないとダメ！
        }

        let card = state.card_at(src, index)?.clone();
        if !card.is_face_up {
            return None;
        }

        match find_automatic_foundation_move(state, &card)? {
            StackType::Foundation(foundation_index) => {
                self.request_move(state, card_id, StackType::Foundation(foundation_index))
            }
            _ => None,
        }
    }
}

impl Default for MoveCardSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// 並びの移動の実体。src の上から count 枚を dst に積み替えるよ。
///
/// 移動元が場札で、外した後に裏向きカードが一番上に顔を出したら表にめくる。
/// 戻り値はそのめくりが起きたかどうか (MoveRecord に入れてアンドゥで使う)。
fn apply_run_move(state: &mut GameState, src: StackType, dst: StackType, count: usize) -> bool {
    let run = state.pile_mut(src).split_off_top(count);

    let mut exposed_flip = false;
    if src.is_tableau() {
        if let Some(top) = state.pile_mut(src).top_mut() {
            if !top.is_face_up {
                top.is_face_up = true;
                exposed_flip = true;
            }
        }
    }

    state.pile_mut(dst).append(run);
    state.refresh_draggable(src);
    state.refresh_draggable(dst);
    exposed_flip
}
