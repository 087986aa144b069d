// src/app/drag_handler.rs
//! ドラッグ＆ドロップの状態管理だよ！🖱️➡️🃏
//!
//! ここで動かすのは**見た目だけ** (PresentationState のオーバーライド)。
//! カードがどの山に属するかの論理状態は、ドロップが成立した瞬間に
//! MoveCardSystem が一気に書き換える。ドロップ失敗ならオーバーライドを
//! 剥がすだけで、カードは勝手に元の位置に戻って見える。便利！✨

use std::sync::{Arc, Mutex};

use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameState;
use crate::components::pile::StackType;
use crate::components::position::Position;
use crate::config::layout::TABLEAU_Y_OFFSET_FACE_UP;
use crate::app::animation::PresentationState;
use crate::app::event_handler;
use crate::app::layout_calculator::calculate_card_position;
use crate::systems::undo::{MoveRecord, UndoStack};
use crate::systems::MoveCardSystem;
use log::debug;

/// ドラッグで一緒に動くカードの ID 一覧 (掴んだカード＋その上全部)。
/// 論理状態はまだ動いてないので、移動前の山から読む。
pub(crate) fn dragged_run_ids(state: &GameState, info: &DraggingInfo) -> Vec<usize> {
    match info.origin_stack {
        StackType::Tableau(col) => state.tableaus[col as usize].cards()[info.origin_index..]
            .iter()
            .map(|c| c.id())
            .collect(),
        _ => vec![info.card_id],
    }
}

/// ドラッグ開始。掴めるカードなら DraggingInfo を記録して true を返すよ。
///
/// # 引数
/// * `card_id`: 掴もうとしてるカードの ID。
/// * `mouse_x`, `mouse_y`: Canvas 上のマウス座標。
pub fn handle_drag_start(
    state_arc: &Arc<Mutex<GameState>>,
    dragging_arc: &Arc<Mutex<Option<DraggingInfo>>>,
    card_id: usize,
    mouse_x: f32,
    mouse_y: f32,
) -> bool {
    let Ok(state) = state_arc.lock() else {
        return false;
    };

    let Some((stack, index)) = state.locate_card_by_id(card_id) else {
        debug!("drag_handler: card {} not found.", card_id);
        return false;
    };
    let Some(card) = state.card_at(stack, index) else {
        return false;
    };
    if !card.is_draggable {
        debug!("drag_handler: card {} is not draggable.", card_id);
        return false; // 掴めないカードはドラッグ開始しない
    }

    let pos = calculate_card_position(&state, stack, index);
    let info = DraggingInfo {
        card_id,
        origin_stack: stack,
        origin_index: index,
        original_x: pos.x,
        original_y: pos.y,
        offset_x: mouse_x - pos.x,
        offset_y: mouse_y - pos.y,
    };
    drop(state); // ロックは早めに返す！

    if let Ok(mut dragging) = dragging_arc.lock() {
        debug!("drag_handler: drag started for card {} ({:?}).", card_id, info.origin_stack);
        *dragging = Some(info);
        true
    } else {
        false
    }
}

/// ドラッグ中の位置更新。掴んでる run 全体のオーバーライドを
/// マウスに追従させるよ。論理状態は触らない！
pub fn update_dragged_position(
    state_arc: &Arc<Mutex<GameState>>,
    presentation_arc: &Arc<Mutex<PresentationState>>,
    dragging_arc: &Arc<Mutex<Option<DraggingInfo>>>,
    mouse_x: f32,
    mouse_y: f32,
) {
    let Ok(dragging) = dragging_arc.lock() else {
        return;
    };
    let Some(info) = dragging.as_ref().cloned() else {
        return;
    };
    drop(dragging);

    let run_ids = match state_arc.lock() {
        Ok(state) => dragged_run_ids(&state, &info),
        Err(_) => return,
    };

    if let Ok(mut presentation) = presentation_arc.lock() {
        let base_x = mouse_x - info.offset_x;
        let base_y = mouse_y - info.offset_y;
        for (i, id) in run_ids.iter().enumerate() {
            // run は場札と同じ見た目で縦にずらして持ち歩く
            presentation.set_override(
                *id,
                Position {
                    x: base_x,
                    y: base_y + TABLEAU_Y_OFFSET_FACE_UP * i as f32,
                },
            );
        }
    }
}

/// ドラッグ終了 (マウスボタンが離された)。
///
/// # 処理の流れ
/// 1. DraggingInfo を取り出す (なければ何もしない)。
/// 2. run のオーバーライドを全部剥がす。
/// 3. ドロップ座標から行き先の山を特定して、MoveCardSystem に移動をお願いする。
/// 4. 移動が成立したらアンドゥ履歴に記録。
///
/// # 戻り値
/// * `Some(MoveRecord)`: 移動が成立した場合。呼び出し側がアニメ再生に使う。
/// * `None`: ドロップ先がなかった/ルール違反だった場合。カードは元の位置に戻る。
pub fn handle_drag_end(
    state_arc: &Arc<Mutex<GameState>>,
    presentation_arc: &Arc<Mutex<PresentationState>>,
    dragging_arc: &Arc<Mutex<Option<DraggingInfo>>>,
    undo_arc: &Arc<Mutex<UndoStack>>,
    end_x: f32,
    end_y: f32,
) -> Option<MoveRecord> {
    // 1. ドラッグ情報を取り出す (取り出したら空になる)
    let info = dragging_arc.lock().ok()?.take()?;

    // 2. 見た目のオーバーライドを剥がす
    {
        let state = state_arc.lock().ok()?;
        let run_ids = dragged_run_ids(&state, &info);
        drop(state);
        if let Ok(mut presentation) = presentation_arc.lock() {
            for id in run_ids {
                presentation.clear_override(id);
            }
        }
    }

    // 3. ドロップ先を特定して移動を試みる
    let mut state = state_arc.lock().ok()?;
    let target = event_handler::find_drop_target(&state, end_x, end_y)?;
    debug!(
        "drag_handler: drop card {} onto {:?} at ({}, {}).",
        info.card_id, target, end_x, end_y
    );
    let record = MoveCardSystem::new().request_move(&mut state, info.card_id, target)?;
    drop(state);

    // 4. アンドゥ履歴へ
    if let Ok(mut undo) = undo_arc.lock() {
        undo.record(record);
    }
    Some(record)
}
