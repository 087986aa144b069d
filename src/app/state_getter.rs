// src/app/state_getter.rs
//! ゲーム状態を JSON にして JS 側へ渡すためのモジュールだよ！
//! デバッグでコンソールに出したり、画像ベースで描画したいページが
//! 自前でレンダリングするのに使ったりする想定。✨

use std::sync::{Arc, Mutex};

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::components::game_state::{GameState, GameStatus};
use crate::components::pile::StackType;
use crate::app::layout_calculator::calculate_card_position;
use crate::app::renderer::{face_image_name, score_text};

/// カード1枚ぶんのスナップショット。JS にとって必要な情報を全部入り で。
#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    /// カードID (0-51)。handle_drag_start とかに渡し返してもらう用。
    pub id: usize,
    /// "A Hearts" みたいな表示名。
    pub name: String,
    /// 表画像のファイル名。例: "A Hearts.png"
    pub image: String,
    pub face_up: bool,
    pub draggable: bool,
    /// いまいる山。
    pub stack: StackType,
    /// 山の中での位置 (0 が一番下)。
    pub position_in_stack: usize,
    /// 描画位置。
    pub x: f32,
    pub y: f32,
}

/// ゲーム全体のスナップショット。
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub score: i32,
    /// 表示用のスコア文字列 ("$10" / "($52)")。マイナスは赤で出してね！
    pub score_text: String,
    pub status: GameStatus,
    pub stock_len: usize,
    pub waste_len: usize,
    pub cards: Vec<CardSnapshot>,
}

/// GameState からスナップショットを組み立てるよ。こっちは純粋関数なのでテストできる！
pub fn build_snapshot(state: &GameState) -> GameSnapshot {
    let mut cards = Vec::with_capacity(52);
    for (stack, pile) in state.piles() {
        for (index, card) in pile.cards().iter().enumerate() {
            let pos = calculate_card_position(state, stack, index);
            cards.push(CardSnapshot {
                id: card.id(),
                name: card.display_name(),
                image: face_image_name(card),
                face_up: card.is_face_up,
                draggable: card.is_draggable,
                stack,
                position_in_stack: index,
                x: pos.x,
                y: pos.y,
            });
        }
    }
    GameSnapshot {
        score: state.score,
        score_text: score_text(state.score),
        status: state.status,
        stock_len: state.stock.len(),
        waste_len: state.waste.len(),
        cards,
    }
}

/// WASM 側が保持しているゲーム状態を JSON 文字列にして返すよ！
///
/// # 戻り値
/// - `Ok(JsValue)`: スナップショットの JSON 文字列。成功！🎉
/// - `Err(JsValue)`: ロック失敗や JSON 変換失敗。JS 側でエラーとして扱える。
pub fn get_game_state_json(state_arc: &Arc<Mutex<GameState>>) -> Result<JsValue, JsValue> {
    let state = state_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock state mutex: {}", e)))?;

    let snapshot = build_snapshot(&state);
    serde_json::to_string(&snapshot)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize game state: {}", e)))
}
