// src/app/browser_event_manager.rs
//! Window-level mousemove/mouseup listeners that only live for the duration
//! of a drag. Attached on drag start, detached when the mouse button comes
//! back up.

use std::sync::{Arc, Mutex};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};

use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameState;
use crate::app::animation::{self, PresentationState};
use crate::app::layout_calculator;
use crate::app::renderer;
use crate::app::drag_handler;
use crate::systems::undo::UndoStack;

/// ブラウザのクライアント座標を Canvas のローカル座標に直すよ。
pub(crate) fn canvas_coords(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        (f64::from(event.client_x()) - rect.left()) as f32,
        (f64::from(event.client_y()) - rect.top()) as f32,
    )
}

/// ドラッグ中だけ有効な mousemove / mouseup リスナーを Window にアタッチするよ。
///
/// mousemove: 掴んでる run の見た目の位置をマウスに追従させて再描画。
/// mouseup: ドロップ処理 (drag_handler::handle_drag_end) を実行して、
///          成立した移動ならアニメーションを再生して、自分たちを取り外す。
#[allow(clippy::too_many_arguments)]
pub fn attach_drag_listeners(
    state: Arc<Mutex<GameState>>,
    presentation: Arc<Mutex<PresentationState>>,
    dragging: Arc<Mutex<Option<DraggingInfo>>>,
    undo: Arc<Mutex<UndoStack>>,
    mousemove_slot: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
    mouseup_slot: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    // --- mousemove ---
    let mousemove_closure = {
        let state = Arc::clone(&state);
        let presentation = Arc::clone(&presentation);
        let dragging = Arc::clone(&dragging);
        let canvas = canvas.clone();
        let context = context.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = canvas_coords(&canvas, mouse);
            drag_handler::update_dragged_position(&state, &presentation, &dragging, x, y);
            let _ = renderer::render_game(&state, &presentation, &canvas, &context);
        }) as Box<dyn FnMut(Event)>)
    };

    // --- mouseup ---
    let mouseup_closure = {
        let state = Arc::clone(&state);
        let presentation = Arc::clone(&presentation);
        let dragging = Arc::clone(&dragging);
        let undo = Arc::clone(&undo);
        let mousemove_slot = Arc::clone(&mousemove_slot);
        let mouseup_slot = Arc::clone(&mouseup_slot);
        let canvas = canvas.clone();
        let context = context.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = canvas_coords(&canvas, mouse);

            // 「動かす前」の見た目の位置を覚えておく。
            // ドラッグ中のカードは掴まれてた位置 (オーバーライド) から飛んでいく！
            let mut before = match state.lock() {
                Ok(s) => layout_calculator::snapshot_positions(&s),
                Err(_) => return,
            };
            if let Ok(p) = presentation.lock() {
                for (id, pos) in p.override_entries() {
                    before.insert(id, pos);
                }
            }

            let record = drag_handler::handle_drag_end(&state, &presentation, &dragging, &undo, x, y);
            if let Some(record) = record {
                animation::play_record_animation(
                    &state,
                    &presentation,
                    &before,
                    &record,
                    &canvas,
                    &context,
                );
            }
            let _ = renderer::render_game(&state, &presentation, &canvas, &context);

            // 自分たち (mousemove / mouseup) を取り外す
            let _ = detach_drag_listeners(&mousemove_slot, &mouseup_slot);
        }) as Box<dyn FnMut(Event)>)
    };

    window.add_event_listener_with_callback(
        "mousemove",
        mousemove_closure.as_ref().unchecked_ref(),
    )?;
    window.add_event_listener_with_callback("mouseup", mouseup_closure.as_ref().unchecked_ref())?;

    // Closure はスロットに保持しておく。前のドラッグのものが残っていたら
    // ここで入れ替わって破棄される (実行中のクロージャを自分で破棄しないための作法)。
    if let Ok(mut slot) = mousemove_slot.lock() {
        *slot = Some(mousemove_closure);
    }
    if let Ok(mut slot) = mouseup_slot.lock() {
        *slot = Some(mouseup_closure);
    }
    Ok(())
}

/// ドラッグ用リスナーを Window から取り外すよ。
///
/// Closure オブジェクト自体はスロットに残す: mouseup リスナーが自分の実行中に
/// 自分を破棄しちゃうと危ないので、破棄は次の attach (入れ替え) に任せる。
pub fn detach_drag_listeners(
    mousemove_slot: &Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
    mouseup_slot: &Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    if let Ok(slot) = mousemove_slot.lock() {
        if let Some(closure) = slot.as_ref() {
            window
                .remove_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        }
    }
    if let Ok(slot) = mouseup_slot.lock() {
        if let Some(closure) = slot.as_ref() {
            window
                .remove_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        }
    }
    Ok(())
}
