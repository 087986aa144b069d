// src/app/init_handler.rs
//! GameApp 起動時の初期化まわりだよ。Canvas と 2D コンテキストの取得。

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// ページに置いてある Canvas 要素の ID。HTML 側とあわせること！
pub const CANVAS_ELEMENT_ID: &str = "game-canvas";

/// Canvas 要素と 2D コンテキストを取得するよ。
///
/// # 戻り値
/// - `Ok((canvas, context))`: 取得成功！🎉
/// - `Err(JsValue)`: 要素が見つからない、型が違う、コンテキストが取れない等。
pub fn initialize_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or_else(|| JsValue::from_str(&format!("canvas element '{}' not found", CANVAS_ELEMENT_ID)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a <canvas>"))?;

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))?;

    Ok((canvas, context))
}
