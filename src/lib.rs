// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod logic;
pub mod systems;

// JS 側が使う入口はこれ1つ！
pub use app::GameApp;

// JavaScript の console.log / console.error を Rust から呼び出すための準備 (extern ブロック)。
// ⚠️ これはブラウザ専用！logic / systems の中では `log` クレートのマクロを使うこと。
// (ネイティブの cargo test でうっかり呼ぶと落ちるからね)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}
