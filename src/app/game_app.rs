// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::pile::StackType;
use crate::components::position::Position;
use crate::app::animation::{self, PresentationState};
use crate::app::browser_event_manager;
use crate::app::drag_handler;
use crate::app::event_handler::{self, ClickTarget};
use crate::app::init_handler;
use crate::app::layout_calculator;
use crate::app::renderer;
use crate::app::state_getter;
use crate::systems::undo::MoveRecord;
use crate::systems::{DealSystem, MoveCardSystem, StockSystem, UndoStack};
use crate::{error, log};

use std::collections::HashMap;

/// ゲーム全体のアプリケーション状態を管理する構造体だよ！
/// JS 側はこの GameApp のメソッドだけ叩けばゲームが動く。
///
/// 論理状態 (GameState)、アンドゥ履歴、見た目の状態 (PresentationState)、
/// ドラッグ状態を Arc<Mutex<>> で持つ。Wasm は基本シングルスレッドだけど、
/// イベントクロージャと共有するために Arc で包むのが作法！
#[wasm_bindgen]
pub struct GameApp {
    state: Arc<Mutex<GameState>>,
    undo_stack: Arc<Mutex<UndoStack>>,
    presentation: Arc<Mutex<PresentationState>>,
    dragging: Arc<Mutex<Option<DraggingInfo>>>,
    // エグゼキュータたち。状態を持たないので直接持っておく。
    move_system: MoveCardSystem,
    deal_system: DealSystem,
    stock_system: StockSystem,
    // ドラッグ中だけ Window にアタッチするリスナーの置き場。
    window_mousemove_closure: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
    window_mouseup_closure: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
    // Canvas 要素と 2D コンテキスト。
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        log("GameApp: Initializing...");

        // Canvas 初期化 (エラー処理は expect で簡略化)
        let (canvas, context) =
            init_handler::initialize_canvas().expect("Failed to initialize canvas and context");

        let app = Self {
            state: Arc::new(Mutex::new(GameState::new())),
            undo_stack: Arc::new(Mutex::new(UndoStack::new())),
            presentation: Arc::new(Mutex::new(PresentationState::new())),
            dragging: Arc::new(Mutex::new(None)),
            move_system: MoveCardSystem::new(),
            deal_system: DealSystem::default(),
            stock_system: StockSystem::new(),
            window_mousemove_closure: Arc::new(Mutex::new(None)),
            window_mouseup_closure: Arc::new(Mutex::new(None)),
            canvas,
            context,
        };

        log("GameApp: Initialization complete.");
        app
    }

    /// アニメーション再生中は入力お断り！
    /// 論理状態はとっくに確定してるけど、連打で履歴や見た目が
    /// ぐちゃぐちゃにならないように、絵が追いつくまで待ってもらう。
    fn input_locked(&self) -> bool {
        animation::is_input_locked(&self.presentation)
    }

    /// 実行済みの操作のアニメーションを流して再描画する共通処理。
    fn animate_and_render(&self, before: &HashMap<usize, Position>, record: &MoveRecord) {
        animation::play_record_animation(
            &self.state,
            &self.presentation,
            before,
            record,
            &self.canvas,
            &self.context,
        );
        if let Err(e) = renderer::render_game(&self.state, &self.presentation, &self.canvas, &self.context) {
            error(&format!("GameApp: render failed: {:?}", e));
        }
    }

    /// 新しいゲームを配るよ。スコアから配り直し代 52 を払う。
    /// この操作はアンドゥできない (履歴が丸ごと消える)！
    #[wasm_bindgen]
    pub fn request_redeal(&self) -> bool {
        if self.input_locked() {
            return false;
        }
        log("GameApp: request_redeal called.");

        let record = match self.state.lock() {
            Ok(mut state) => self.deal_system.execute(&mut state),
            Err(e) => {
                error(&format!("GameApp: failed to lock state for redeal: {}", e));
                return false;
            }
        };
        if let Ok(mut undo) = self.undo_stack.lock() {
            undo.record(record); // Deal は記録すると履歴が消える
        }

        // 配りのアニメーションは全カード山札から飛んでいく
        let before = match self.state.lock() {
            Ok(state) => animation::deal_origin_positions(&state),
            Err(_) => HashMap::new(),
        };
        self.animate_and_render(&before, &record);
        true
    }

    /// 山札クリック相当の操作。山札が残ってればめくり、空ならリセット。
    #[wasm_bindgen]
    pub fn request_stock_advance(&self) -> bool {
        if self.input_locked() {
            return false;
        }

        let (before, record) = match self.state.lock() {
            Ok(mut state) => {
                let before = layout_calculator::snapshot_positions(&state);
                (before, self.stock_system.advance(&mut state))
            }
            Err(e) => {
                error(&format!("GameApp: failed to lock state for stock advance: {}", e));
                return false;
            }
        };

        let Some(record) = record else {
            return false; // 山札も捨て札も空っぽだった
        };
        if let Ok(mut undo) = self.undo_stack.lock() {
            undo.record(record);
        }
        self.animate_and_render(&before, &record);
        true
    }

    /// 直前の操作を1つ取り消すよ。履歴が空なら何も起きない。
    #[wasm_bindgen]
    pub fn request_undo(&self) -> bool {
        if self.input_locked() {
            return false;
        }

        let undone = match (self.state.lock(), self.undo_stack.lock()) {
            (Ok(mut state), Ok(mut undo)) => undo.undo_last(&mut state),
            _ => {
                error("GameApp: failed to lock state/undo for undo.");
                return false;
            }
        };
        if undone {
            // アンドゥは演出なしでパッと戻す
            if let Err(e) =
                renderer::render_game(&self.state, &self.presentation, &self.canvas, &self.context)
            {
                error(&format!("GameApp: render failed: {:?}", e));
            }
        }
        undone
    }

    /// カード移動リクエスト。移動先は StackType の JSON で渡してもらう
    /// (例: `"\"Stock\""` や `{"Tableau":3}` )。
    /// ルール違反なら何も起きないで false が返るだけ！
    #[wasm_bindgen]
    pub fn request_move(&self, card_id: usize, target_stack_json: String) -> bool {
        if self.input_locked() {
            return false;
        }

        // JSON 文字列をデシリアライズ
        let target: StackType = match serde_json::from_str(&target_stack_json) {
            Ok(target) => target,
            Err(e) => {
                error(&format!(
                    "GameApp: failed to deserialize target_stack_json: {}. JSON: {}",
                    e, target_stack_json
                ));
                return false;
            }
        };

        let (before, record) = match self.state.lock() {
            Ok(mut state) => {
                let before = layout_calculator::snapshot_positions(&state);
                (before, self.move_system.request_move(&mut state, card_id, target))
            }
            Err(e) => {
                error(&format!("GameApp: failed to lock state for move: {}", e));
                return false;
            }
        };

        let Some(record) = record else {
            return false; // ルール違反 → 黙って無視 (これは正常系！)
        };
        if let Ok(mut undo) = self.undo_stack.lock() {
            undo.record(record);
        }
        self.animate_and_render(&before, &record);
        true
    }

    /// ダブルクリックの自動移動。一番上のカードが飛べる組札を探して飛ばすよ。
    #[wasm_bindgen]
    pub fn request_auto_play(&self, card_id: usize) -> bool {
        if self.input_locked() {
            return false;
        }

        let (before, record) = match self.state.lock() {
            Ok(mut state) => {
                let before = layout_calculator::snapshot_positions(&state);
                (before, self.move_system.request_auto_play(&mut state, card_id))
            }
            Err(e) => {
                error(&format!("GameApp: failed to lock state for auto play: {}", e));
                return false;
            }
        };

        let Some(record) = record else {
            return false;
        };
        if let Ok(mut undo) = self.undo_stack.lock() {
            undo.record(record);
        }
        self.animate_and_render(&before, &record);
        true
    }

    /// Canvas 上のクリック。山札まわりだけがクリックで動く:
    /// 山札のカード → めくる、空の山札エリア → リセット。
    #[wasm_bindgen]
    pub fn handle_click(&self, x: f32, y: f32) {
        if self.input_locked() {
            return;
        }

        let clicked = match self.state.lock() {
            Ok(state) => event_handler::find_clicked_element(&state, x, y),
            Err(_) => None,
        };

        match clicked {
            Some(ClickTarget::Card(card_id)) => {
                // 山札のカードをクリック → めくる
                let in_stock = self
                    .state
                    .lock()
                    .ok()
                    .and_then(|state| state.locate_card_by_id(card_id))
                    .map(|(stack, _)| stack == StackType::Stock)
                    .unwrap_or(false);
                if in_stock {
                    self.request_stock_advance();
                }
                // 他のカードのクリックはドラッグ (mousedown) 側で処理する
            }
            Some(ClickTarget::Stack(StackType::Stock)) => {
                // 空の山札エリアをクリック → 捨て札を山札に戻す
                self.request_stock_advance();
            }
            _ => {
                // 他の空きエリアや背景のクリックは何もしない
            }
        }
    }

    /// Canvas 上のダブルクリック。カードなら組札への自動移動を試すよ。
    #[wasm_bindgen]
    pub fn handle_double_click(&self, x: f32, y: f32) {
        if self.input_locked() {
            return;
        }

        let clicked = match self.state.lock() {
            Ok(state) => event_handler::find_clicked_element(&state, x, y),
            Err(_) => None,
        };
        if let Some(ClickTarget::Card(card_id)) = clicked {
            log(&format!("GameApp: double click on card {} -> auto play.", card_id));
            self.request_auto_play(card_id);
        }
    }

    /// Canvas 上の mousedown。掴めるカードならドラッグ開始！
    /// ドラッグ中の追従とドロップは Window リスナー側でやる。
    #[wasm_bindgen]
    pub fn handle_mouse_down(&self, x: f32, y: f32) -> bool {
        if self.input_locked() {
            return false;
        }

        let clicked = match self.state.lock() {
            Ok(state) => event_handler::find_clicked_element(&state, x, y),
            Err(_) => None,
        };
        let Some(ClickTarget::Card(card_id)) = clicked else {
            return false;
        };

        if !drag_handler::handle_drag_start(&self.state, &self.dragging, card_id, x, y) {
            return false;
        }

        // MouseMove と MouseUp リスナーを Window にアタッチ
        if let Err(e) = browser_event_manager::attach_drag_listeners(
            Arc::clone(&self.state),
            Arc::clone(&self.presentation),
            Arc::clone(&self.dragging),
            Arc::clone(&self.undo_stack),
            Arc::clone(&self.window_mousemove_closure),
            Arc::clone(&self.window_mouseup_closure),
            &self.canvas,
            &self.context,
        ) {
            error(&format!("GameApp: failed to attach drag listeners: {:?}", e));
            // リスナーが付かなかったらドラッグ自体もなかったことにする
            if let Ok(mut dragging) = self.dragging.lock() {
                *dragging = None;
            }
            return false;
        }
        log(&format!("GameApp: drag started for card {}.", card_id));
        true
    }

    /// ゲーム画面を描き直すよ。JS 側の requestAnimationFrame からでも、
    /// リサイズ後の一発再描画でも、好きなタイミングで呼んでOK！
    #[wasm_bindgen]
    pub fn render_game(&self) -> Result<(), JsValue> {
        renderer::render_game(&self.state, &self.presentation, &self.canvas, &self.context)
    }

    /// 現在のスコア。
    #[wasm_bindgen]
    pub fn score(&self) -> i32 {
        self.state.lock().map(|state| state.score).unwrap_or(0)
    }

    /// 表示用のスコア文字列。マイナスは "($52)" 形式なので赤字で出してね！
    #[wasm_bindgen]
    pub fn score_text(&self) -> String {
        renderer::score_text(self.score())
    }

    /// 勝った？🏆
    #[wasm_bindgen]
    pub fn is_won(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.status == GameStatus::Won)
            .unwrap_or(false)
    }

    /// ゲーム状態を JSON 文字列で取得するよ。デバッグにも描画にも使える！
    #[wasm_bindgen]
    pub fn get_game_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_game_state_json(&self.state)
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

// GameApp が破棄されるとき、残ってるドラッグ用リスナーを外しておく (Drop トレイト)
impl Drop for GameApp {
    fn drop(&mut self) {
        let _ = browser_event_manager::detach_drag_listeners(
            &self.window_mousemove_closure,
            &self.window_mouseup_closure,
        );
    }
}
