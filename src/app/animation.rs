// src/app/animation.rs
//! 見た目のアニメーションを受け持つプレゼンテーションスケジューラだよ！🎬
//!
//! 大事な約束: **論理的な状態 (GameState) は移動の瞬間に一気に書き換わる**。
//! ここでやるのは、もう決まった配置を「1枚ずつ遅れて追いつく」ように
//! 見せることだけ。だから途中で何が起きてもカードの山が壊れることはない！
//!
//! 仕組み:
//! 1. 移動前に各カードの描画位置をスナップショットしておく (layout_calculator)。
//! 2. 状態を更新したら、MoveRecord から「どのカードが何ミリ秒後に動くか」の
//!    ステップ列を作る (`steps_for_record`)。
//! 3. まだ動いてないカードには古い位置のオーバーライドを被せて描画。
//! 4. `setTimeout` が発火するたびにオーバーライドを1枚ぶん剥がして再描画。
//! 5. 全ステップが終わるまで `in_flight` カウンタで入力をガードする。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::game_state::GameState;
use crate::components::position::Position;
use crate::config::timing::{
    DEAL_CARD_STAGGER_MS, DEAL_ROW_STAGGER_MS, RESET_STOCK_STAGGER_MS, RUN_DROP_TOTAL_MS,
    TURN_STOCK_STAGGER_MS,
};
use crate::systems::undo::MoveRecord;
use crate::app::renderer;

/// 見た目だけの状態だよ。論理状態 (GameState) とは完全に別物！
#[derive(Debug, Default)]
pub struct PresentationState {
    /// カードID → 「本来の位置の代わりにここに描いてね」という一時的な位置。
    /// ドラッグ中のカードと、アニメーション待ちのカードが入る。
    overrides: HashMap<usize, Position>,
    /// まだ発火してないアニメーションステップの数。
    /// 0 じゃない間は入力を受け付けない (re-entrant なクリックで状態を壊さないため)。
    in_flight: usize,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// アニメーション再生中かどうか。入力ハンドラはこれを見て no-op になる。
    pub fn is_animating(&self) -> bool {
        self.in_flight > 0
    }

    pub fn override_for(&self, card_id: usize) -> Option<Position> {
        self.overrides.get(&card_id).copied()
    }

    pub fn set_override(&mut self, card_id: usize, pos: Position) {
        self.overrides.insert(card_id, pos);
    }

    pub fn clear_override(&mut self, card_id: usize) {
        self.overrides.remove(&card_id);
    }

    /// いま張られてるオーバーライドの一覧。ドラッグ解放位置からの
    /// アニメーション開始位置を作るときに使う。
    pub fn override_entries(&self) -> Vec<(usize, Position)> {
        self.overrides.iter().map(|(&id, &pos)| (id, pos)).collect()
    }
}

/// アニメーション1ステップ。「このカードを delay_ms 後に最終位置へ」という指示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualStep {
    pub card_id: usize,
    pub delay_ms: i32,
}

/// 実行済みの MoveRecord から、見た目のステップ列を組み立てるよ。
/// `state` は**移動後**の状態を渡すこと！
///
/// 間隔は元祖のテンポに合わせてある:
/// - 配り: 1枚 50ms、行が変わるごとに +75ms
/// - 山札めくり: 1枚 50ms
/// - 捨て札リセット: 1枚 25ms
/// - 複数枚移動: 合計 250ms を枚数で割る
pub fn steps_for_record(state: &GameState, record: &MoveRecord) -> Vec<VisualStep> {
    let mut steps = Vec::new();
    match *record {
        MoveRecord::Deal => {
            // 配った順そのまま: 行ごとに左から右へ。
            let mut timeout = 0;
            for row in 1..=7usize {
                for col in row..=7usize {
                    if let Some(card) = state.tableaus[col - 1].cards().get(row - 1) {
                        steps.push(VisualStep { card_id: card.id(), delay_ms: timeout });
                    }
                    timeout += DEAL_CARD_STAGGER_MS;
                }
                timeout += DEAL_ROW_STAGGER_MS;
            }
        }
        MoveRecord::TurnStock { count } => {
            let waste = state.waste.cards();
            let start = waste.len().saturating_sub(count);
            for (i, card) in waste[start..].iter().enumerate() {
                steps.push(VisualStep {
                    card_id: card.id(),
                    delay_ms: i as i32 * TURN_STOCK_STAGGER_MS,
                });
            }
        }
        MoveRecord::ResetStock { count } => {
            // リセット後の山札は下から順に積まれたので、下から count 枚が動いたカード。
            for (i, card) in state.stock.cards().iter().take(count).enumerate() {
                steps.push(VisualStep {
                    card_id: card.id(),
                    delay_ms: i as i32 * RESET_STOCK_STAGGER_MS,
                });
            }
        }
        MoveRecord::MoveRun { dst, count, .. } => {
            if count == 0 {
                return steps;
            }
            let interval = RUN_DROP_TOTAL_MS / count as i32;
            let pile = state.pile(dst).cards();
            let start = pile.len().saturating_sub(count);
            for (i, card) in pile[start..].iter().enumerate() {
                steps.push(VisualStep { card_id: card.id(), delay_ms: i as i32 * interval });
            }
        }
        MoveRecord::PlayToFoundation { foundation_index, .. } => {
            if let Some(card) = state.foundations[foundation_index as usize].top() {
                steps.push(VisualStep { card_id: card.id(), delay_ms: 0 });
            }
        }
    }
    steps
}

/// 配り直しアニメーション用の「移動前の位置」: 全カード山札の位置から飛んでいく。
pub fn deal_origin_positions(state: &GameState) -> HashMap<usize, Position> {
    let origin = Position {
        x: crate::config::layout::STOCK_POS_X,
        y: crate::config::layout::STOCK_POS_Y,
    };
    let mut positions = HashMap::with_capacity(52);
    for (_, pile) in state.piles() {
        for card in pile.cards() {
            positions.insert(card.id(), origin);
        }
    }
    positions
}

/// MoveRecord のアニメーションを再生するよ。
///
/// # 引数
/// * `state_arc`: 移動**後**のゲーム状態。
/// * `presentation_arc`: オーバーライドと in_flight カウンタの置き場。
/// * `before`: 移動**前**の各カードの描画位置 (layout_calculator::snapshot_positions)。
/// * `record`: いま実行された操作。
/// * `canvas`, `context`: 再描画用。
pub fn play_record_animation(
    state_arc: &Arc<Mutex<GameState>>,
    presentation_arc: &Arc<Mutex<PresentationState>>,
    before: &HashMap<usize, Position>,
    record: &MoveRecord,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
) {
    let steps = match state_arc.lock() {
        Ok(state) => steps_for_record(&state, record),
        Err(_) => return,
    };

    let window = match web_sys::window() {
        Some(w) => w,
        None => return, // window がない環境 (テストとか) ではアニメーションなし
    };

    for step in steps {
        if step.delay_ms <= 0 {
            continue; // 最初の1枚は即座に最終位置でOK
        }
        let Some(&origin) = before.get(&step.card_id) else {
            continue; // 移動前の位置が分からないカードはそのまま描く
        };

        // まずは古い位置に釘付けにしておく
        if let Ok(mut presentation) = presentation_arc.lock() {
            presentation.set_override(step.card_id, origin);
        } else {
            continue;
        }

        // delay_ms 後に釘を抜いて再描画するクロージャを予約！
        // Closure::once_into_js なら一回呼ばれた後に勝手に片付くので forget 不要。
        let presentation = Arc::clone(presentation_arc);
        let state = Arc::clone(state_arc);
        let canvas = canvas.clone();
        let context = context.clone();
        let card_id = step.card_id;
        let callback = Closure::once_into_js(move || {
            if let Ok(mut p) = presentation.lock() {
                p.clear_override(card_id);
                p.in_flight = p.in_flight.saturating_sub(1);
            }
            let _ = renderer::render_game(&state, &presentation, &canvas, &context);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            step.delay_ms,
        ) {
            Ok(_) => {
                if let Ok(mut presentation) = presentation_arc.lock() {
                    presentation.in_flight += 1;
                }
            }
            Err(_) => {
                // 予約に失敗したら釘を抜いておく (カードが置き去りにならないように)
                if let Ok(mut presentation) = presentation_arc.lock() {
                    presentation.clear_override(step.card_id);
                }
            }
        }
    }
}

/// アニメ由来のステップが全部発火するまで遊べないようにするための問い合わせ。
pub fn is_input_locked(presentation_arc: &Arc<Mutex<PresentationState>>) -> bool {
    presentation_arc
        .lock()
        .map(|p| p.is_animating())
        .unwrap_or(true)
}
