// src/app/renderer.rs
//! Canvas への描画ロジック。
//! GameState と PresentationState を読んで、カードを全部描き直すだけ。
//! 状態には一切触らない！描画は何回呼んでも同じ絵になる。

use std::sync::{Arc, Mutex};

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::card::{Card, Suit};
use crate::components::game_state::GameState;
use crate::components::position::Position;
use crate::config::layout::{
    CARD_HEIGHT, CARD_WIDTH, SCORE_POS_X, SCORE_POS_Y,
};
use crate::app::animation::PresentationState;
use crate::app::layout_calculator::calculate_card_position;
use crate::logic::rules::CardColor;

// --- 色の定数。描画でしか使わないのでここに置いておく ---
const TABLE_COLOR: &str = "#0b5d2a"; // テーブルの緑
const SLOT_COLOR: &str = "rgba(255, 255, 255, 0.35)"; // 空きスロットの枠
const CARD_FACE_COLOR: &str = "#f8fafc"; // カードの表
const CARD_BACK_COLOR: &str = "#1d4ed8"; // カードの裏
const CARD_BACK_INNER_COLOR: &str = "#3b82f6"; // 裏面の模様
const CARD_BORDER_COLOR: &str = "#0f172a"; // カードの枠線
const RED_SUIT_COLOR: &str = "#dc2626"; // ❤️♦️
const BLACK_SUIT_COLOR: &str = "#111827"; // ♣️♠️
const SCORE_COLOR: &str = "lightblue"; // スコア (プラス)
const SCORE_NEGATIVE_COLOR: &str = "red"; // スコア (マイナス)

/// スコアの表示文字列を作るよ。
/// マイナスのときは赤字で括弧付き、というのが元祖の流儀: `($52)` / `$10`
pub fn score_text(score: i32) -> String {
    if score < 0 {
        format!("(${})", -score)
    } else {
        format!("${}", score)
    }
}

/// カードの表画像のファイル名。画像でレンダリングするページ用に
/// JSON スナップショットへ入れる。例: "A Spades.png"
pub fn face_image_name(card: &Card) -> String {
    format!("{}.png", card.display_name())
}

/// スートの記号1文字。Canvas に直接描くとき用。
fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Heart => "♥",
        Suit::Diamond => "♦",
        Suit::Club => "♣",
        Suit::Spade => "♠",
    }
}

/// Rust側で Canvas にゲーム画面を描画する関数。
///
/// 描画順: テーブル → 空きスロット → 通常のカード (山ごとに下から上へ) →
/// オーバーライド中のカード (ドラッグ/アニメ中のものは一番手前！) → スコア。
pub fn render_game(
    state_arc: &Arc<Mutex<GameState>>,
    presentation_arc: &Arc<Mutex<PresentationState>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    let state = state_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock state mutex: {}", e)))?;
    let presentation = presentation_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock presentation mutex: {}", e)))?;

    let canvas_width = canvas.width() as f64;
    let canvas_height = canvas.height() as f64;

    // --- テーブル ---
    context.clear_rect(0.0, 0.0, canvas_width, canvas_height);
    context.set_fill_style_str(TABLE_COLOR);
    context.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    // --- 空きスロットの枠 ---
    context.set_line_width(2.0);
    context.set_stroke_style_str(SLOT_COLOR);
    for (stack, _) in state.piles() {
        let pos = calculate_card_position(&state, stack, 0);
        context.stroke_rect(
            pos.x as f64,
            pos.y as f64,
            CARD_WIDTH as f64,
            CARD_HEIGHT as f64,
        );
    }

    // --- カード本体 ---
    // オーバーライド中 (ドラッグ/アニメ中) のカードは後回しにして一番手前に描く！
    let mut deferred: Vec<(Position, Card)> = Vec::new();
    for (stack, pile) in state.piles() {
        for (index, card) in pile.cards().iter().enumerate() {
            if let Some(override_pos) = presentation.override_for(card.id()) {
                deferred.push((override_pos, card.clone()));
            } else {
                let pos = calculate_card_position(&state, stack, index);
                draw_card(context, pos, card)?;
            }
        }
    }
    for (pos, card) in &deferred {
        draw_card(context, *pos, card)?;
    }

    // --- スコア ---
    context.set_font("28px monospace");
    context.set_fill_style_str(if state.score < 0 {
        SCORE_NEGATIVE_COLOR
    } else {
        SCORE_COLOR
    });
    context.fill_text(&score_text(state.score), SCORE_POS_X, SCORE_POS_Y)?;

    Ok(())
}

/// カード1枚を描くよ。
fn draw_card(
    context: &CanvasRenderingContext2d,
    pos: Position,
    card: &Card,
) -> Result<(), JsValue> {
    let x = pos.x as f64;
    let y = pos.y as f64;
    let w = CARD_WIDTH as f64;
    let h = CARD_HEIGHT as f64;

    if card.is_face_up {
        context.set_fill_style_str(CARD_FACE_COLOR);
        context.fill_rect(x, y, w, h);
        context.set_stroke_style_str(CARD_BORDER_COLOR);
        context.stroke_rect(x, y, w, h);

        let color = match CardColor::from_suit(card.suit) {
            CardColor::Red => RED_SUIT_COLOR,
            CardColor::Black => BLACK_SUIT_COLOR,
        };
        context.set_fill_style_str(color);

        // 左上にランクとスート
        context.set_font("18px sans-serif");
        context.fill_text(card.rank.label(), x + 8.0, y + 22.0)?;
        context.fill_text(suit_symbol(card.suit), x + 8.0, y + 42.0)?;
        // 真ん中に大きくスート
        context.set_font("44px serif");
        context.fill_text(suit_symbol(card.suit), x + w / 2.0 - 14.0, y + h / 2.0 + 14.0)?;
    } else {
        context.set_fill_style_str(CARD_BACK_COLOR);
        context.fill_rect(x, y, w, h);
        context.set_fill_style_str(CARD_BACK_INNER_COLOR);
        context.fill_rect(x + 8.0, y + 8.0, w - 16.0, h - 16.0);
        context.set_stroke_style_str(CARD_BORDER_COLOR);
        context.stroke_rect(x, y, w, h);
    }

    Ok(())
}

// --- テスト (Canvas に触らない純粋な部分だけ) ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;

    #[test]
    fn score_text_renders_negative_distinctly() {
        // マイナスは括弧付き！元祖の流儀！
        assert_eq!(score_text(10), "$10");
        assert_eq!(score_text(0), "$0");
        assert_eq!(score_text(-52), "($52)");
        println!("スコア表示テスト、成功！🎉");
    }

    #[test]
    fn face_image_name_matches_asset_naming() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        assert_eq!(face_image_name(&card), "A Spades.png");
        let card = Card::new(Suit::Diamond, Rank::Ten);
        assert_eq!(face_image_name(&card), "10 Diamonds.png");
    }

    #[test]
    fn suit_symbols_are_unique() {
        use std::collections::HashSet;
        let symbols: HashSet<_> = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade]
            .iter()
            .map(|&s| suit_symbol(s))
            .collect();
        assert_eq!(symbols.len(), 4);
    }
}
