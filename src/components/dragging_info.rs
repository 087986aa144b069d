// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use super::pile::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
/// ドラッグが始まった瞬間にスナップショットしておいて、
/// ドロップ時の移動リクエストと、失敗した時の「元の位置に戻す」処理で使う。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    /// ドラッグ中のカードの ID (0-51)。
    pub card_id: usize,
    /// ドラッグ開始時にカードがいた山。
    pub origin_stack: StackType,
    /// ドラッグ開始時の山の中での位置 (0 が一番下)。
    pub origin_index: usize,
    /// ドラッグ開始地点のカードの X 座標。
    pub original_x: f32,
    /// ドラッグ開始地点のカードの Y 座標。
    pub original_y: f32,
    /// ドラッグ開始時のマウスとカード左上のオフセット X
    pub offset_x: f32,
    /// ドラッグ開始時のマウスとカード左上のオフセット Y
    pub offset_y: f32,
}
