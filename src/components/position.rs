// src/components/position.rs

// serde を使う宣言！位置情報も JSON スナップショットに入れるよ！
use serde::{Serialize, Deserialize};

/// 2D空間での位置を表す構造体だよ！ (x, y) 座標を持つよ。📍
///
/// カードの描画位置とか、クリック判定の矩形計算とか、いろんな場所で使う！
///
/// 座標の型は `f32`。整数 (`i32`) でもいいけど、アニメーションで滑らかに
/// 動かす時に小数点以下も扱えると便利だからね！😉
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_position() {
        let pos = Position { x: 100.5, y: -50.0 };

        assert_eq!(pos.x, 100.5);
        assert_eq!(pos.y, -50.0);

        let pos_same = Position { x: 100.5, y: -50.0 };
        let pos_different = Position { x: 0.0, y: 0.0 };
        assert_eq!(pos, pos_same);
        assert_ne!(pos, pos_different);

        println!("Position 作成テスト、成功！🎉");
    }
}
