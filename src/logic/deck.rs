// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::iproduct;
use rand::{seq::SliceRandom, thread_rng};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 返り値は `Vec<Card>` で、カードはスートとランクの組み合わせで全種類作られるよ。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    // iproduct! でスート×ランクの全組み合わせをひとループで回せる！便利！✨
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// rand の `SliceRandom::shuffle` は中身がちゃんとした Fisher–Yates なので、
/// どの並び順も同じ確率で出る。自前でインデックスをこねる必要はなし！
///
/// # 引数
/// * `deck` - シャッフルしたいカードデッキ (`Vec<Card>`) への可変参照。
pub fn shuffle_deck(deck: &mut Vec<Card>) {
    let mut rng = thread_rng(); // 乱数生成器を取得
    deck.shuffle(&mut rng); // デッキをシャッフル！
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);
        println!("生成されたデッキの枚数: {}", deck.len());

        // 2. 重複がないかチェック！ (ちょっと大変だけど大事！)
        use std::collections::HashSet;
        let mut unique_cards = HashSet::with_capacity(52);
        for card in &deck {
            // HashSet の insert メソッドは、要素が既に追加されていたら false を返すよ！
            assert!(
                unique_cards.insert((card.suit, card.rank)),
                "デッキに重複したカードが見つかりました！ {:?}",
                card
            );
        }

        // 3. すべてのカードが裏向きかチェック！
        let all_face_down = deck.iter().all(|card| !card.is_face_up);
        assert!(all_face_down, "デッキに表向きのカードが含まれています！");

        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone(); // コピーしてシャッフルする
        shuffle_deck(&mut shuffled_deck);

        // シャッフルしたら元の順番とは (ほぼ確実に) 変わるはず
        // ただし、ごく稀に同じ順番になる可能性もあるので、完全なテストではない
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない (稀に起こりうる)");
        // サイズは変わらないはず
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");

        // 中身のカードの集合は変わってないはず
        use std::collections::HashSet;
        let before: HashSet<_> = initial_deck.iter().map(|c| (c.suit, c.rank)).collect();
        let after: HashSet<_> = shuffled_deck.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(before, after, "シャッフルでカードが入れ替わったり消えたりした！");
    }
}
