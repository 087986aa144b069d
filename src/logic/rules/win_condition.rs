//! ゲームクリア判定だよ。

/// ゲームのクリア条件（全てのカードが組札にあるか）を判定する。
///
/// # 引数
/// * `foundation_card_count`: 現在、全ての組札（Foundation）にあるカードの合計枚数。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == 52 // 標準的な52枚デッキの場合
}
