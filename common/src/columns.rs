//! 列名解決モジュール
//!
//! データソースごとに異なる列名を、論理フィールドの候補列リストから解決する。
//! 値が得られない場合は空文字列／`None` に縮退し、エラーにはしない。

use crate::types::Row;

/// 候補列から最初に値のある列の値を取得
///
/// 列が存在し、かつ空白以外の文字を含むセルを優先順に探す。
/// 見つからなければ空文字列。
///
/// # Arguments
/// * `row` - 入力行
/// * `candidates` - 候補列名（優先順）
///
/// # Returns
/// 前後の空白を除いた値
pub fn resolve(row: &Row, candidates: &[&str]) -> String {
    first_populated(row, candidates)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// 候補列から座標値を取得
///
/// 列の優先順位は [`resolve`] と同じ。数値に変換できなければ `None`。
pub fn resolve_numeric(row: &Row, candidates: &[&str]) -> Option<f64> {
    first_populated(row, candidates).and_then(parse_coordinate)
}

/// 座標文字列を数値に変換
///
/// 1. そのまま数値変換
/// 2. 桁区切りのカンマと前後の空白を除去して再変換
///
/// NaN・無限大は `None` とする（JSON出力で null になる）。
pub fn parse_coordinate(text: &str) -> Option<f64> {
    let parsed = text
        .trim()
        .parse::<f64>()
        .ok()
        .or_else(|| text.replace(',', "").trim().parse::<f64>().ok())?;

    if parsed.is_finite() {
        Some(parsed)
    } else {
        None
    }
}

/// スキーマ上で最初に存在する候補列名
pub fn first_present_column<'a>(columns: &[String], candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|candidate| columns.iter().any(|c| c == candidate))
}

fn first_populated<'r>(row: &'r Row, candidates: &[&str]) -> Option<&'r str> {
    candidates
        .iter()
        .filter(|candidate| row.has_column(candidate))
        .filter_map(|candidate| row.get(candidate))
        .find(|value| !value.trim().is_empty())
}
