//! 表データ読み込みモジュール
//!
//! すべてのセルを文字列として読み込む（ID・コード類の数値変換を避けるため）。

mod delimited;
mod spreadsheet;

use crate::error::{VegFilterError, Result};
use std::path::Path;
use veg_filter_common::Dataset;

/// 欠損値とみなすセル値
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const DELIMITED_EXTENSIONS: &[&str] = &["csv", "txt", "tsv"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// 読み込みオプション
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// 区切り文字（`None` なら拡張子から判定: tsv はタブ、それ以外はカンマ）
    pub delimiter: Option<u8>,
}

/// 入力ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited(u8),
    Spreadsheet,
}

/// 拡張子から入力形式を判定
pub fn detect_format(path: &Path, options: &LoadOptions) -> Result<TableFormat> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if DELIMITED_EXTENSIONS.contains(&ext.as_str()) {
        let default = if ext == "tsv" { b'\t' } else { b',' };
        return Ok(TableFormat::Delimited(options.delimiter.unwrap_or(default)));
    }
    if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        return Ok(TableFormat::Spreadsheet);
    }

    Err(VegFilterError::UnsupportedFormat(path.display().to_string()))
}

/// 表ファイルを読み込む
///
/// ファイルが存在しない場合は行処理の前に `InputNotFound` を返す。
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    if !path.exists() {
        return Err(VegFilterError::InputNotFound(path.display().to_string()));
    }

    let dataset = match detect_format(path, options)? {
        TableFormat::Delimited(delimiter) => delimited::read_delimited(path, delimiter)?,
        TableFormat::Spreadsheet => spreadsheet::read_spreadsheet(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        columns = dataset.columns().len(),
        rows = dataset.len(),
        "表データを読み込み"
    );

    Ok(dataset)
}

/// 列名を正規化
///
/// - 前後の空白とBOMを除去
/// - 重複する列名には `.1`, `.2` ... を付与
fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());

    for name in raw {
        let base = name.trim_start_matches('\u{feff}').trim().to_string();
        let mut candidate = base.clone();
        let mut suffix = 1;
        while headers.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        headers.push(candidate);
    }

    headers
}

/// セル値を変換（欠損値は `None`）
fn cell(value: &str) -> Option<String> {
    if NA_MARKERS.contains(&value) {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        let options = LoadOptions::default();
        assert_eq!(
            detect_format(Path::new("data.csv"), &options).unwrap(),
            TableFormat::Delimited(b',')
        );
        assert_eq!(
            detect_format(Path::new("data.TSV"), &options).unwrap(),
            TableFormat::Delimited(b'\t')
        );
        assert_eq!(
            detect_format(Path::new("data.xlsx"), &options).unwrap(),
            TableFormat::Spreadsheet
        );
        assert!(matches!(
            detect_format(Path::new("data.pdf"), &options),
            Err(VegFilterError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_detect_format_custom_delimiter() {
        let options = LoadOptions { delimiter: Some(b';') };
        assert_eq!(
            detect_format(Path::new("data.csv"), &options).unwrap(),
            TableFormat::Delimited(b';')
        );
    }

    #[test]
    fn test_normalize_headers() {
        let headers = normalize_headers(vec![
            "\u{feff}NAME_EN".to_string(),
            " ADDRESS ".to_string(),
            "NAME_EN".to_string(),
            "NAME_EN".to_string(),
        ]);
        assert_eq!(headers, vec!["NAME_EN", "ADDRESS", "NAME_EN.1", "NAME_EN.2"]);
    }

    #[test]
    fn test_cell_na_markers() {
        assert_eq!(cell(""), None);
        assert_eq!(cell("N/A"), None);
        assert_eq!(cell("  "), Some("  ".to_string()));
        assert_eq!(cell("素食"), Some("素食".to_string()));
    }
}
