//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use veg_filter::core::{Dataset, SearchColumns};
use veg_filter::error::VegFilterError;

/// VegFilterErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        VegFilterError::Config("テスト設定エラー".to_string()),
        VegFilterError::InputNotFound("FEHD_RL.csv".to_string()),
        VegFilterError::UnsupportedFormat("data.pdf".to_string()),
        VegFilterError::Spreadsheet("壊れたファイル".to_string()),
        VegFilterError::EmptySheet("rl.xlsx".to_string()),
        VegFilterError::Export("書き込み失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 入力ファイル未検出のメッセージ確認
#[test]
fn test_input_not_found_message() {
    let err = VegFilterError::InputNotFound("data/FEHD_RL.csv".to_string());
    let display = format!("{}", err);

    assert!(display.contains("入力ファイル"));
    assert!(display.contains("data/FEHD_RL.csv"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: VegFilterError = io_err.into();

    assert!(matches!(err, VegFilterError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: VegFilterError = json_err.into();

    assert!(matches!(err, VegFilterError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let dataset = Dataset::new(vec!["NAME_EN".to_string()]);
    let common_err = SearchColumns::select(&dataset, &["NAME_XX".to_string()]).unwrap_err();
    let err: VegFilterError = common_err.into();

    assert!(matches!(err, VegFilterError::Common(_)));
    assert_eq!(format!("{}", err), "Unknown column: NAME_XX");
}
