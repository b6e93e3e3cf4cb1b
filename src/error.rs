use thiserror::Error;

#[derive(Error, Debug)]
pub enum VegFilterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力ファイルが見つかりません: {0}")]
    InputNotFound(String),

    #[error("未対応のファイル形式: {0} (csv/tsv/txt/xlsx/xlsm/xls/ods)")]
    UnsupportedFormat(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("表計算ファイル読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("シートが空です: {0}")]
    EmptySheet(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("出力エラー: {0}")]
    Export(String),

    #[error(transparent)]
    Common(#[from] veg_filter_common::Error),
}

pub type Result<T> = std::result::Result<T, VegFilterError>;
