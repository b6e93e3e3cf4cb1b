pub mod json;
pub mod delimited;
pub mod excel;

use crate::error::Result;
use std::path::Path;
use veg_filter_common::{LogicalField, OutputRecord};

/// 出力ファイルの列見出し
pub fn output_headers() -> Vec<&'static str> {
    LogicalField::ALL
        .iter()
        .map(|f| f.key())
        .chain(["Keyword_EN", "Keyword_TC"])
        .collect()
}

/// キーワードリストを1セルに連結する区切り
pub const KEYWORD_SEPARATOR: &str = "; ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Excel,
}

impl ExportFormat {
    /// 出力パスの拡張子から形式を推定（不明ならJSON）
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("csv") => ExportFormat::Csv,
            Some("xlsx") => ExportFormat::Excel,
            _ => ExportFormat::Json,
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use json, csv, or excel", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
        }
    }
}

pub fn export_records(
    records: &[OutputRecord],
    format: ExportFormat,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Json => json::write_json(records, output_path)?,
        ExportFormat::Csv => delimited::write_csv(records, output_path)?,
        ExportFormat::Excel => excel::write_excel(records, output_path)?,
    }

    tracing::debug!(
        path = %output_path.display(),
        format = %format,
        records = records.len(),
        "出力完了"
    );

    Ok(())
}
