use super::{cell, normalize_headers};
use crate::error::{VegFilterError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use veg_filter_common::Dataset;

/// Excel/ODSの先頭シートを読み込む（1行目がヘッダー）
pub(super) fn read_spreadsheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| VegFilterError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| VegFilterError::EmptySheet(path.display().to_string()))?
        .map_err(|e| VegFilterError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| VegFilterError::EmptySheet(path.display().to_string()))?;

    let mut dataset = Dataset::new(normalize_headers(header.iter().map(cell_text).collect()));

    for row in rows {
        // 空行は読み飛ばす
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        dataset.push_row(row.iter().map(|c| cell(&cell_text(c))).collect());
    }

    Ok(dataset)
}

fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
