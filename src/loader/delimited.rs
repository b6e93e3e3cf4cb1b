use super::{cell, normalize_headers};
use crate::error::Result;
use std::path::Path;
use veg_filter_common::Dataset;

/// 区切り文字形式のファイルを読み込む
///
/// 列数が揃わない行も許容する（不足分は空セル）。
pub(super) fn read_delimited(path: &Path, delimiter: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let headers = normalize_headers(reader.headers()?.iter().map(|h| h.to_string()).collect());
    let mut dataset = Dataset::new(headers);

    for result in reader.records() {
        let record = result?;
        dataset.push_row(record.iter().map(cell).collect());
    }

    Ok(dataset)
}
