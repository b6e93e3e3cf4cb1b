//! CSV出力

use super::{output_headers, KEYWORD_SEPARATOR};
use crate::error::Result;
use std::path::Path;
use veg_filter_common::{LogicalField, OutputRecord};

pub fn write_csv(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(output_headers())?;

    for record in records {
        writer.write_record(record_cells(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// 1レコード分のセル値（座標が無い場合は空文字列）
fn record_cells(record: &OutputRecord) -> Vec<String> {
    LogicalField::ALL
        .iter()
        .map(|field| match field {
            LogicalField::Latitude => coordinate_text(record.latitude),
            LogicalField::Longitude => coordinate_text(record.longitude),
            _ => record.text(*field).unwrap_or_default().to_string(),
        })
        .chain([
            record.keyword_en.join(KEYWORD_SEPARATOR),
            record.keyword_tc.join(KEYWORD_SEPARATOR),
        ])
        .collect()
}

fn coordinate_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_cells() {
        let record = OutputRecord {
            name_en: "Lotus Veg".to_string(),
            latitude: Some(22.3),
            keyword_en: vec!["veg".to_string(), "vegan".to_string()],
            keyword_tc: vec!["素食".to_string()],
            ..Default::default()
        };
        let cells = record_cells(&record);
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0], "Lotus Veg");
        assert_eq!(cells[6], "22.3");
        assert_eq!(cells[7], "");
        assert_eq!(cells[8], "veg; vegan");
        assert_eq!(cells[9], "素食");
    }
}
