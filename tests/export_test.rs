//! JSON/CSV/Excel出力の統合テスト

use tempfile::tempdir;
use veg_filter::core::types::records_from_json;
use veg_filter::core::OutputRecord;
use veg_filter::export::{export_records, ExportFormat};

fn create_test_record(index: usize) -> OutputRecord {
    OutputRecord {
        name_en: format!("Vegan Kitchen {}", index),
        name_tc: format!("素食廚房{}", index),
        address_en: format!("{} NATHAN RD", index),
        address_tc: format!("彌敦道{}號", index),
        district_en: "YAU TSIM MONG".to_string(),
        district_tc: "油尖旺區".to_string(),
        latitude: Some(22.0 + index as f64 * 0.25),
        longitude: None,
        keyword_en: vec!["vegan".to_string()],
        keyword_tc: vec!["素食".to_string()],
    }
}

#[test]
fn test_json_export_preserves_unicode() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out.json");
    let records: Vec<OutputRecord> = (1..=3).map(create_test_record).collect();

    export_records(&records, ExportFormat::Json, &output_path).expect("JSON出力に失敗");

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("素食廚房1"), "非ASCII文字がエスケープされている");
    assert!(!content.contains("\\u"));
    assert!(content.contains("\n  {"), "整形されていない");

    let loaded = records_from_json(&content).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_json_export_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.json");

    export_records(&[], ExportFormat::Json, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.trim(), "[]");
}

#[test]
fn test_export_creates_parent_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("nested").join("out").join("result.json");

    export_records(&[create_test_record(1)], ExportFormat::Json, &output_path).unwrap();
    assert!(output_path.exists());
}

#[test]
fn test_csv_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out.csv");
    let mut record = create_test_record(1);
    record.keyword_en.push("veggie".to_string());

    export_records(&[record], ExportFormat::Csv, &output_path).unwrap();

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 10);
    assert_eq!(&headers[0], "Name_EN");
    assert_eq!(&headers[9], "Keyword_TC");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "素食廚房1");
    assert_eq!(&rows[0][7], "");
    assert_eq!(&rows[0][8], "vegan; veggie");
}

#[test]
fn test_excel_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out.xlsx");
    let records: Vec<OutputRecord> = (1..=5).map(create_test_record).collect();

    let result = export_records(&records, ExportFormat::Excel, &output_path);
    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());

    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}
