//! Excel出力

use super::{output_headers, KEYWORD_SEPARATOR};
use crate::error::{VegFilterError, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;
use veg_filter_common::{LogicalField, OutputRecord};

const SHEET_NAME: &str = "Vegetarian";

pub fn write_excel(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    build_workbook(records)
        .and_then(|mut workbook| workbook.save(output_path))
        .map_err(|e| VegFilterError::Export(format!("Excel生成エラー: {}", e)))
}

fn build_workbook(records: &[OutputRecord]) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in output_headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, field) in LogicalField::ALL.iter().enumerate() {
            let col = col as u16;
            match field {
                LogicalField::Latitude => {
                    if let Some(v) = record.latitude {
                        worksheet.write_number(row, col, v)?;
                    }
                }
                LogicalField::Longitude => {
                    if let Some(v) = record.longitude {
                        worksheet.write_number(row, col, v)?;
                    }
                }
                _ => {
                    worksheet.write_string(row, col, record.text(*field).unwrap_or_default())?;
                }
            }
        }
        worksheet.write_string(row, 8, record.keyword_en.join(KEYWORD_SEPARATOR))?;
        worksheet.write_string(row, 9, record.keyword_tc.join(KEYWORD_SEPARATOR))?;
    }

    worksheet.autofit();
    Ok(workbook)
}
