//! JSON出力
//!
//! 整形済み、UTF-8、非ASCII文字はエスケープしない。

use crate::error::Result;
use std::path::Path;
use veg_filter_common::types::records_to_json;
use veg_filter_common::OutputRecord;

pub fn write_json(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    let json = records_to_json(records)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
