//! 入出力データの型定義
//!
//! - Row: 入力表の1行（列名 → セル値）
//! - Dataset: 列名リスト（スキーマ）と行の集合
//! - LogicalField: 出力レコードの論理フィールドと候補列名
//! - OutputRecord: 抽出結果の1レコード

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 入力表の1行
///
/// スキーマ上のすべての列をキーとして持つ。空セルは `None`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, Option<String>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// セルを設定（同じ列名は上書き）
    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        self.cells.insert(column.into(), value);
    }

    /// 列がこの行のスキーマに存在するか
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// セルの文字列値（列が無い・空セルの場合は `None`）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(|v| v.as_deref())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// 列名リストと行の集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 列順に並んだセル値から行を追加
    ///
    /// 列数より短い行は残りを空セル、長い行は余分なセルを無視する。
    pub fn push_row(&mut self, values: Vec<Option<String>>) {
        let mut values = values.into_iter();
        let row = self
            .columns
            .iter()
            .map(|column| (column.clone(), values.next().flatten()))
            .collect();
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// 指定列の空でないセル値を行順に返す
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows.iter().filter_map(move |row| row.get(column))
    }
}

/// 出力レコードの論理フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    NameEn,
    NameTc,
    AddressEn,
    AddressTc,
    DistrictEn,
    DistrictTc,
    Latitude,
    Longitude,
}

const NAME_EN_COLUMNS: &[&str] = &["NSEARCH03_EN", "NAME_EN", "NSEARCH03", "ESTABLISHMENT_NAME_EN"];
const NAME_TC_COLUMNS: &[&str] = &["NSEARCH03_TC", "NAME_TC"];
const ADDRESS_EN_COLUMNS: &[&str] = &["ADDRESS_EN", "ADDRESS"];
const ADDRESS_TC_COLUMNS: &[&str] = &["ADDRESS_TC"];
const DISTRICT_EN_COLUMNS: &[&str] = &["SEARCH01_EN"];
const DISTRICT_TC_COLUMNS: &[&str] = &["SEARCH01_TC"];
const LATITUDE_COLUMNS: &[&str] = &["LATITUDE"];
const LONGITUDE_COLUMNS: &[&str] = &["LONGITUDE"];

impl LogicalField {
    /// 出力順に並んだ全フィールド
    pub const ALL: [LogicalField; 8] = [
        LogicalField::NameEn,
        LogicalField::NameTc,
        LogicalField::AddressEn,
        LogicalField::AddressTc,
        LogicalField::DistrictEn,
        LogicalField::DistrictTc,
        LogicalField::Latitude,
        LogicalField::Longitude,
    ];

    /// 出力キー名
    pub fn key(&self) -> &'static str {
        match self {
            LogicalField::NameEn => "Name_EN",
            LogicalField::NameTc => "Name_TC",
            LogicalField::AddressEn => "Address_EN",
            LogicalField::AddressTc => "Address_TC",
            LogicalField::DistrictEn => "District_EN",
            LogicalField::DistrictTc => "District_TC",
            LogicalField::Latitude => "Latitude",
            LogicalField::Longitude => "Longitude",
        }
    }

    /// 候補列名（優先順）
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            LogicalField::NameEn => NAME_EN_COLUMNS,
            LogicalField::NameTc => NAME_TC_COLUMNS,
            LogicalField::AddressEn => ADDRESS_EN_COLUMNS,
            LogicalField::AddressTc => ADDRESS_TC_COLUMNS,
            LogicalField::DistrictEn => DISTRICT_EN_COLUMNS,
            LogicalField::DistrictTc => DISTRICT_TC_COLUMNS,
            LogicalField::Latitude => LATITUDE_COLUMNS,
            LogicalField::Longitude => LONGITUDE_COLUMNS,
        }
    }

    /// 座標フィールドか
    pub fn is_coordinate(&self) -> bool {
        matches!(self, LogicalField::Latitude | LogicalField::Longitude)
    }
}

impl std::fmt::Display for LogicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 抽出結果レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Name_EN")]
    pub name_en: String,

    #[serde(rename = "Name_TC")]
    pub name_tc: String,

    #[serde(rename = "Address_EN")]
    pub address_en: String,

    #[serde(rename = "Address_TC")]
    pub address_tc: String,

    #[serde(rename = "District_EN")]
    pub district_en: String,

    #[serde(rename = "District_TC")]
    pub district_tc: String,

    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,

    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,

    /// 一致した英語キーワード（小文字、初出順）
    #[serde(rename = "Keyword_EN")]
    pub keyword_en: Vec<String>,

    /// 一致した中国語キーワード（初出順）
    #[serde(rename = "Keyword_TC")]
    pub keyword_tc: Vec<String>,
}

impl OutputRecord {
    /// 文字列フィールドの値を取得（座標フィールドは `None`）
    pub fn text(&self, field: LogicalField) -> Option<&str> {
        match field {
            LogicalField::NameEn => Some(&self.name_en),
            LogicalField::NameTc => Some(&self.name_tc),
            LogicalField::AddressEn => Some(&self.address_en),
            LogicalField::AddressTc => Some(&self.address_tc),
            LogicalField::DistrictEn => Some(&self.district_en),
            LogicalField::DistrictTc => Some(&self.district_tc),
            LogicalField::Latitude | LogicalField::Longitude => None,
        }
    }

    /// 一致キーワードの合計数
    pub fn keyword_count(&self) -> usize {
        self.keyword_en.len() + self.keyword_tc.len()
    }
}

/// レコード列を整形済みJSONに変換（非ASCII文字はそのまま）
pub fn records_to_json(records: &[OutputRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// JSONからレコード列を読み込み
pub fn records_from_json(json: &str) -> Result<Vec<OutputRecord>> {
    Ok(serde_json::from_str(json)?)
}
