//! 抽出パイプライン
//!
//! 1. スキーマから検索対象列を決定
//! 2. 行ごとにキーワード照合
//! 3. 閾値を満たした行から出力レコードを生成（入力行順を保持）

use crate::columns::{first_present_column, resolve, resolve_numeric};
use crate::keywords::{match_row, KeywordMatches, SearchColumns};
use crate::types::{Dataset, LogicalField, OutputRecord, Row};

/// 抽出オプション
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// 出力に必要な一致キーワード数（英語＋中国語）
    pub min_matches: usize,
    /// 検索対象列の明示指定（`None` ならスキーマから決定）
    pub search_columns: Option<SearchColumns>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_matches: 1,
            search_columns: None,
        }
    }
}

impl FilterOptions {
    pub fn with_min_matches(min_matches: usize) -> Self {
        Self {
            min_matches,
            ..Default::default()
        }
    }
}

/// 抽出結果
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// 入力行数
    pub total_rows: usize,
    /// 使用した検索対象列
    pub search_columns: SearchColumns,
    /// 出力レコード（入力行順）
    pub records: Vec<OutputRecord>,
}

impl FilterOutcome {
    pub fn matched_rows(&self) -> usize {
        self.records.len()
    }
}

/// データセットからベジタリアン関連の行を抽出
///
/// # Arguments
/// * `dataset` - 入力データセット
/// * `options` - 抽出オプション
///
/// # Returns
/// 入力行数と出力レコード
pub fn filter_dataset(dataset: &Dataset, options: &FilterOptions) -> FilterOutcome {
    let search_columns = options
        .search_columns
        .clone()
        .unwrap_or_else(|| SearchColumns::inspect(dataset));

    tracing::debug!(
        columns = ?search_columns.columns(),
        fallback = search_columns.is_fallback(),
        "検索対象列を決定"
    );

    let mut records = Vec::new();
    for (index, row) in dataset.rows().iter().enumerate() {
        let matches = match_row(row, &search_columns);
        if !matches.qualifies(options.min_matches) {
            continue;
        }

        tracing::trace!(
            row = index,
            english = ?matches.english,
            chinese = ?matches.chinese,
            "キーワード一致"
        );
        records.push(build_record(row, matches));
    }

    FilterOutcome {
        total_rows: dataset.len(),
        search_columns,
        records,
    }
}

/// 行と一致キーワードから出力レコードを生成
pub fn build_record(row: &Row, matches: KeywordMatches) -> OutputRecord {
    let text = |field: LogicalField| resolve(row, field.candidates());

    OutputRecord {
        name_en: text(LogicalField::NameEn),
        name_tc: text(LogicalField::NameTc),
        address_en: text(LogicalField::AddressEn),
        address_tc: text(LogicalField::AddressTc),
        district_en: text(LogicalField::DistrictEn),
        district_tc: text(LogicalField::DistrictTc),
        latitude: resolve_numeric(row, LogicalField::Latitude.candidates()),
        longitude: resolve_numeric(row, LogicalField::Longitude.candidates()),
        keyword_en: matches.english,
        keyword_tc: matches.chinese,
    }
}

/// スキーマ解析結果
#[derive(Debug, Clone)]
pub struct SchemaReport {
    pub search_columns: SearchColumns,
    /// 論理フィールドごとの解決元の列（候補が無ければ `None`）
    pub field_sources: Vec<(LogicalField, Option<&'static str>)>,
}

/// データセットのスキーマを解析（行の照合はしない）
pub fn describe_schema(dataset: &Dataset) -> SchemaReport {
    let field_sources = LogicalField::ALL
        .iter()
        .map(|field| (*field, first_present_column(dataset.columns(), field.candidates())))
        .collect();

    SchemaReport {
        search_columns: SearchColumns::inspect(dataset),
        field_sources,
    }
}
