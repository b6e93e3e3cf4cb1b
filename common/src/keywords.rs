//! キーワード照合モジュール
//!
//! 英語・中国語のベジタリアン関連キーワードを検索対象列から検出する。
//!
//! ## 処理フロー
//! 1. スキーマから検索対象列を決定（データセットごとに1回）
//! 2. 行ごとに検索対象列を優先順に走査し、一致キーワードを重複なく収集

use crate::error::{Error, Result};
use crate::types::{Dataset, LogicalField, Row};
use regex::Regex;

/// 英語キーワード
pub const ENGLISH_KEYWORDS: &[&str] = &[
    "vegetarian",
    "vegan",
    "veggie",
    "vegan-friendly",
    "vegetarian-friendly",
    "plant-based",
    "plant based",
    "pure veg",
    "pure-veg",
    "veg",
];

/// 中国語キーワード（部分一致、大文字小文字の区別あり）
pub const CHINESE_KEYWORDS: &[&str] = &[
    "素食", "純素", "全素", "齋", "素菜", "素食館", "素食店", "素餐", "素齋", "素家",
];

/// 名前・住所列の後に検索する列
const EXTRA_SEARCH_COLUMNS: &[&str] = &[
    "ADDRESS_EN",
    "ADDRESS_TC",
    "DATASET_EN",
    "DATASET_TC",
    "NAME_EN",
    "NAME_TC",
];

lazy_static::lazy_static! {
    static ref ENGLISH_RE: Regex = english_pattern(ENGLISH_KEYWORDS);
}

/// 英語キーワードの正規表現を構築
///
/// 同じ位置で複数のキーワードが一致し得る場合（"vegan-friendly" と "vegan" 等）は
/// 最長のキーワードを採用する。regexクレートは先に書いた選択肢を優先するので、
/// 長い順に並べて連結する。
fn english_pattern(keywords: &[&str]) -> Regex {
    let mut ordered: Vec<&str> = keywords.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = ordered
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

/// 検索対象列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchColumns {
    columns: Vec<String>,
    fallback: bool,
}

impl SearchColumns {
    /// スキーマから検索対象列を決定
    ///
    /// 既知の名前・住所列のうち存在するものを優先順に採用する。
    /// 1つも無ければ、文字列値を持つ全列にフォールバックする。
    pub fn inspect(dataset: &Dataset) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for candidate in priority_columns() {
            if dataset.has_column(candidate) && !columns.iter().any(|c| c == candidate) {
                columns.push(candidate.to_string());
            }
        }

        if !columns.is_empty() {
            return Self {
                columns,
                fallback: false,
            };
        }

        let columns = dataset
            .columns()
            .iter()
            .filter(|c| is_textual_column(dataset, c))
            .cloned()
            .collect();

        Self {
            columns,
            fallback: true,
        }
    }

    /// 明示的に指定した列を検索対象にする
    ///
    /// スキーマに無い列名は `Error::UnknownColumn`。重複は除去する。
    pub fn select(dataset: &Dataset, names: &[String]) -> Result<Self> {
        let mut columns: Vec<String> = Vec::new();
        for name in names {
            if !dataset.has_column(name) {
                return Err(Error::UnknownColumn(name.clone()));
            }
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
        Ok(Self {
            columns,
            fallback: false,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 文字列列へのフォールバックを使用したか
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// 検索対象列の優先順リスト
fn priority_columns() -> impl Iterator<Item = &'static str> {
    LogicalField::NameEn
        .candidates()
        .iter()
        .chain(LogicalField::NameTc.candidates().iter())
        .chain(EXTRA_SEARCH_COLUMNS.iter())
        .copied()
}

/// 値がすべて数値の列は文字列列とみなさない（値が1つも無い列は文字列列扱い）
fn is_textual_column(dataset: &Dataset, column: &str) -> bool {
    let mut values = dataset.column_values(column).peekable();
    if values.peek().is_none() {
        return true;
    }
    !values.all(|v| v.trim().parse::<f64>().is_ok())
}

/// 1行分の一致キーワード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatches {
    pub english: Vec<String>,
    pub chinese: Vec<String>,
}

impl KeywordMatches {
    /// 英語・中国語の一致数の合計（言語間の重複除去はしない）
    pub fn total(&self) -> usize {
        self.english.len() + self.chinese.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// 閾値以上一致しているか
    pub fn qualifies(&self, min_matches: usize) -> bool {
        self.total() >= min_matches
    }

    /// テキストから一致キーワードを追加
    pub fn scan_text(&mut self, text: &str) {
        for m in ENGLISH_RE.find_iter(text) {
            let token = m.as_str().to_lowercase();
            if !self.english.contains(&token) {
                self.english.push(token);
            }
        }

        for keyword in CHINESE_KEYWORDS {
            if text.contains(keyword) && !self.chinese.iter().any(|k| k == keyword) {
                self.chinese.push(keyword.to_string());
            }
        }
    }
}

/// 行の検索対象列を走査してキーワードを照合
///
/// 空セル（文字列でない値）の列は読み飛ばす。
pub fn match_row(row: &Row, search: &SearchColumns) -> KeywordMatches {
    let mut matches = KeywordMatches::default();
    for column in search.columns() {
        if let Some(value) = row.get(column) {
            matches.scan_text(value);
        }
    }
    matches
}
