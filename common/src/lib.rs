//! Vegetarian Filter Common Library
//!
//! 飲食店ライセンス表からベジタリアン向け店舗を抽出するコアロジック。
//! 入出力（ファイル読み込み・シリアライズ）はCLI側が担当する。

pub mod types;
pub mod columns;
pub mod keywords;
pub mod pipeline;
pub mod error;

pub use types::{Dataset, LogicalField, OutputRecord, Row};
pub use columns::{parse_coordinate, resolve, resolve_numeric};
pub use keywords::{match_row, KeywordMatches, SearchColumns};
pub use pipeline::{build_record, describe_schema, filter_dataset, FilterOptions, FilterOutcome, SchemaReport};
pub use error::{Error, Result};
