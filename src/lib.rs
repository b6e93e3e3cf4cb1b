//! 飲食店ライセンス表からベジタリアン店舗を抽出するCLIライブラリ
//!
//! コアロジックは `veg_filter_common`、このクレートは入出力とCLIを担当する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;

pub use veg_filter_common as core;
