use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "veg-filter")]
#[command(about = "飲食店ライセンス表からベジタリアン・ヴィーガン店舗を抽出", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 表ファイルからベジタリアン関連の店舗を抽出
    Filter {
        /// 入力ファイル（CSV/TSV/XLSX、例: FEHD_RL_converted.csv）
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// 出力ファイル（デフォルト: vegetarian_restaurants_selected.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力に必要なキーワード一致数
        #[arg(short, long)]
        min_matches: Option<usize>,

        /// 出力形式 (json/csv/excel)、省略時は出力ファイルの拡張子から判定
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// CSVの区切り文字（1文字）
        #[arg(short, long)]
        delimiter: Option<char>,

        /// 検索対象列を明示指定（複数可）
        #[arg(short = 's', long = "search-column")]
        search_columns: Vec<String>,
    },

    /// 入力ファイルの列構成と検索対象列を表示
    Columns {
        /// 入力ファイル
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// CSVの区切り文字（1文字）
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルト出力ファイルを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// デフォルトの一致数閾値を設定
        #[arg(long)]
        set_min_matches: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 区切り文字をバイトに変換（ASCIIのみ）
pub fn delimiter_byte(delimiter: char) -> Option<u8> {
    if delimiter.is_ascii() {
        Some(delimiter as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_args() {
        let cli = Cli::parse_from([
            "veg-filter", "filter", "-i", "in.csv", "-m", "2", "-f", "csv",
            "-s", "NAME_EN", "-s", "ADDRESS_EN",
        ]);
        match cli.command {
            Commands::Filter { input, output, min_matches, format, search_columns, .. } => {
                assert_eq!(input, PathBuf::from("in.csv"));
                assert!(output.is_none());
                assert_eq!(min_matches, Some(2));
                assert_eq!(format, Some(ExportFormat::Csv));
                assert_eq!(search_columns, vec!["NAME_EN", "ADDRESS_EN"]);
            }
            _ => panic!("filter コマンドとして解析されていない"),
        }
    }

    #[test]
    fn test_filter_requires_input() {
        assert!(Cli::try_parse_from(["veg-filter", "filter"]).is_err());
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(';'), Some(b';'));
        assert_eq!(delimiter_byte('\t'), Some(b'\t'));
        assert_eq!(delimiter_byte('、'), None);
    }
}
