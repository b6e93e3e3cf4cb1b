use clap::Parser;
use veg_filter::{cli, config, error, export, loader, logging};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, VegFilterError};
use export::ExportFormat;
use loader::LoadOptions;
use veg_filter::core::{describe_schema, filter_dataset, FilterOptions, SearchColumns};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Filter { input, output, min_matches, format, delimiter, search_columns } => {
            println!("🥦 veg-filter - ベジタリアン店舗抽出\n");

            // 1. 読み込み
            println!("[1/3] 入力ファイルを読み込み中...");
            let options = load_options(delimiter.or(config.delimiter))?;
            let dataset = loader::load_table(&input, &options)?;
            println!("✔ {}行 / {}列を読み込み\n", dataset.len(), dataset.columns().len());

            // 2. キーワード照合
            println!("[2/3] キーワード照合中...");
            let search_columns = if search_columns.is_empty() {
                None
            } else {
                Some(SearchColumns::select(&dataset, &search_columns)?)
            };
            let filter_options = FilterOptions {
                min_matches: min_matches.unwrap_or(config.min_matches),
                search_columns,
            };
            let outcome = filter_dataset(&dataset, &filter_options);
            if outcome.search_columns.is_fallback() {
                println!("⚠ 既知の名前・住所列が無いため、文字列の列すべてを検索します");
            }
            if cli.verbose {
                println!("  検索対象列: {}", outcome.search_columns.columns().join(", "));
                println!("  閾値: {}", filter_options.min_matches);
            }
            println!("✔ 照合完了\n");

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| config.default_output.clone());
            let format = format.unwrap_or_else(|| ExportFormat::from_path(&output));
            export::export_records(&outcome.records, format, &output)?;
            let written = output.canonicalize().unwrap_or_else(|_| output.clone());

            println!("Input rows: {}", outcome.total_rows);
            println!("Matched rows: {}", outcome.matched_rows());
            println!("Output written to: {}", written.display());
        }

        Commands::Columns { input, delimiter } => {
            let options = load_options(delimiter.or(config.delimiter))?;
            let dataset = loader::load_table(&input, &options)?;
            let report = describe_schema(&dataset);

            println!("列一覧 ({}列, {}行):", dataset.columns().len(), dataset.len());
            for column in dataset.columns() {
                println!("  - {}", column);
            }

            println!("\n検索対象列{}:", if report.search_columns.is_fallback() { " (文字列の列すべて)" } else { "" });
            if report.search_columns.is_empty() {
                println!("  (なし)");
            }
            for column in report.search_columns.columns() {
                println!("  - {}", column);
            }

            println!("\n出力フィールド:");
            for (field, source) in &report.field_sources {
                match source {
                    Some(column) => println!("  {:<12} ← {}", field.key(), column),
                    None => println!("  {:<12} ← (該当列なし)", field.key()),
                }
            }
        }

        Commands::Config { set_output, set_min_matches, show } => {
            let mut config = config;

            if let Some(output) = set_output {
                config.set_default_output(output)?;
                println!("✔ デフォルト出力ファイルを設定しました");
            }

            if let Some(min_matches) = set_min_matches {
                config.set_min_matches(min_matches)?;
                println!("✔ 一致数の閾値を設定しました");
            }

            if show {
                println!("設定:");
                println!("  出力ファイル: {}", config.default_output.display());
                println!("  一致数の閾値: {}", config.min_matches);
                match config.delimiter {
                    Some(d) => println!("  区切り文字: {:?}", d),
                    None => println!("  区切り文字: (拡張子から判定)"),
                }
            }
        }
    }

    Ok(())
}

fn load_options(delimiter: Option<char>) -> Result<LoadOptions> {
    let delimiter = match delimiter {
        Some(d) => Some(cli::delimiter_byte(d).ok_or_else(|| {
            VegFilterError::Config(format!("区切り文字はASCII1文字で指定してください: {:?}", d))
        })?),
        None => None,
    };
    Ok(LoadOptions { delimiter })
}
