use crate::error::{VegFilterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "vegetarian_restaurants_selected.json";
pub const DEFAULT_MIN_MATCHES: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 出力ファイル（`--output` 省略時）
    pub default_output: PathBuf,
    /// キーワード一致数の閾値（`--min-matches` 省略時）
    pub min_matches: usize,
    /// CSVの区切り文字（`--delimiter` 省略時、未設定なら拡張子から判定）
    pub delimiter: Option<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from(DEFAULT_OUTPUT),
            min_matches: DEFAULT_MIN_MATCHES,
            delimiter: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（ファイルが無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VegFilterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("veg-filter").join("config.json"))
    }

    pub fn set_default_output(&mut self, output: PathBuf) -> Result<()> {
        self.default_output = output;
        self.save()
    }

    pub fn set_min_matches(&mut self, min_matches: usize) -> Result<()> {
        self.min_matches = min_matches;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_output, PathBuf::from("vegetarian_restaurants_selected.json"));
        assert_eq!(config.min_matches, 1);
        assert_eq!(config.delimiter, None);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            default_output: PathBuf::from("out.csv"),
            min_matches: 2,
            delimiter: Some(';'),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"min_matches": 3}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.min_matches, 3);
        assert_eq!(loaded.default_output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid").unwrap();

        assert!(matches!(Config::load_from(&path), Err(VegFilterError::JsonParse(_))));
    }
}
