use crate::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// serialstation.com の検索エンドポイント
const DEFAULT_SEARCH_URL: &str = "https://www.serialstation.com/search/?search=";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// EU.xlsx / US.xlsx を置くフォルダ
    pub db_dir: PathBuf,
    /// 変換済みファイルの出力先
    pub output_dir: PathBuf,
    /// オンライン検索エンドポイント（クエリ文字列を末尾に連結）
    pub search_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_dir: PathBuf::from("db"),
            output_dir: PathBuf::from("converted"),
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConverterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("savepatch-region").join("config.json"))
    }

    pub fn set_db_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.db_dir = dir;
        self.save()
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = dir;
        self.save()
    }

    pub fn set_search_url(&mut self, url: String) -> Result<()> {
        self.search_url = url;
        self.save()
    }
}
