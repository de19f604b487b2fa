use thiserror::Error;

#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum ConverterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("データベース読み込みエラー: {0}")]
    Database(String),

    #[error("セーブパッチが見つかりません: {0}")]
    NoPatchesFound(String),

    #[error("オンライン検索エラー: {0}")]
    Search(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ConverterError>;
