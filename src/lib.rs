//! savepatch-region-rust ライブラリ
//!
//! PS Vitaセーブパッチ (.savepatch) のリージョンID変換を行う。
//! オフラインDB照合 → オンライン検索 → 手動入力の順でIDを解決する。

pub mod cli;
pub mod config;
pub mod converter;
pub mod database;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod prompt;
pub mod region;
pub mod resolver;
pub mod scanner;

pub use error::{ConverterError, Result};
pub use region::Region;
