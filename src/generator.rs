//! 変換済みセーブパッチの生成
//!
//! 先頭行のリージョンタグだけを書き換え、残りはそのまま
//! `<ID>.savepatch` として出力フォルダに書き出す。元ファイルは触らない。

use crate::error::Result;
use crate::region::Region;
use std::fs;
use std::path::{Path, PathBuf};

/// 変換先IDで新しいセーブパッチを生成する
///
/// 先頭行は最初の `(` より前をそのまま残し、`(<変換先タグ>)` を付け直す。
/// 同名の出力ファイルがあれば上書きする。
pub fn generate(
    target_id: &str,
    source_path: &Path,
    source_region: Region,
    output_dir: &Path,
) -> Result<PathBuf> {
    let content = fs::read_to_string(source_path)?;

    let (first_line, rest) = match content.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (content.as_str(), None),
    };

    let prefix = match first_line.find('(') {
        Some(pos) => &first_line[..pos],
        None => first_line,
    };

    let new_tag = source_region.opposite().tag();
    let mut output = format!("{}({})\n", prefix, new_tag);
    if let Some(rest) = rest {
        output.push_str(rest);
    }

    fs::create_dir_all(output_dir)?;
    let out_path = output_dir.join(format!("{}.savepatch", target_id));
    fs::write(&out_path, output)?;

    Ok(out_path)
}
