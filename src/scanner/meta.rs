//! セーブパッチ先頭行のメタデータ抽出
//!
//! 先頭行の形式: `<ID等> <タイトル>(<リージョンタグ>)`
//! タグは行末の括弧（最後の `(` から閉じ括弧まで）、タイトルは
//! 最初のスペースからその `(` までの文字列。

use crate::region::Region;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 先頭行から取り出したメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchInfo {
    pub title: String,
    pub region: Region,
}

lazy_static! {
    // 貪欲な (.*) でタグ括弧が行末の最後の括弧になる
    static ref FIRST_LINE_RE: Regex = Regex::new(r"^(\S+) (.*)\(([^()]*)\)$").unwrap();
}

/// 先頭行だけを読んでタイトルとリージョンを取り出す
///
/// 空ファイル、読めないファイル、括弧の無い行、EU/USどちらでもない
/// タグはすべて `None`（スキップ対象）。エラーにはしない。
pub fn extract_info(path: &Path) -> Option<PatchInfo> {
    let file = File::open(path).ok()?;
    let first_line = BufReader::new(file).lines().next()?.ok()?;
    parse_first_line(first_line.trim())
}

fn parse_first_line(line: &str) -> Option<PatchInfo> {
    let caps = FIRST_LINE_RE.captures(line)?;
    let region = Region::from_tag(&caps[3])?;
    Some(PatchInfo {
        title: caps[2].trim().to_string(),
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_eur_line() {
        let info = parse_first_line(":PCSB00245 Example Game(EUR)").unwrap();
        assert_eq!(info.title, "Example Game");
        assert_eq!(info.region, Region::Eu);
    }

    #[test]
    fn test_parse_usa_line() {
        let info = parse_first_line(":PCSE00120 Example Game(USA)").unwrap();
        assert_eq!(info.title, "Example Game");
        assert_eq!(info.region, Region::Us);
    }

    #[test]
    fn test_parse_title_with_parens() {
        // タイトル中の括弧はタグとして扱わない
        let info = parse_first_line(":X Game (Special Edition) Deluxe(EUR)").unwrap();
        assert_eq!(info.title, "Game (Special Edition) Deluxe");
        assert_eq!(info.region, Region::Eu);
    }

    #[test]
    fn test_parse_unknown_region() {
        assert_eq!(parse_first_line(":X Some Game(JPN)"), None);
    }

    #[test]
    fn test_parse_no_brackets() {
        assert_eq!(parse_first_line("no brackets here"), None);
        assert_eq!(parse_first_line(""), None);
    }

    #[test]
    fn test_parse_no_space() {
        assert_eq!(parse_first_line(":PCSB00245(EUR)"), None);
    }

    #[test]
    fn test_extract_info_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.savepatch");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, ":PCSB00245 Zoo Tycoon(EUR)").unwrap();
        writeln!(file, "[Patch Code]").unwrap();

        let info = extract_info(&path).unwrap();
        assert_eq!(info.title, "Zoo Tycoon");
        assert_eq!(info.region, Region::Eu);
    }

    #[test]
    fn test_extract_info_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.savepatch");
        std::fs::File::create(&path).unwrap();

        assert_eq!(extract_info(&path), None);
    }

    #[test]
    fn test_extract_info_missing_file() {
        assert_eq!(extract_info(Path::new("/nonexistent/file.savepatch")), None);
    }
}
