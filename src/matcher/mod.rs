//! オフラインデータベースのタイトル照合
//!
//! 変換元と逆リージョンのテーブルを行順に走査し、最初に一致した行の
//! IDを返す。先頭文字が同じ行だけを部分一致の対象にする。

pub mod types;

pub use types::{MatchDirection, Resolution};

use crate::database::Database;
use crate::region::Region;

/// 逆リージョンのデータベースから同タイトルのIDを探す
pub fn find_equivalent(
    title: &str,
    source_region: Region,
    db: &Database,
    direction: MatchDirection,
) -> Option<Resolution> {
    let target = source_region.opposite();
    let query = normalize(title);
    let query_head = query.chars().next()?;

    for row in db.for_region(target).rows() {
        let candidate = normalize(&row.title);

        // 先頭文字が同じ行だけ部分一致を試す
        match candidate.chars().next() {
            Some(head) if head == query_head => {}
            _ => continue,
        }

        if contains_match(&query, &candidate, direction) {
            return Some(Resolution {
                id: row.id.clone(),
                target_region: target,
            });
        }
    }

    None
}

fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

fn contains_match(query: &str, candidate: &str, direction: MatchDirection) -> bool {
    match direction {
        MatchDirection::QueryInCandidate => candidate.contains(query),
        MatchDirection::CandidateInQuery => query.contains(candidate),
        MatchDirection::Either => candidate.contains(query) || query.contains(candidate),
    }
}
