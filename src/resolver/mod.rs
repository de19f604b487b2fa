//! オンライン検索によるID解決
//!
//! オフラインDBで見つからなかったタイトルを serialstation.com で検索する。
//! ネットワーク失敗は「候補なし」に落とし、バッチ全体は止めない。

pub mod parser;

pub use parser::{BadgeKind, BadgeToken};

use crate::region::Region;

/// オンライン検索の結果
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// 変換先のIDが確定した
    Found(String),
    /// 候補はあるが自動では決められない（手動選択用トークン付き）
    Ambiguous(Vec<BadgeToken>),
    /// 候補なし（検索失敗を含む）
    NotFound,
}

/// 検索クエリ文字列を組み立てる
///
/// スペースは `+`、`&` は `and` に置き換え、他の文字はそのまま。
pub fn build_query(title: &str) -> String {
    let mut query = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            ' ' => query.push('+'),
            '&' => query.push_str("and"),
            _ => query.push(c),
        }
    }
    query
}

/// タイトルをオンライン検索して変換先IDを探す
pub async fn search_equivalent(
    title: &str,
    source_region: Region,
    search_url: &str,
) -> SearchOutcome {
    let url = format!("{}{}", search_url, build_query(title));

    let body = match fetch(&url).await {
        Some(body) => body,
        None => return SearchOutcome::NotFound,
    };

    let tokens = parser::extract_badge_tokens(&body);
    match parser::pick_candidate(&tokens, source_region.opposite()) {
        Some(id) => SearchOutcome::Found(id),
        None if tokens.is_empty() => SearchOutcome::NotFound,
        None => SearchOutcome::Ambiguous(tokens),
    }
}

async fn fetch(url: &str) -> Option<String> {
    let client = reqwest::Client::new();
    let response = client.get(url).send().await.ok()?;

    if !response.status().is_success() {
        return None;
    }

    response.text().await.ok()
}
