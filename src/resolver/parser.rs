//! 検索結果（HTML）からのバッジトークン抽出
//!
//! serialstation.com の検索結果をバッジ行単位で走査する。
//! トークンの分類規則:
//! - 3文字 → プラットフォームタグ（PSV など）
//! - 10文字 → プロダクトID（ハイフン付き、例: PCSB-00245）
//! - それ以外 → リージョン名
//!
//! リージョン名の直後のトークンが、そのリージョンでのプロダクトID。

use crate::region::Region;

const BADGE_MARKER: &str = r#"<span class="badge bg-secondary">"#;
const BADGE_CLOSE: &str = "</span>";

/// 北米リージョンのラベル（部分一致で判定）
const US_LABEL: &str = "North America";

/// 欧州圏として扱うリージョンラベル（完全一致で判定）
const EU_LABELS: &[&str] = &[
    "United Kingdom",
    "Italy",
    "Germany",
    "Australia",
    "Spain",
    "Europe",
];

/// バッジトークンの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    /// プラットフォームタグ（3文字）
    Platform,
    /// プロダクトID（10文字、ハイフン付き）
    ProductId,
    /// リージョン名
    Region,
}

/// 検索結果から取り出した1トークン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeToken {
    pub text: String,
}

impl BadgeToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn kind(&self) -> BadgeKind {
        match self.text.chars().count() {
            3 => BadgeKind::Platform,
            10 => BadgeKind::ProductId,
            _ => BadgeKind::Region,
        }
    }
}

/// バッジ行からトークン列を取り出す
///
/// "Original" / "None" のバッジと PS3 に触れる行は除外する。
pub fn extract_badge_tokens(body: &str) -> Vec<BadgeToken> {
    let mut tokens = Vec::new();

    for line in body.lines() {
        if !line.contains(BADGE_MARKER) {
            continue;
        }
        if line.contains(">Original<") || line.contains(">None<") {
            continue;
        }
        if line.contains("PS3") {
            continue;
        }

        let text = line.replace(BADGE_MARKER, "").replace(BADGE_CLOSE, "");
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        tokens.push(BadgeToken::new(text));
    }

    tokens
}

/// 変換先リージョンのIDをトークン列から選ぶ
///
/// 変換先が北米なら "North America"、欧州なら `EU_LABELS` のいずれかに
/// 一致する最初のラベルを探し、その直後のトークンをハイフン抜きで返す。
/// ラベルが列の末尾で後続トークンが無い場合は不一致扱い。
pub fn pick_candidate(tokens: &[BadgeToken], target: Region) -> Option<String> {
    match target {
        Region::Us => next_id_after(tokens, |t| t.text.contains(US_LABEL)),
        Region::Eu => next_id_after(tokens, |t| EU_LABELS.iter().any(|label| t.text == *label)),
    }
}

fn next_id_after(tokens: &[BadgeToken], pred: impl Fn(&BadgeToken) -> bool) -> Option<String> {
    let pos = tokens.iter().position(pred)?;
    let id = tokens.get(pos + 1)?;
    Some(id.text.replace('-', ""))
}
