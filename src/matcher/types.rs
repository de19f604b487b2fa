use crate::region::Region;
use clap::ValueEnum;

/// タイトル部分一致の向き
///
/// 実際のタイトルはサブタイトル等で前後どちらにも余分な文字列が
/// 付くことがあるため、一致の向きをオプションで選べるようにする。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MatchDirection {
    /// 検索タイトルがDBタイトルに含まれていれば一致（デフォルト）
    #[default]
    QueryInCandidate,
    /// DBタイトルが検索タイトルに含まれていれば一致
    CandidateInQuery,
    /// どちらかの向きで含まれていれば一致
    Either,
}

/// 照合結果（変換先リージョンでのID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub id: String,
    pub target_region: Region,
}
