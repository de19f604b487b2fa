//! 1ファイルぶんの変換パイプライン
//!
//! 先頭行の解析 → オフラインDB照合 → オンライン検索 → 手動入力の順で
//! 変換先IDを解決し、見つかれば新しいセーブパッチを生成する。

use crate::database::Database;
use crate::generator;
use crate::matcher::{self, MatchDirection};
use crate::prompt::{self, ManualAction};
use crate::resolver::{self, BadgeToken, SearchOutcome};
use crate::scanner::{self, PatchFile};
use crate::error::Result;
use std::path::PathBuf;

/// 1ファイルの処理結果
#[derive(Debug)]
pub enum Outcome {
    /// 変換済みファイルを生成した
    Generated { id: String, path: PathBuf },
    /// 先頭行からリージョンを判定できずスキップ
    Unrecognized,
    /// ユーザー操作でスキップ
    SkippedByUser,
    /// 自動解決できなかった（非対話モード。手動確認用の候補付き）
    Pending { candidates: Vec<BadgeToken> },
}

/// 変換パイプラインの設定
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub direction: MatchDirection,
    pub output_dir: PathBuf,
    pub search_url: String,
    /// オンライン検索を使うか
    pub use_online: bool,
    /// 未解決時に手動入力プロンプトを出すか
    pub interactive: bool,
    pub verbose: bool,
}

pub async fn convert_file(
    patch: &PatchFile,
    db: &Database,
    options: &ConvertOptions,
) -> Result<Outcome> {
    let info = match scanner::extract_info(&patch.path) {
        Some(info) => info,
        None => return Ok(Outcome::Unrecognized),
    };

    if options.verbose {
        println!("  タイトル: {} / リージョン: {}", info.title, info.region);
    }

    // 1. オフラインDB照合
    if let Some(resolution) =
        matcher::find_equivalent(&info.title, info.region, db, options.direction)
    {
        println!("  ✔ オフラインDBで発見: {}", resolution.id);
        let path = generator::generate(&resolution.id, &patch.path, info.region, &options.output_dir)?;
        return Ok(Outcome::Generated {
            id: resolution.id,
            path,
        });
    }

    // 2. オンライン検索
    let candidates = if options.use_online {
        println!("  - オフラインDBに無いためオンライン検索中...");
        match resolver::search_equivalent(&info.title, info.region, &options.search_url).await {
            SearchOutcome::Found(id) => {
                println!("  ✔ オンラインで発見: {}", id);
                let path = generator::generate(&id, &patch.path, info.region, &options.output_dir)?;
                return Ok(Outcome::Generated { id, path });
            }
            SearchOutcome::Ambiguous(tokens) => tokens,
            SearchOutcome::NotFound => {
                println!("  ⚠ オンラインでも見つかりませんでした");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    // 3. 手動入力
    if !options.interactive {
        return Ok(Outcome::Pending { candidates });
    }

    prompt::show_candidates(&candidates);
    match prompt::prompt_manual_id(&info.title, info.region.opposite().tag())? {
        ManualAction::Input(id) => {
            let path = generator::generate(&id, &patch.path, info.region, &options.output_dir)?;
            Ok(Outcome::Generated { id, path })
        }
        ManualAction::Skip => Ok(Outcome::SkippedByUser),
    }
}
