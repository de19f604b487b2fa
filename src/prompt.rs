//! 手動フォールバックの対話入力
//!
//! オフラインDBでもオンライン検索でも解決できなかったファイルについて、
//! 検索で拾えたトークンを見せたうえでIDの手入力を受け付ける。

use crate::error::{ConverterError, Result};
use crate::resolver::{BadgeKind, BadgeToken};
use dialoguer::Input;

/// 手動入力アクション
pub enum ManualAction {
    /// IDを入力
    Input(String),
    /// このファイルをスキップ
    Skip,
}

/// 検索で拾えたトークンを種類ごとに整形して表示
pub fn show_candidates(tokens: &[BadgeToken]) {
    if tokens.is_empty() {
        println!("  候補はありません");
        return;
    }

    println!("  検索結果の候補:");
    for token in tokens {
        match token.kind() {
            BadgeKind::Platform => {
                println!();
                println!("  * {}:", token.text);
            }
            BadgeKind::ProductId => {
                println!("      {}", token.text.replace('-', ""));
                println!("      ----------------");
            }
            BadgeKind::Region => {
                println!("    {}", token.text);
            }
        }
    }
    println!("  ※ PSV の下にあるIDを選んでください。無ければ検索で確認を");
}

/// 変換先IDの手入力プロンプト
///
/// 空入力と `s` はスキップ。それ以外はそのままIDとして扱う。
pub fn prompt_manual_id(title: &str, target_tag: &str) -> Result<ManualAction> {
    let prompt = format!("({}) の {} 版ID を入力 (s でスキップ)", title, target_tag);

    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConverterError::Prompt(e.to_string()))?;

    let trimmed = input.trim();

    match trimmed {
        "" | "s" | "S" => Ok(ManualAction::Skip),
        _ => Ok(ManualAction::Input(trimmed.to_string())),
    }
}
