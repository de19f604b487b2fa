use crate::matcher::MatchDirection;
use crate::region::Region;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "savepatch-region")]
#[command(about = "PS Vitaセーブパッチのリージョン変換ツール (EUR⇔USA)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内の .savepatch を一括変換
    Run {
        /// セーブパッチのフォルダ（省略時はカレント）
        folder: Option<PathBuf>,

        /// データベースフォルダ（EU.xlsx / US.xlsx）
        #[arg(short, long)]
        db_dir: Option<PathBuf>,

        /// 変換済みファイルの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// タイトル部分一致の向き
        #[arg(long, value_enum, default_value = "query-in-candidate")]
        direction: MatchDirection,

        /// オンライン検索を使わない（オフラインDBのみ）
        #[arg(long)]
        offline: bool,

        /// 手動入力プロンプトを出さない（未解決は保留として報告）
        #[arg(long)]
        non_interactive: bool,
    },

    /// タイトルを1件だけ照合して変換先IDを表示
    Lookup {
        /// ゲームタイトル
        #[arg(required = true)]
        title: String,

        /// 変換元リージョン (eu/us)
        #[arg(short, long, value_enum)]
        region: Region,

        /// タイトル部分一致の向き
        #[arg(long, value_enum, default_value = "query-in-candidate")]
        direction: MatchDirection,

        /// データベースフォルダ（EU.xlsx / US.xlsx）
        #[arg(short, long)]
        db_dir: Option<PathBuf>,

        /// オフラインDBに無ければオンライン検索も使う
        #[arg(long)]
        online: bool,
    },

    /// 設定を表示/編集
    Config {
        /// データベースフォルダを設定
        #[arg(long)]
        set_db_dir: Option<PathBuf>,

        /// 出力先フォルダを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// オンライン検索URLを設定
        #[arg(long)]
        set_search_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
