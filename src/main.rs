use clap::Parser;
use savepatch_region_rust::{cli, config, converter, database, error, matcher, prompt, resolver, scanner};
use savepatch_region_rust::Region;
use cli::{Cli, Commands};
use config::Config;
use converter::{ConvertOptions, Outcome};
use database::Database;
use error::Result;
use resolver::SearchOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run { folder, db_dir, output, direction, offline, non_interactive } => {
            println!("🎮 savepatch-region - リージョン一括変換\n");

            let folder = folder.unwrap_or_else(|| std::path::PathBuf::from("."));
            let db_dir = db_dir.unwrap_or_else(|| config.db_dir.clone());
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());

            // 1. オフラインDB読み込み
            println!("[1/3] オフラインDBを読み込み中...");
            let db = Database::load(&db_dir)?;
            println!(
                "✔ EU: {}件 / US: {}件\n",
                db.for_region(Region::Eu).len(),
                db.for_region(Region::Us).len()
            );

            // 2. セーブパッチのスキャン
            println!("[2/3] セーブパッチをスキャン中...");
            let patches = scanner::scan_folder(&folder)?;
            println!("✔ {}件の .savepatch を検出\n", patches.len());

            if patches.is_empty() {
                return Err(error::ConverterError::NoPatchesFound(
                    folder.display().to_string(),
                ));
            }

            // 3. 変換
            println!("[3/3] 変換中...");
            let options = ConvertOptions {
                direction,
                output_dir,
                search_url: config.search_url.clone(),
                use_online: !offline,
                interactive: !non_interactive,
                verbose: cli.verbose,
            };

            let mut generated = 0usize;
            let mut skipped = 0usize;
            let mut failed = 0usize;
            let mut pending = Vec::new();

            for (i, patch) in patches.iter().enumerate() {
                println!("[{}/{}] {}", i + 1, patches.len(), patch.file_name);

                match converter::convert_file(patch, &db, &options).await {
                    Ok(Outcome::Generated { path, .. }) => {
                        generated += 1;
                        println!("  ✔ 生成: {}\n", path.display());
                    }
                    Ok(Outcome::Unrecognized) => {
                        skipped += 1;
                        println!("  ⚠ リージョンタグを認識できないためスキップ\n");
                    }
                    Ok(Outcome::SkippedByUser) => {
                        skipped += 1;
                        println!("  → スキップ\n");
                    }
                    Ok(Outcome::Pending { candidates }) => {
                        println!("  ⚠ 自動解決できず保留（候補{}件）\n", candidates.len());
                        pending.push((patch.file_name.clone(), candidates));
                    }
                    Err(e) => {
                        // 1ファイルの失敗でバッチは止めない
                        failed += 1;
                        eprintln!("  ✖ エラー: {}\n", e);
                    }
                }
            }

            if !pending.is_empty() {
                println!("保留（手動での確認が必要）:");
                for (file_name, candidates) in &pending {
                    println!("  - {} (候補{}件)", file_name, candidates.len());
                    if cli.verbose {
                        prompt::show_candidates(candidates);
                    }
                }
                println!();
            }

            println!(
                "✅ 完了: 生成 {} / スキップ {} / 保留 {} / 失敗 {}",
                generated,
                skipped,
                pending.len(),
                failed
            );
        }

        Commands::Lookup { title, region, direction, db_dir, online } => {
            println!("🔎 savepatch-region - タイトル照合\n");

            let db_dir = db_dir.unwrap_or_else(|| config.db_dir.clone());
            let db = Database::load(&db_dir)?;

            match matcher::find_equivalent(&title, region, &db, direction) {
                Some(resolution) => {
                    println!(
                        "✔ オフラインDBで発見: {} ({})",
                        resolution.id,
                        resolution.target_region.tag()
                    );
                }
                None => {
                    println!("- オフラインDBに見つかりませんでした");

                    if online {
                        println!("- オンライン検索中...");
                        match resolver::search_equivalent(&title, region, &config.search_url).await
                        {
                            SearchOutcome::Found(id) => {
                                println!("✔ オンラインで発見: {} ({})", id, region.opposite().tag());
                            }
                            SearchOutcome::Ambiguous(tokens) => {
                                println!("⚠ 自動では決められませんでした");
                                prompt::show_candidates(&tokens);
                            }
                            SearchOutcome::NotFound => {
                                println!("⚠ オンラインでも見つかりませんでした");
                            }
                        }
                    }
                }
            }
        }

        Commands::Config { set_db_dir, set_output_dir, set_search_url, show } => {
            let mut config = config;

            if let Some(dir) = set_db_dir {
                config.set_db_dir(dir)?;
                println!("✔ データベースフォルダを設定しました");
            }

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力先フォルダを設定しました");
            }

            if let Some(url) = set_search_url {
                config.set_search_url(url)?;
                println!("✔ 検索URLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  DBフォルダ: {}", config.db_dir.display());
                println!("  出力先: {}", config.output_dir.display());
                println!("  検索URL: {}", config.search_url);
            }
        }
    }

    Ok(())
}
