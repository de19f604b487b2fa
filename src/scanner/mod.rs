mod meta;

pub use meta::{extract_info, PatchInfo};

use crate::error::{ConverterError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 発見したセーブパッチファイル
#[derive(Debug, Clone)]
pub struct PatchFile {
    pub path: PathBuf,
    pub file_name: String,
}

const PATCH_EXTENSION: &str = "savepatch";

pub fn scan_folder(folder: &Path) -> Result<Vec<PatchFile>> {
    if !folder.exists() {
        return Err(ConverterError::FolderNotFound(folder.display().to_string()));
    }

    let mut patches = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if ext.to_string_lossy().eq_ignore_ascii_case(PATCH_EXTENSION) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                patches.push(PatchFile {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // ファイル名でソート
    patches.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(patches)
}
