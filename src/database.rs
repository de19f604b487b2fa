//! オフラインデータベース（EU.xlsx / US.xlsx）の読み込み
//!
//! 各シートの構成: A列 = プロダクトID、B列 = ゲームタイトル。
//! B列が空のセルに当たったところでデータ終端とみなす。

use crate::error::{ConverterError, Result};
use crate::region::Region;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// データベースの1行（ID + タイトル）
#[derive(Debug, Clone)]
pub struct LookupRow {
    pub id: String,
    pub title: String,
}

/// 1リージョンぶんのタイトルデータベース
///
/// 行順はシートの行順そのまま。照合時の優先順位になる。
#[derive(Debug, Clone)]
pub struct RegionDb {
    region: Region,
    rows: Vec<LookupRow>,
}

impl RegionDb {
    pub fn load(region: Region, path: &Path) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| ConverterError::Database(format!("{}: {}", path.display(), e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                ConverterError::Database(format!("{}: シートがありません", path.display()))
            })?
            .map_err(|e| ConverterError::Database(format!("{}: {}", path.display(), e)))?;

        let mut rows = Vec::new();
        for row in range.rows() {
            // B列が空ならデータ終端
            let title = match row.get(1) {
                Some(Data::Empty) | None => break,
                Some(cell) => cell.to_string().trim().to_string(),
            };
            if title.is_empty() {
                break;
            }

            let id = row
                .first()
                .map(|cell| cell.to_string().trim().to_string())
                .unwrap_or_default();
            if id.is_empty() {
                continue;
            }

            rows.push(LookupRow { id, title });
        }

        Ok(Self { region, rows })
    }

    pub fn from_rows(region: Region, rows: Vec<LookupRow>) -> Self {
        Self { region, rows }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn rows(&self) -> &[LookupRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 両リージョンのデータベース
#[derive(Debug, Clone)]
pub struct Database {
    eu: RegionDb,
    us: RegionDb,
}

impl Database {
    /// `db_dir` 直下の EU.xlsx / US.xlsx を読み込む
    pub fn load(db_dir: &Path) -> Result<Self> {
        if !db_dir.exists() {
            return Err(ConverterError::FolderNotFound(db_dir.display().to_string()));
        }

        let eu = RegionDb::load(Region::Eu, &db_dir.join("EU.xlsx"))?;
        let us = RegionDb::load(Region::Us, &db_dir.join("US.xlsx"))?;
        Ok(Self { eu, us })
    }

    pub fn new(eu: RegionDb, us: RegionDb) -> Self {
        Self { eu, us }
    }

    pub fn for_region(&self, region: Region) -> &RegionDb {
        match region {
            Region::Eu => &self.eu,
            Region::Us => &self.us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    fn write_sheet(path: &Path, rows: &[(&str, &str)]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (i, (id, title)) in rows.iter().enumerate() {
            worksheet.write_string(i as u32, 0, *id).unwrap();
            worksheet.write_string(i as u32, 1, *title).unwrap();
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_load_rows_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("EU.xlsx");
        write_sheet(
            &path,
            &[
                ("PCSB00001", "Alpha Game"),
                ("PCSB00002", "Beta Game"),
                ("PCSB00003", "Gamma Game"),
            ],
        );

        let db = RegionDb::load(Region::Eu, &path).unwrap();
        assert_eq!(db.len(), 3);
        assert_eq!(db.rows()[0].id, "PCSB00001");
        assert_eq!(db.rows()[2].title, "Gamma Game");
    }

    #[test]
    fn test_load_stops_at_empty_title() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("US.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "PCSA00001").unwrap();
        worksheet.write_string(0, 1, "First Game").unwrap();
        // 1行目のB列は空のまま = ここでデータ終端
        worksheet.write_string(1, 0, "PCSA00002").unwrap();
        worksheet.write_string(2, 0, "PCSA00003").unwrap();
        worksheet.write_string(2, 1, "Ghost Game").unwrap();
        workbook.save(&path).unwrap();

        let db = RegionDb::load(Region::Us, &path).unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.rows()[0].title, "First Game");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = RegionDb::load(Region::Eu, &dir.path().join("EU.xlsx"));
        assert!(matches!(result, Err(ConverterError::Database(_))));
    }

    #[test]
    fn test_database_load_missing_dir() {
        let result = Database::load(Path::new("/nonexistent/db/dir"));
        assert!(matches!(result, Err(ConverterError::FolderNotFound(_))));
    }

    #[test]
    fn test_database_for_region() {
        let dir = tempdir().unwrap();
        write_sheet(&dir.path().join("EU.xlsx"), &[("PCSB00001", "Euro Game")]);
        write_sheet(&dir.path().join("US.xlsx"), &[("PCSA00001", "Us Game")]);

        let db = Database::load(dir.path()).unwrap();
        assert_eq!(db.for_region(Region::Eu).rows()[0].id, "PCSB00001");
        assert_eq!(db.for_region(Region::Us).rows()[0].id, "PCSA00001");
    }
}
