//! # CSV 导出
//!
//! 与 XLSX 相同的表头和行布局，空单元格写为空字段。
//!
//! ## 依赖关系
//! - 被 `export/mod.rs` 调用
//! - 使用 `csv` 库写入，单元格通过 `serde` 序列化

use crate::error::{CiftabError, Result};
use crate::models::Table;

use std::path::Path;

/// 导出为 CSV
pub fn to_csv(table: &Table, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| CiftabError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CifScan, TableBuilder};
    use std::fs;

    #[test]
    fn test_csv_layout() {
        let dir = std::env::temp_dir().join(format!("ciftab-csv-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");

        let mut first = CifScan::default();
        first.lattice.a = Some(13.8553);
        first.lattice.volume = Some(202.87);
        first.atoms.insert("Mo1", [0.1, 0.25, 0.5]);

        let mut second = CifScan::default();
        second.atoms.insert("O1", [0.0, 0.5, 1.0]);

        let mut builder = TableBuilder::new();
        builder.push("a.cif", first);
        builder.push("b.cif", second);
        to_csv(&builder.finish(), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), 16);
        assert_eq!(&headers[0], "File_index");
        assert_eq!(&headers[9], "vol (Å³)");
        assert_eq!(&headers[10], "Mo1_x");
        assert_eq!(&headers[15], "O1_z");

        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][1], "a.cif");
        assert_eq!(&records[0][2], "");
        assert_eq!(records[0][3].parse::<f64>().unwrap(), 13.8553);
        assert_eq!(&records[0][4], "");
        assert_eq!(records[0][11].parse::<f64>().unwrap(), 0.25);
        assert_eq!(&records[0][13], "");

        assert_eq!(&records[1][0], "2");
        assert_eq!(&records[1][10], "");
        assert_eq!(records[1][15].parse::<f64>().unwrap(), 1.0);

        fs::remove_dir_all(&dir).unwrap();
    }
}
