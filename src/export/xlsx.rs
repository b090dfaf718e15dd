//! # XLSX 导出
//!
//! 将输出表写入单个工作表：首行为表头（加粗并冻结），每个输入文件一行。
//!
//! ## 依赖关系
//! - 被 `export/mod.rs` 调用
//! - 使用 `models/table.rs`
//! - 使用 `rust_xlsxwriter` 写入 .xlsx

use crate::error::{CiftabError, Result};
use crate::models::{Cell, Table};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// 工作表名称
const SHEET_NAME: &str = "cif_data";

/// Excel 列数上限
const MAX_COLUMNS: usize = 16_384;

/// 导出为 XLSX
pub fn to_xlsx(table: &Table, output_path: &Path) -> Result<()> {
    let columns = table.columns();
    if columns.len() > MAX_COLUMNS {
        return Err(CiftabError::TooManyColumns(columns.len()));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, row) in table.rows().enumerate() {
        let row_num = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_num, col as u16, cell)?;
        }
    }

    workbook.save(output_path)?;
    Ok(())
}

/// 写入单元格；空单元格不写
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty => {}
        Cell::Index(i) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        Cell::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Cell::Number(v) => {
            worksheet.write_number(row, col, *v)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CifScan, TableBuilder};
    use std::fs;

    #[test]
    fn test_xlsx_written() {
        let dir = std::env::temp_dir().join(format!("ciftab-xlsx-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.xlsx");

        let mut scan = CifScan::default();
        scan.lattice.a = Some(3.1652);
        scan.atoms.insert("W1", [0.0, 0.0, 0.0]);

        let mut builder = TableBuilder::new();
        builder.push("w.cif", scan);
        to_xlsx(&builder.finish(), &path).unwrap();

        // xlsx 是 zip 容器
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_xlsx_header_and_sparse_rows() {
        use calamine::{open_workbook, DataType, Reader, Xlsx};

        let dir = std::env::temp_dir().join(format!("ciftab-xlsx-rows-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.xlsx");

        let mut first = CifScan::default();
        first.lattice.a = Some(13.8553);
        first.atoms.insert("Mo1", [0.1, 0.25, 0.5]);

        let mut second = CifScan::default();
        second.lattice.volume = Some(202.87);
        second.atoms.insert("O1", [0.0, 0.5, 1.0]);

        let mut builder = TableBuilder::new();
        builder.push("a.cif", first);
        builder.push("b.cif", second);
        let table = builder.finish();
        to_xlsx(&table, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
        let range = workbook.worksheet_range(SHEET_NAME).unwrap().unwrap();

        let is_empty = |row: u32, col: u32| {
            matches!(range.get_value((row, col)), None | Some(DataType::Empty))
        };

        // 表头 = 列注册表
        for (col, name) in table.columns().iter().enumerate() {
            assert_eq!(
                range.get_value((0, col as u32)),
                Some(&DataType::String(name.clone()))
            );
        }
        assert_eq!(range.width(), 16);

        // a.cif: 有 a 和 Mo1，没有 Pressure、vol 和 O1
        assert_eq!(range.get_value((1, 0)), Some(&DataType::Float(1.0)));
        assert_eq!(
            range.get_value((1, 1)),
            Some(&DataType::String("a.cif".to_string()))
        );
        assert!(is_empty(1, 2));
        assert_eq!(range.get_value((1, 3)), Some(&DataType::Float(13.8553)));
        assert!(is_empty(1, 9));
        assert_eq!(range.get_value((1, 11)), Some(&DataType::Float(0.25)));
        for col in 13..16 {
            assert!(is_empty(1, col));
        }

        // b.cif: 没有 a 和 Mo1
        assert_eq!(range.get_value((2, 0)), Some(&DataType::Float(2.0)));
        assert!(is_empty(2, 3));
        assert_eq!(range.get_value((2, 9)), Some(&DataType::Float(202.87)));
        for col in 10..13 {
            assert!(is_empty(2, col));
        }
        assert_eq!(range.get_value((2, 15)), Some(&DataType::Float(1.0)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
