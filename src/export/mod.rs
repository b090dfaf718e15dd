//! # 表格导出模块
//!
//! 将输出表序列化为电子表格文件。
//!
//! ## 支持格式
//! - XLSX: 单工作表，数值单元格写为数字
//! - CSV: 相同布局的纯文本表格
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `cli/extract.rs` 的 `TableFormat`
//! - 子模块: xlsx, csv_file

pub mod csv_file;
pub mod xlsx;

use crate::cli::extract::TableFormat;
use crate::error::Result;
use crate::models::Table;

use std::path::Path;

/// 按格式写出表格
pub fn write_table(table: &Table, output_path: &Path, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Xlsx => xlsx::to_xlsx(table, output_path),
        TableFormat::Csv => csv_file::to_csv(table, output_path),
    }
}
