//! # extract 子命令 CLI 定义
//!
//! 从一个目录的 .cif 文件中提取晶格参数和原子坐标，汇总为一张表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// 支持的表格格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TableFormat {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl TableFormat {
    /// 根据输出文件扩展名推断格式，默认 XLSX
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("csv") => TableFormat::Csv,
            _ => TableFormat::Xlsx,
        }
    }
}

/// extract 子命令参数
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory containing .cif files (or a single .cif file)
    pub input: PathBuf,

    /// Output spreadsheet file
    #[arg(short, long, default_value = "cif_exported_data.xlsx")]
    pub output: PathBuf,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<TableFormat>,

    /// Abort on the first malformed lattice parameter instead of leaving it blank
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl ExtractArgs {
    /// 实际使用的输出格式
    pub fn table_format(&self) -> TableFormat {
        self.format
            .unwrap_or_else(|| TableFormat::from_path(&self.output))
    }
}
