//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `extract`: 批量提取 CIF 数据并导出表格
//! - `inspect`: 查看单个 CIF 文件的提取结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: extract, inspect

pub mod extract;
pub mod inspect;

use clap::{Parser, Subcommand};

/// ciftab - CIF 晶格参数与原子坐标汇总工具
#[derive(Parser)]
#[command(name = "ciftab")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Extract lattice parameters and atomic sites from CIF files into one spreadsheet", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extract every .cif file in a directory into one spreadsheet
    Extract(extract::ExtractArgs),

    /// Show what would be extracted from a single .cif file
    Inspect(inspect::InspectArgs),
}
