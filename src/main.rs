//! # ciftab - CIF 数据汇总工具
//!
//! 将一个目录中的 CIF 文件的晶格参数和原子分数坐标汇总为一张电子表格，
//! 每个文件一行。
//!
//! ## 子命令
//! - `extract` - 批量提取并导出 (.xlsx / .csv)
//! - `inspect` - 查看单个 CIF 文件的提取结果
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集)
//!   │     ├── parsers/   (CIF 扫描)
//!   │     ├── models/    (记录与输出表)
//!   │     └── export/    (表格导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
