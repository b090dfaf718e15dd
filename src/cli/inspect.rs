//! # inspect 子命令 CLI 定义
//!
//! 扫描单个 CIF 文件并在终端显示提取结果，不写文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CIF file to scan
    pub file: PathBuf,
}
