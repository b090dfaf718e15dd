//! # 批量处理模块
//!
//! 收集输入目录中的 CIF 文件。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 使用 `walkdir` 遍历目录

pub mod collector;

pub use collector::FileCollector;
