//! # 解析器模块
//!
//! 提供 CIF 文件的行扫描解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: cif

pub mod cif;

pub use cif::scan_cif_file;
