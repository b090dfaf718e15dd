//! # 数据模型模块
//!
//! 定义 CIF 扫描结果、记录和输出表的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`commands/` 和 `export/` 使用
//! - 子模块: record, table

pub mod record;
pub mod table;

pub use record::{AtomSites, CifScan, FieldFailure, LatticeKey};
pub use table::{Cell, Table, TableBuilder};
