//! # 输出表模型
//!
//! 将每个文件的扫描结果合并为一张宽表。
//!
//! ## 列顺序
//! ```text
//! File_index, Filename, Pressure, a (Å), b (Å), c (Å), α (°), β (°), γ (°), vol (Å³),
//! <atom>_x, <atom>_y, <atom>_z, ...
//! ```
//! 原子列按首次出现的顺序追加：先按文件名顺序，再按文件内原子表顺序。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 被 `export/` 序列化
//! - 使用 `models/record.rs`

use super::record::{CifRecord, CifScan, LatticeKey};

use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// 固定表头（不含晶格参数）
pub const FILE_INDEX_HEADER: &str = "File_index";
pub const FILENAME_HEADER: &str = "Filename";
pub const PRESSURE_HEADER: &str = "Pressure";

/// 坐标轴后缀
const AXES: [&str; 3] = ["x", "y", "z"];

/// 列注册表：只增不减，已有列的顺序不变
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: Vec<String>,
    atom_labels: Vec<String>,
    seen: HashSet<String>,
}

impl ColumnRegistry {
    /// 以固定表头初始化
    pub fn new() -> Self {
        let mut columns = vec![
            FILE_INDEX_HEADER.to_string(),
            FILENAME_HEADER.to_string(),
            PRESSURE_HEADER.to_string(),
        ];
        columns.extend(LatticeKey::ALL.iter().map(|k| k.header().to_string()));

        Self {
            columns,
            atom_labels: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// 注册原子标签；新标签追加 x/y/z 三列，返回是否为新标签
    pub fn register_atom(&mut self, label: &str) -> bool {
        if !self.seen.insert(label.to_string()) {
            return false;
        }
        self.atom_labels.push(label.to_string());
        self.columns
            .extend(AXES.iter().map(|axis| atom_column(label, axis)));
        true
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 已注册的原子标签（按首次出现顺序）
    pub fn atom_labels(&self) -> &[String] {
        &self.atom_labels
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 原子坐标列名
pub fn atom_column(label: &str, axis: &str) -> String {
    format!("{}_{}", label, axis)
}

/// 单元格
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Index(usize),
    Text(String),
    Number(f64),
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Number).unwrap_or(Cell::Empty)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Index(i) => serializer.serialize_u64(*i as u64),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(v) => serializer.serialize_f64(*v),
        }
    }
}

/// 表构建器：逐个文件追加扫描结果
#[derive(Debug, Default)]
pub struct TableBuilder {
    registry: ColumnRegistry,
    records: Vec<CifRecord>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个文件的扫描结果，分配下一个 File_index
    pub fn push(&mut self, filename: impl Into<String>, scan: CifScan) -> &CifRecord {
        for (label, _) in scan.atoms.iter() {
            self.registry.register_atom(label);
        }

        let record = CifRecord {
            file_index: self.records.len() + 1,
            filename: filename.into(),
            lattice: scan.lattice,
            atoms: scan.atoms,
        };
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn finish(self) -> Table {
        Table {
            registry: self.registry,
            records: self.records,
        }
    }
}

/// 输出表：行 = 记录，列 = 注册表
#[derive(Debug)]
pub struct Table {
    registry: ColumnRegistry,
    records: Vec<CifRecord>,
}

impl Table {
    pub fn columns(&self) -> &[String] {
        self.registry.columns()
    }

    pub fn atom_labels(&self) -> &[String] {
        self.registry.atom_labels()
    }

    pub fn records(&self) -> &[CifRecord] {
        &self.records
    }

    /// 没有行，或者没有任何行含有提取到的数据
    pub fn is_empty(&self) -> bool {
        !self.records.iter().any(|r| r.has_data())
    }

    /// 按注册表顺序展开一条记录
    pub fn row(&self, record: &CifRecord) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.registry.len());
        cells.push(Cell::Index(record.file_index));
        cells.push(Cell::Text(record.filename.clone()));
        cells.push(Cell::Empty);
        cells.extend(LatticeKey::ALL.iter().map(|&k| Cell::from(record.lattice.get(k))));

        for label in self.registry.atom_labels() {
            match record.atoms.get(label) {
                Some(pos) => cells.extend(pos.iter().map(|&v| Cell::Number(v))),
                None => cells.extend([Cell::Empty, Cell::Empty, Cell::Empty]),
            }
        }

        cells
    }

    /// 所有数据行
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.records.iter().map(|r| self.row(r))
    }
}
