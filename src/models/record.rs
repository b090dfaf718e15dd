//! # CIF 扫描结果数据模型
//!
//! 单个 CIF 文件扫描后得到的晶格参数、原子坐标和失败字段。
//!
//! ## 依赖关系
//! - 被 `parsers/cif.rs` 生成
//! - 被 `models/table.rs` 和 `commands/` 使用
//! - 无外部模块依赖

/// 晶格参数键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeKey {
    A,
    B,
    C,
    Alpha,
    Beta,
    Gamma,
    Volume,
}

impl LatticeKey {
    /// 全部键，按输出列顺序排列
    pub const ALL: [LatticeKey; 7] = [
        LatticeKey::A,
        LatticeKey::B,
        LatticeKey::C,
        LatticeKey::Alpha,
        LatticeKey::Beta,
        LatticeKey::Gamma,
        LatticeKey::Volume,
    ];

    /// CIF 数据名
    pub fn tag(&self) -> &'static str {
        match self {
            LatticeKey::A => "_cell_length_a",
            LatticeKey::B => "_cell_length_b",
            LatticeKey::C => "_cell_length_c",
            LatticeKey::Alpha => "_cell_angle_alpha",
            LatticeKey::Beta => "_cell_angle_beta",
            LatticeKey::Gamma => "_cell_angle_gamma",
            LatticeKey::Volume => "_cell_volume",
        }
    }

    /// 表头列名（带单位）
    pub fn header(&self) -> &'static str {
        match self {
            LatticeKey::A => "a (Å)",
            LatticeKey::B => "b (Å)",
            LatticeKey::C => "c (Å)",
            LatticeKey::Alpha => "α (°)",
            LatticeKey::Beta => "β (°)",
            LatticeKey::Gamma => "γ (°)",
            LatticeKey::Volume => "vol (Å³)",
        }
    }

    /// 匹配以某个数据名开头的行
    pub fn match_line(line: &str) -> Option<LatticeKey> {
        Self::ALL.into_iter().find(|key| line.starts_with(key.tag()))
    }
}

impl std::fmt::Display for LatticeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// 晶格参数，缺失的字段为 None
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatticeParams {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub volume: Option<f64>,
}

impl LatticeParams {
    pub fn get(&self, key: LatticeKey) -> Option<f64> {
        match key {
            LatticeKey::A => self.a,
            LatticeKey::B => self.b,
            LatticeKey::C => self.c,
            LatticeKey::Alpha => self.alpha,
            LatticeKey::Beta => self.beta,
            LatticeKey::Gamma => self.gamma,
            LatticeKey::Volume => self.volume,
        }
    }

    pub fn set(&mut self, key: LatticeKey, value: Option<f64>) {
        let slot = match key {
            LatticeKey::A => &mut self.a,
            LatticeKey::B => &mut self.b,
            LatticeKey::C => &mut self.c,
            LatticeKey::Alpha => &mut self.alpha,
            LatticeKey::Beta => &mut self.beta,
            LatticeKey::Gamma => &mut self.gamma,
            LatticeKey::Volume => &mut self.volume,
        };
        *slot = value;
    }

    /// 是否至少有一个字段
    pub fn any(&self) -> bool {
        LatticeKey::ALL.iter().any(|&k| self.get(k).is_some())
    }
}

/// 原子位点表：标签 -> 分数坐标
///
/// 保持首次插入顺序；同名标签后写覆盖前写，但位置不变。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomSites {
    entries: Vec<(String, [f64; 3])>,
}

impl AtomSites {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖一个原子位点
    pub fn insert(&mut self, label: impl Into<String>, position: [f64; 3]) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = position,
            None => self.entries.push((label, position)),
        }
    }

    pub fn get(&self, label: &str) -> Option<[f64; 3]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, pos)| *pos)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, [f64; 3])> {
        self.entries.iter().map(|(l, pos)| (l.as_str(), *pos))
    }
}

/// 解析失败的晶格字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub key: LatticeKey,
    pub token: String,
}

/// 单个 CIF 文件的扫描结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CifScan {
    pub lattice: LatticeParams,
    pub atoms: AtomSites,
    pub failures: Vec<FieldFailure>,
}

impl CifScan {
    /// 是否提取到任何数据
    pub fn has_data(&self) -> bool {
        self.lattice.any() || !self.atoms.is_empty()
    }
}

/// 输出表中的一条记录（每个输入文件一条）
#[derive(Debug, Clone, PartialEq)]
pub struct CifRecord {
    /// 从 1 开始，按文件名排序分配
    pub file_index: usize,
    pub filename: String,
    pub lattice: LatticeParams,
    pub atoms: AtomSites,
}

impl CifRecord {
    pub fn has_data(&self) -> bool {
        self.lattice.any() || !self.atoms.is_empty()
    }
}
