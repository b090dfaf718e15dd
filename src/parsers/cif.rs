//! # CIF 格式解析器
//!
//! 逐行扫描 CIF 文件，提取晶格参数和原子位点分数坐标。
//!
//! ## 支持的 CIF 子集
//! ```text
//! _cell_length_a    3.1652(2)
//! _cell_angle_gamma 90.00
//! _cell_volume      31.71(1)
//!
//! loop_
//! _atom_site_label
//! _atom_site_type_symbol
//! _atom_site_fract_x
//! _atom_site_fract_y
//! _atom_site_fract_z
//! Mo01 Mo 0.21660(5) 0.25 0.0
//!
//! loop_
//! _atom_site_aniso_label      <- 此后不再读取原子
//! ```
//!
//! 不校验 CIF 语法，不支持多数据块。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/record.rs`
//! - 使用 `regex` 去除不确定度后缀

use crate::error::{CiftabError, Result};
use crate::models::{AtomSites, CifScan, FieldFailure, LatticeKey};

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// 原子位点表起始标记
const ATOM_SITE_MARKER: &str = "_atom_site_label";

/// 各向异性位移参数表标记
const ANISO_MARKER: &str = "_atom_site_aniso_label";

/// 原子行最少字段数：label, type, x, y, z
const MIN_ATOM_FIELDS: usize = 5;

/// 原子表读取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AtomTableState {
    Before,
    Reading,
    Finished,
}

fn uncertainty_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^)]*\)").expect("valid uncertainty regex"))
}

/// 去除括号中的不确定度后缀并解析为浮点数
///
/// `"0.21660(5)"` -> `0.2166`，`"12.345"` -> `12.345`
pub fn clean_value(token: &str) -> Result<f64> {
    let stripped = uncertainty_regex().replace_all(token, "");
    match stripped.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CiftabError::InvalidNumber(token.to_string())),
    }
}

/// 读取并扫描 CIF 文件
pub fn scan_cif_file(path: &Path) -> Result<CifScan> {
    let content = fs::read_to_string(path).map_err(|e| CiftabError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(scan_cif_content(&content))
}

/// 从字符串内容扫描 CIF
///
/// 晶格字段解析失败时记录在 `failures` 中，该字段留空。
pub fn scan_cif_content(content: &str) -> CifScan {
    let mut scan = CifScan::default();
    let mut state = AtomTableState::Before;

    // 兼容 \n、\r\n 和仅 \r 的换行
    for line in content.split(&['\n', '\r'][..]) {
        let line = line.trim();

        if let Some(key) = LatticeKey::match_line(line) {
            let token = line.split_whitespace().skip(1).last();
            match token.map(clean_value) {
                Some(Ok(value)) => scan.lattice.set(key, Some(value)),
                _ => {
                    scan.lattice.set(key, None);
                    scan.failures.push(FieldFailure {
                        key,
                        token: token.unwrap_or_default().to_string(),
                    });
                }
            }
        }

        if line.starts_with(ANISO_MARKER) {
            state = AtomTableState::Finished;
            continue;
        }

        if line.starts_with(ATOM_SITE_MARKER) {
            if state == AtomTableState::Before {
                state = AtomTableState::Reading;
            }
            continue;
        }

        if state == AtomTableState::Reading {
            read_atom_row(line, &mut scan.atoms);
        }
    }

    scan
}

/// 解析原子行；字段不足或坐标无法解析时跳过整行
fn read_atom_row(line: &str, atoms: &mut AtomSites) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_ATOM_FIELDS {
        return;
    }

    if let (Ok(x), Ok(y), Ok(z)) = (
        clean_value(parts[2]),
        clean_value(parts[3]),
        clean_value(parts[4]),
    ) {
        atoms.insert(parts[0], [x, y, z]);
    }
}
