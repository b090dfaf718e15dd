//! # inspect 命令实现
//!
//! 扫描单个 CIF 文件，用终端表格显示晶格参数和原子坐标。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/cif.rs`
//! - 使用 `tabled` 渲染表格

use crate::cli::inspect::InspectArgs;
use crate::error::{CiftabError, Result};
use crate::models::{CifScan, LatticeKey};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 晶格参数行
#[derive(Debug, Clone, Tabled)]
struct LatticeRow {
    #[tabled(rename = "Parameter")]
    parameter: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 原子位点行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "y")]
    y: String,
    #[tabled(rename = "z")]
    z: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    if !args.file.is_file() {
        return Err(CiftabError::InvalidArgument(format!(
            "Not a file: {}",
            args.file.display()
        )));
    }

    output::print_header(&format!("Inspecting {}", args.file.display()));

    let scan = parsers::scan_cif_file(&args.file)?;

    if !scan.has_data() {
        output::print_warning("No lattice parameters or atom sites found.");
        return Ok(());
    }

    println!("{}", Table::new(lattice_rows(&scan)));

    if scan.atoms.is_empty() {
        output::print_warning("No atom sites found.");
    } else {
        println!("{}", Table::new(atom_rows(&scan)));
        output::print_success(&format!("{} atom sites", scan.atoms.len()));
    }

    for failure in &scan.failures {
        output::print_warning(&format!(
            "Malformed value '{}' for {}",
            failure.token, failure.key
        ));
    }

    Ok(())
}

fn lattice_rows(scan: &CifScan) -> Vec<LatticeRow> {
    LatticeKey::ALL
        .iter()
        .map(|&key| LatticeRow {
            parameter: key.header(),
            value: scan
                .lattice
                .get(key)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn atom_rows(scan: &CifScan) -> Vec<AtomRow> {
    scan.atoms
        .iter()
        .map(|(label, [x, y, z])| AtomRow {
            label: label.to_string(),
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        })
        .collect()
}
