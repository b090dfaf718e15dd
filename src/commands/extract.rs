//! # extract 命令实现
//!
//! 批量扫描 .cif 文件并导出为一张电子表格。
//!
//! ## 功能
//! - 按文件名排序收集 .cif 文件
//! - 逐个扫描晶格参数和原子坐标
//! - 动态扩展原子坐标列
//! - 写出 XLSX 或 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 使用 `batch/`, `parsers/`, `models/`, `export/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::FileCollector;
use crate::cli::extract::{ExtractArgs, TableFormat};
use crate::error::{CiftabError, Result};
use crate::export;
use crate::models::{FieldFailure, Table, TableBuilder};
use crate::parsers;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 晶格字段解析失败的文件
#[derive(Debug)]
pub struct FileFailures {
    pub filename: String,
    pub failures: Vec<FieldFailure>,
}

/// 执行 extract 命令
pub fn execute(args: ExtractArgs) -> Result<()> {
    output::print_header("Extracting CIF Data");

    let files = FileCollector::new(&args.input).collect()?;
    output::print_info(&format!(
        "Found {} .cif files in '{}'",
        files.len(),
        args.input.display()
    ));

    let (table, failed) = build_table(&files, args.strict)?;
    let format = args.table_format();

    if !save_table(&table, &args.output, format)? {
        output::print_warning("No valid data found in the CIF files. Check file formatting.");
        return Ok(());
    }

    output::print_done(&format!("Data saved to {}", args.output.display()));
    output::print_info(&format!(
        "{} files, {} atom sites ({} coordinate columns)",
        table.records().len(),
        table.atom_labels().len(),
        table.atom_labels().len() * 3
    ));
    if !failed.is_empty() {
        output::print_warning(&failure_summary(&failed));
    }

    Ok(())
}

/// 按顺序扫描文件并构建输出表
///
/// 非严格模式下，晶格字段解析失败只影响该文件的该字段。
pub fn build_table(files: &[PathBuf], strict: bool) -> Result<(Table, Vec<FileFailures>)> {
    let pb = progress::create_progress_bar(files.len() as u64, "Scanning");

    let mut builder = TableBuilder::new();
    let mut failed = Vec::new();

    for path in files {
        let filename = file_name(path);
        let scan = match parsers::scan_cif_file(path) {
            Ok(scan) => scan,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        if let Some(first) = scan.failures.first() {
            if strict {
                pb.finish_and_clear();
                return Err(CiftabError::ParseError {
                    path: path.display().to_string(),
                    key: first.key.to_string(),
                    token: first.token.clone(),
                });
            }

            pb.suspend(|| {
                for failure in &scan.failures {
                    output::print_warning(&format!(
                        "{}: malformed value '{}' for {}",
                        filename, failure.token, failure.key
                    ));
                }
            });
            failed.push(FileFailures {
                filename: filename.clone(),
                failures: scan.failures.clone(),
            });
        }

        builder.push(filename, scan);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok((builder.finish(), failed))
}

/// 写出表格；没有数据时不写文件并返回 false
pub fn save_table(table: &Table, output_path: &Path, format: TableFormat) -> Result<bool> {
    if table.is_empty() {
        return Ok(false);
    }

    export::write_table(table, output_path, format)?;
    Ok(true)
}

/// 汇总晶格字段解析失败的文件
fn failure_summary(failed: &[FileFailures]) -> String {
    let count: usize = failed.iter().map(|f| f.failures.len()).sum();
    let names: Vec<&str> = failed.iter().map(|f| f.filename.as_str()).collect();
    format!(
        "{} lattice values could not be parsed (left blank) in: {}",
        count,
        names.join(", ")
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
