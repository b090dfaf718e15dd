//! # 文件收集器
//!
//! 根据输入路径收集待处理的 CIF 文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 按文件名后缀过滤（区分大小写）
//! - 只扫描目录的第一层，按文件名字典序排序
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{CiftabError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 文件名后缀
    suffix: String,
}

impl FileCollector {
    /// 创建新的文件收集器，默认收集 `.cif`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            suffix: ".cif".to_string(),
        }
    }

    /// 收集所有匹配的文件，按文件名排序
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Err(CiftabError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| CiftabError::FileReadError {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;
            // is_file 跟随符号链接
            if entry.path().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// 检查文件名是否以后缀结尾
    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| name.ends_with(&self.suffix))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ciftab-collector-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_collect_sorted_by_filename() {
        let dir = scratch_dir("sorted");
        for name in ["b.cif", "a.cif", "c.cif", "notes.txt", "d.CIF"] {
            fs::write(dir.join(name), "").unwrap();
        }
        fs::create_dir(dir.join("sub.cif")).unwrap();

        let files = FileCollector::new(&dir).collect().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.cif", "b.cif", "c.cif"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_collect_empty_directory() {
        let dir = scratch_dir("empty");
        assert!(FileCollector::new(&dir).collect().unwrap().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_collect_single_file() {
        let dir = scratch_dir("single");
        let file = dir.join("only.cif");
        fs::write(&file, "").unwrap();

        assert_eq!(FileCollector::new(&file).collect().unwrap(), vec![file]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_follows_symlinks() {
        let dir = scratch_dir("symlink");
        let target_dir = scratch_dir("symlink-target");
        fs::write(dir.join("a.cif"), "").unwrap();
        fs::write(target_dir.join("real.cif"), "").unwrap();
        std::os::unix::fs::symlink(target_dir.join("real.cif"), dir.join("b.cif")).unwrap();
        std::os::unix::fs::symlink(target_dir.join("missing.cif"), dir.join("c.cif")).unwrap();

        let files = FileCollector::new(&dir).collect().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.cif", "b.cif"]);

        fs::remove_dir_all(&dir).unwrap();
        fs::remove_dir_all(&target_dir).unwrap();
    }

    #[test]
    fn test_collect_missing_directory() {
        let missing = std::env::temp_dir().join("ciftab-collector-does-not-exist");
        let result = FileCollector::new(&missing).collect();
        assert!(matches!(result, Err(CiftabError::DirectoryNotFound { .. })));
    }
}
