//! # 文件收集器
//!
//! 遍历根目录，按扩展名筛选候选文件。
//!
//! ## 功能
//! - 递归目录遍历（惰性迭代，不收集到列表）
//! - 每个文件同时给出完整路径与相对根目录的路径
//! - 后缀精确匹配（区分大小写）
//!
//! 指向文件的符号链接视为普通文件；目录链接不跟随，也不做符号链接环检测。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, SweepError};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 默认处理的后缀
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".js", ".jsx"];

/// 可处理的文件后缀集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionSet {
    /// 由后缀列表创建；缺少前导 `.` 的后缀会自动补上
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty() && s != ".")
            .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
            .collect();
        Self { suffixes }
    }

    /// 解析逗号分隔的后缀列表
    pub fn parse(list: &str) -> Result<Self> {
        let set = Self::new(list.split(','));
        if set.suffixes.is_empty() {
            return Err(SweepError::InvalidArgument(format!(
                "no usable file extensions in '{}'",
                list
            )));
        }
        Ok(set)
    }

    /// 文件名是否以任一后缀结尾
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }
}

impl std::fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffixes.join("/"))
    }
}

/// 遍历中发现的文件
#[derive(Debug, Clone)]
pub struct Candidate {
    /// 完整路径
    pub path: PathBuf,
    /// 相对根目录的路径
    pub relative: PathBuf,
}

impl Candidate {
    /// 文件名（非 UTF-8 部分按 lossy 处理）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 惰性枚举根目录下的所有文件（不含目录）
    ///
    /// 根目录不存在时不产生任何候选；其他遍历错误作为 `SweepError::Walk` 返回。
    pub fn candidates(&self) -> impl Iterator<Item = Result<Candidate>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(e) if is_file_entry(&e) => Some(Ok(self.candidate(e.path()))),
                Ok(_) => None,
                Err(err) if err.depth() == 0 && is_missing_root(&self.root) => None,
                Err(err) => {
                    let path = err.path().unwrap_or(&self.root).display().to_string();
                    Some(Err(SweepError::Walk { path, source: err }))
                }
            })
    }

    /// 只保留扩展名匹配的候选
    pub fn eligible<'a>(
        &'a self,
        extensions: &'a ExtensionSet,
    ) -> impl Iterator<Item = Result<Candidate>> + 'a {
        self.candidates().filter(move |c| match c {
            Ok(c) => extensions.matches(&c.file_name()),
            Err(_) => true,
        })
    }

    fn candidate(&self, path: &Path) -> Candidate {
        let relative = path
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());
        Candidate {
            path: path.to_path_buf(),
            relative,
        }
    }
}

/// 普通文件，或指向文件的符号链接（链接本身不递归跟随）
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// 根路径不存在（包括某一级父路径是普通文件的情况）
fn is_missing_root(root: &Path) -> bool {
    fs::symlink_metadata(root).is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn relatives(collector: &FileCollector, exts: &ExtensionSet) -> Vec<String> {
        let mut out: Vec<String> = collector
            .eligible(exts)
            .map(|c| c.unwrap().relative.to_string_lossy().replace('\\', "/"))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_extension_match_is_suffix_exact() {
        let exts = ExtensionSet::default();
        assert!(exts.matches("a.js"));
        assert!(exts.matches("b.jsx"));
        assert!(exts.matches("c.min.js"));
        assert!(!exts.matches("c.txt"));
        assert!(!exts.matches("d.JS"));
        assert!(!exts.matches("e.json"));
        assert!(!exts.matches("js"));
    }

    #[test]
    fn test_extension_parse() {
        let exts = ExtensionSet::parse("ts, .tsx").unwrap();
        assert_eq!(exts.to_string(), ".ts/.tsx");
        assert!(exts.matches("a.tsx"));
        assert!(ExtensionSet::parse(" , ").is_err());
    }

    #[test]
    fn test_walk_recurses_and_yields_only_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        fs::write(dir.path().join("src/b.jsx"), "").unwrap();
        fs::write(dir.path().join("src/nested/c.js"), "").unwrap();
        fs::write(dir.path().join("src/readme.md"), "").unwrap();
        // 目录名匹配后缀也不应被产出
        fs::create_dir_all(dir.path().join("dir.js")).unwrap();

        let collector = FileCollector::new(dir.path());
        assert_eq!(
            relatives(&collector, &ExtensionSet::default()),
            vec!["a.js", "src/b.jsx", "src/nested/c.js"]
        );
        assert_eq!(collector.candidates().count(), 4);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let collector = FileCollector::new(dir.path().join("missing"));
        assert_eq!(collector.candidates().count(), 0);
    }

    #[test]
    fn test_root_below_regular_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        let collector = FileCollector::new(dir.path().join("a.js").join("sub"));
        assert_eq!(collector.candidates().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_candidate() {
        let outside = TempDir::new().unwrap();
        let real = outside.path().join("real.js");
        fs::write(&real, "").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("link.js")).unwrap();
        // 指向目录的链接不跟随
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

        let collector = FileCollector::new(dir.path());
        assert_eq!(relatives(&collector, &ExtensionSet::default()), vec!["link.js"]);
    }
}
