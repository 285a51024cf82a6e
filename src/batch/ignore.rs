//! # 忽略规则
//!
//! 从根目录下的忽略文件（默认 `.gitignore`）加载规则，按 gitignore 语义判断
//! 相对路径是否被排除。父目录命中目录规则时，其下所有文件同样被排除。
//!
//! 规则集在一次目录运行开始时构建，运行期间只读。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `ignore` crate 的 gitignore 匹配器

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use tracing::{debug, warn};

/// 默认的忽略文件名
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// 一次运行使用的忽略规则集
#[derive(Default)]
pub struct IgnoreRules {
    gitignore: Option<Gitignore>,
}

impl IgnoreRules {
    /// 不排除任何路径的空规则集
    pub fn empty() -> Self {
        Self::default()
    }

    /// 加载 `<root>/<file_name>`；文件不存在时返回空规则集
    pub fn load(root: &Path, file_name: &str) -> Self {
        let path = root.join(file_name);
        if !path.is_file() {
            debug!("No ignore file at {}", path.display());
            return Self::empty();
        }

        let mut builder = GitignoreBuilder::new(root);
        // 部分行无效时其余规则仍然生效
        if let Some(err) = builder.add(&path) {
            warn!("Problem reading {}: {}", path.display(), err);
        }

        match builder.build() {
            Ok(gitignore) => {
                debug!(
                    "Loaded {} ignore rules from {}",
                    gitignore.num_ignores() + gitignore.num_whitelists(),
                    path.display()
                );
                Self {
                    gitignore: Some(gitignore),
                }
            }
            Err(err) => {
                warn!("Ignoring unusable rules in {}: {}", path.display(), err);
                Self::empty()
            }
        }
    }

    /// 相对路径（文件）是否被排除
    pub fn excluded(&self, relative: &Path) -> bool {
        let Some(gitignore) = self.gitignore.as_ref() else {
            return false;
        };
        if relative.has_root() {
            return gitignore.matched(relative, false).is_ignore();
        }
        gitignore
            .matched_path_or_any_parents(relative, false)
            .is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rules(content: &str) -> (TempDir, IgnoreRules) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_IGNORE_FILE), content).unwrap();
        let rules = IgnoreRules::load(dir.path(), DEFAULT_IGNORE_FILE);
        (dir, rules)
    }

    #[test]
    fn test_missing_file_excludes_nothing() {
        let dir = TempDir::new().unwrap();
        let rules = IgnoreRules::load(dir.path(), DEFAULT_IGNORE_FILE);
        assert!(!rules.excluded(Path::new("node_modules/d.js")));
    }

    #[test]
    fn test_directory_rule_excludes_children() {
        let (_dir, rules) = rules("node_modules/\n");
        assert!(rules.excluded(Path::new("node_modules/d.js")));
        assert!(rules.excluded(Path::new("pkg/node_modules/lib/e.js")));
        assert!(!rules.excluded(Path::new("src/node_modules.js")));
    }

    #[test]
    fn test_glob_anchor_and_negation() {
        let (_dir, rules) = rules("*.min.js\n!keep.min.js\n/build\n");
        assert!(rules.excluded(Path::new("vendor/app.min.js")));
        assert!(!rules.excluded(Path::new("keep.min.js")));
        assert!(rules.excluded(Path::new("build/out.js")));
        assert!(!rules.excluded(Path::new("src/build/out.js")));
    }

    #[test]
    fn test_custom_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".sweepignore"), "legacy/\n").unwrap();
        let rules = IgnoreRules::load(dir.path(), ".sweepignore");
        assert!(rules.excluded(Path::new("legacy/old.js")));
        assert!(!IgnoreRules::load(dir.path(), DEFAULT_IGNORE_FILE)
            .excluded(Path::new("legacy/old.js")));
    }
}
