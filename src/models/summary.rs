//! # 运行汇总数据模型
//!
//! 单个文件的处理结果 (`Outcome`) 与一次运行的汇总 (`RunSummary`)。
//!
//! 目录模式下按遍历顺序累加：
//! - `js_files_found`: 每个扩展名匹配的文件（无论是否被忽略）
//! - `modified_count`: 每个 `Outcome::Success`
//! - `errors`: 每个 `Outcome::Failure`，格式为 `"<相对路径>: <原因>"`
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 构建
//! - 被 `commands/process.rs`, `utils/output.rs` 读取

use serde::Serialize;
use std::path::Path;

/// 摘要中最多展示的错误条数
const SUMMARY_ERROR_PREVIEW: usize = 3;

/// 单个文件的转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 转换成功
    Success,
    /// 转换失败（原因）
    Failure(String),
}

/// 运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    Ok,
    Partial,
    Error,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Ok => write!(f, "OK"),
            RunStatus::Partial => write!(f, "PARTIAL"),
            RunStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断信息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Debug,
    Info,
    Warning,
}

/// 运行过程中产生的诊断事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn debug(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Debug,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// 一次运行的汇总
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// 可读摘要
    pub summary: String,
    /// 总体状态
    pub status: RunStatus,
    /// 成功转换的文件数
    pub modified_count: usize,
    /// 失败详情，按遍历顺序
    pub errors: Vec<String>,
    /// 扩展名匹配的文件数（包含被忽略的文件）
    pub js_files_found: usize,
    /// 警告级别的诊断信息
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            summary: String::new(),
            status: RunStatus::Ok,
            modified_count: 0,
            errors: Vec::new(),
            js_files_found: 0,
            notices: Vec::new(),
        }
    }
}

impl RunSummary {
    /// 记录一个扩展名匹配的文件
    pub fn count_found(&mut self) {
        self.js_files_found += 1;
    }

    /// 合并单个文件的处理结果
    pub fn record(&mut self, relative: &Path, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.modified_count += 1,
            Outcome::Failure(reason) => {
                self.errors.push(format!("{}: {}", relative.display(), reason));
            }
        }
    }

    /// 遍历结束后计算状态与摘要
    pub fn finish(&mut self) {
        // 全部失败时同样是 PARTIAL：状态只取决于 errors 是否为空
        self.status = if self.errors.is_empty() {
            RunStatus::Ok
        } else {
            RunStatus::Partial
        };

        let mut summary = format!("Modified {} files", self.modified_count);
        if !self.errors.is_empty() {
            let preview = self
                .errors
                .iter()
                .take(SUMMARY_ERROR_PREVIEW)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            summary.push_str(&format!(", {} errors: {}", self.errors.len(), preview));
            if self.errors.len() > SUMMARY_ERROR_PREVIEW {
                summary.push_str("...");
            }
        }
        self.summary = summary;
    }

    /// 单文件模式：转换成功
    pub fn single_success(root: &Path) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        Self {
            summary: format!("Successfully processed file {}", name),
            status: RunStatus::Ok,
            modified_count: 1,
            errors: Vec::new(),
            js_files_found: 1,
            notices: Vec::new(),
        }
    }

    /// 单文件模式：转换失败或转换过程中出现故障
    pub fn single_failure(root: &Path, reason: &str) -> Self {
        Self {
            summary: format!("Error processing file: {}", reason),
            status: RunStatus::Error,
            modified_count: 0,
            errors: vec![format!("{}: {}", root.display(), reason)],
            js_files_found: 1,
            notices: Vec::new(),
        }
    }

    /// 是否完全成功
    pub fn is_ok(&self) -> bool {
        self.status == RunStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_with_errors(n: usize) -> RunSummary {
        let mut s = RunSummary::default();
        for i in 0..n {
            s.count_found();
            s.record(Path::new(&format!("f{}.js", i)), Outcome::Failure("bad".into()));
        }
        s.finish();
        s
    }

    #[test]
    fn test_finish_without_errors() {
        let mut s = RunSummary::default();
        s.count_found();
        s.record(Path::new("a.js"), Outcome::Success);
        s.finish();
        assert_eq!(s.status, RunStatus::Ok);
        assert_eq!(s.summary, "Modified 1 files");
    }

    #[test]
    fn test_summary_truncates_after_three_errors() {
        let s = summary_with_errors(4);
        assert_eq!(
            s.summary,
            "Modified 0 files, 4 errors: f0.js: bad, f1.js: bad, f2.js: bad..."
        );
        assert!(!s.summary.contains("f3.js"));
    }

    #[test]
    fn test_summary_exactly_three_errors_has_no_ellipsis() {
        let s = summary_with_errors(3);
        assert!(s.summary.ends_with("f2.js: bad"));
        assert!(!s.summary.contains("..."));
    }

    #[test]
    fn test_all_failures_is_partial() {
        let s = summary_with_errors(2);
        assert_eq!(s.status, RunStatus::Partial);
        assert_eq!(s.modified_count, 0);
    }

    #[test]
    fn test_single_file_shapes() {
        let ok = RunSummary::single_success(Path::new("src/x.js"));
        assert_eq!(ok.summary, "Successfully processed file x.js");
        assert_eq!(ok.js_files_found, 1);
        assert!(ok.is_ok());

        let err = RunSummary::single_failure(Path::new("x.js"), "boom");
        assert_eq!(err.status, RunStatus::Error);
        assert_eq!(err.errors, vec!["x.js: boom".to_string()]);
        assert_eq!(err.summary, "Error processing file: boom");
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let s = summary_with_errors(1);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["status"], "PARTIAL");
        assert_eq!(v["js_files_found"], 1);
        assert!(v.get("notices").is_none());
    }
}
