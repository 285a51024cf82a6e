//! # 统一错误处理模块
//!
//! 定义 srcsweep 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的转换失败不会出现在这里：它们在 `batch/runner.rs` 中被降级为
//! `Outcome::Failure` 并写入 `RunSummary`。只有目录遍历本身的故障会作为
//! `SweepError` 向上传播。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// srcsweep 统一错误类型
#[derive(Error, Debug)]
pub enum SweepError {
    // ─────────────────────────────────────────────────────────────
    // 遍历错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to walk directory: {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SweepError>;
