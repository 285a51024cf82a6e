//! # 数据模型模块
//!
//! 定义单文件处理结果与运行汇总数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: summary

pub mod summary;

pub use summary::{Notice, NoticeLevel, Outcome, RunStatus, RunSummary};
