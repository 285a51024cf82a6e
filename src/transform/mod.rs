//! # 转换能力
//!
//! 单文件转换被视为外部能力：引擎只关心“是否出错”和错误信息，
//! 不关心转换具体做了什么。
//!
//! `apply` 返回 `Err` 表示转换过程本身出现故障（不属于其错误报告协议），
//! 由 `batch/runner.rs` 捕获并降级为失败结果。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 子模块: command（外部命令实现）

pub mod command;

pub use command::CommandTransform;

use std::path::Path;

/// 转换报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// 是否出错
    pub is_error: bool,
    /// 错误信息
    pub error: Option<String>,
}

impl TransformReport {
    /// 成功报告
    pub fn ok() -> Self {
        Self::default()
    }

    /// 失败报告
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_error: true,
            error: Some(error.into()),
        }
    }
}

/// 单文件转换能力
pub trait Transform {
    /// 转换 `path` 指向的文件；`rich` 要求转换输出更详细的元数据
    fn apply(&self, path: &Path, rich: bool) -> anyhow::Result<TransformReport>;
}

impl<F> Transform for F
where
    F: Fn(&Path, bool) -> anyhow::Result<TransformReport>,
{
    fn apply(&self, path: &Path, rich: bool) -> anyhow::Result<TransformReport> {
        self(path, rich)
    }
}
