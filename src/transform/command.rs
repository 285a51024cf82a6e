//! # 外部命令转换
//!
//! 以子进程方式执行 `program [args...] [rich_flag] <file>`。
//!
//! - 退出码为 0：成功
//! - 非 0 退出码：失败，错误信息取 stderr（为空时使用退出状态）
//! - 无法启动进程：故障（`Err`）
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 构建
//! - 实现 `transform::Transform`

use super::{Transform, TransformReport};
use crate::error::SweepError;

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::trace;

/// 外部命令转换
#[derive(Debug, Clone)]
pub struct CommandTransform {
    program: String,
    args: Vec<String>,
    rich_flag: Option<String>,
}

impl CommandTransform {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            rich_flag: None,
        }
    }

    /// 固定参数（位于文件路径之前）
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// `rich` 为 true 时追加的参数
    pub fn with_rich_flag(mut self, flag: Option<String>) -> Self {
        self.rich_flag = flag.filter(|f| !f.is_empty());
        self
    }
}

impl Transform for CommandTransform {
    fn apply(&self, path: &Path, rich: bool) -> anyhow::Result<TransformReport> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if rich {
            if let Some(flag) = &self.rich_flag {
                cmd.arg(flag);
            }
        }
        cmd.arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        trace!("Running {:?}", cmd);

        let output = cmd.output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => anyhow::Error::new(SweepError::CommandNotFound {
                command: self.program.clone(),
            }),
            _ => anyhow::Error::new(e).context(format!("failed to run '{}'", self.program)),
        })?;

        if output.status.success() {
            return Ok(TransformReport::ok());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            format!("{} exited with {}", self.program, output.status)
        } else {
            stderr
        };
        Ok(TransformReport::failed(reason))
    }
}
