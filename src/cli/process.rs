//! # process 子命令 CLI 定义
//!
//! 对根路径下的匹配文件逐个执行外部命令
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use super::{FilterArgs, OutputMode};
use clap::Args;
use std::path::PathBuf;

/// process 子命令参数
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// File or directory to process
    pub root: PathBuf,

    /// Program run once per file as `<command> [ARGS...] [rich flag] <file>`
    #[arg(short, long, env = "SRCSWEEP_COMMAND")]
    pub command: String,

    /// Extra arguments passed to the command before the file path
    #[arg(last = true)]
    pub args: Vec<String>,

    /// Flag appended to the command when rich output is requested
    #[arg(long, default_value = "--rich")]
    pub rich_flag: String,

    /// Do not request rich metadata from the transform
    #[arg(long, default_value_t = false)]
    pub no_rich: bool,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Human)]
    pub format: OutputMode,

    /// Exit with status 0 even when some files failed
    #[arg(long, default_value_t = false)]
    pub no_fail: bool,
}
