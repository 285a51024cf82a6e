//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `process`: 对匹配文件逐个执行外部转换并汇总
//! - `scan`: 只列出会被处理的文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: process, scan

pub mod process;
pub mod scan;

use crate::batch::ignore::DEFAULT_IGNORE_FILE;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// srcsweep - 递归批量转换源文件
#[derive(Parser)]
#[command(name = "srcsweep")]
#[command(version)]
#[command(about = "Recursively apply an external transform to source files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Transform every matching file under a root and print a run summary
    Process(process::ProcessArgs),

    /// List the files `process` would transform, without running anything
    Scan(scan::ScanArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Colored terminal output
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// 文件筛选参数（process 与 scan 共用）
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Comma-separated file suffixes to process
    #[arg(short, long, env = "SRCSWEEP_EXT", default_value = ".js,.jsx")]
    pub ext: String,

    /// Ignore-rule file name, looked up in the root directory
    #[arg(long, env = "SRCSWEEP_IGNORE_FILE", default_value = DEFAULT_IGNORE_FILE)]
    pub ignore_file: String,
}
