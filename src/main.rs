//! # srcsweep - 递归批量转换源文件
//!
//! 在根路径下查找指定后缀的源文件，按忽略规则筛选后，对每个文件调用外部
//! 转换，并把所有结果汇总为一份运行报告。
//!
//! ## 子命令
//! - `process` - 执行转换并输出汇总
//! - `scan`    - 只列出会被处理的文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (遍历、筛选、转换、汇总)
//!   │     ├── transform/ (单文件转换能力)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod transform;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// 日志级别环境变量，优先于 `-v`
const LOG_ENV: &str = "SRCSWEEP_LOG";

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::run(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("srcsweep={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
