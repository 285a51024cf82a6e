//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `transform/`, `utils/`
//! - 子模块: process, scan

pub mod process;
pub mod scan;

use crate::batch::{ExtensionSet, SweepOptions};
use crate::cli::{Commands, FilterArgs};
use crate::error::Result;

/// 执行命令，返回进程退出码
pub fn run(cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Process(args) => process::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 由筛选参数构建运行选项
fn sweep_options(filter: &FilterArgs) -> Result<SweepOptions> {
    Ok(SweepOptions::default()
        .with_extensions(ExtensionSet::parse(&filter.ext)?)
        .with_ignore_file(filter.ignore_file.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_options_from_filter() {
        let filter = FilterArgs {
            ext: "ts,tsx".into(),
            ignore_file: " .sweepignore ".into(),
        };
        let options = sweep_options(&filter).unwrap();
        assert!(options.extensions.matches("a.tsx"));
        assert!(!options.extensions.matches("a.js"));
        assert_eq!(options.ignore_file, ".sweepignore");
        assert!(options.rich);
    }

    #[test]
    fn test_sweep_options_rejects_empty_ext() {
        let filter = FilterArgs {
            ext: ",".into(),
            ignore_file: ".gitignore".into(),
        };
        assert!(sweep_options(&filter).is_err());
    }
}
