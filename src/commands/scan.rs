//! # scan 命令实现
//!
//! 列出 process 会转换的文件（扩展名匹配且未被忽略），不执行转换。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/runner.rs`, `utils/output.rs`

use crate::batch;
use crate::cli::scan::ScanArgs;
use crate::cli::OutputMode;
use crate::error::Result;
use crate::utils::output;

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<i32> {
    let options = super::sweep_options(&args.filter)?;
    let files = batch::scan(&args.root, &options)?;

    match args.format {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&files)?),
        OutputMode::Human => {
            output::print_header(&format!("Scanning {}", args.root.display()));
            for f in &files {
                println!("  {}", f);
            }
            if files.is_empty() {
                output::print_warning(&format!(
                    "No {} files found in {}",
                    options.extensions,
                    args.root.display()
                ));
            } else {
                output::print_done(&format!("Found {} files", files.len()));
            }
        }
    }

    Ok(0)
}
