//! # process 命令实现
//!
//! 对根路径执行一次完整运行并输出汇总。
//!
//! ## 功能
//! - 以外部命令作为单文件转换
//! - spinner 显示已发现的文件数
//! - human 模式：错误表格 + 状态行；json 模式：序列化 `RunSummary`
//! - 状态非 OK 时退出码为 1（`--no-fail` 除外）
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `batch/`, `transform/command.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{self, EventSink};
use crate::cli::process::ProcessArgs;
use crate::cli::OutputMode;
use crate::error::Result;
use crate::models::{Notice, NoticeLevel, RunStatus, RunSummary};
use crate::transform::CommandTransform;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::Path;
use tabled::{Table, Tabled};

/// 错误表格行
#[derive(Debug, Clone, Tabled)]
struct ErrorRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 终端事件接收器
struct ConsoleSink {
    pb: ProgressBar,
    human: bool,
}

impl ConsoleSink {
    fn new(human: bool) -> Self {
        let pb = if human {
            progress::create_spinner("Scanning")
        } else {
            ProgressBar::hidden()
        };
        Self { pb, human }
    }

    fn finish(self) {
        self.pb.finish_and_clear();
    }
}

impl EventSink for ConsoleSink {
    fn notice(&mut self, notice: &Notice) {
        if self.human && notice.level == NoticeLevel::Warning {
            self.pb.suspend(|| output::print_warning(&notice.message));
        }
    }

    fn candidate(&mut self, relative: &Path) {
        self.pb.inc(1);
        self.pb.set_message(relative.display().to_string());
    }
}

/// 执行 process 命令
pub fn execute(args: ProcessArgs) -> Result<i32> {
    let options = super::sweep_options(&args.filter)?.with_rich(!args.no_rich);
    let transform = CommandTransform::new(&args.command)
        .with_args(args.args.clone())
        .with_rich_flag(Some(args.rich_flag.clone()));

    let human = args.format == OutputMode::Human;
    if human {
        output::print_header(&format!("Processing {}", args.root.display()));
        output::print_info(&format!(
            "Transform: {} (extensions: {})",
            args.command, options.extensions
        ));
    }

    let mut sink = ConsoleSink::new(human);
    let result = batch::process(&args.root, &options, &transform, &mut sink);
    sink.finish();
    let summary = result?;

    match args.format {
        OutputMode::Human => print_human(&summary),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(exit_code(&summary, args.no_fail))
}

fn exit_code(summary: &RunSummary, no_fail: bool) -> i32 {
    if summary.is_ok() || no_fail {
        0
    } else {
        1
    }
}

fn error_rows(errors: &[String]) -> Vec<ErrorRow> {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let (file, reason) = e.split_once(": ").unwrap_or((e.as_str(), ""));
            ErrorRow {
                index: i + 1,
                file: file.to_string(),
                reason: reason.to_string(),
            }
        })
        .collect()
}

fn print_human(summary: &RunSummary) {
    if !summary.errors.is_empty() {
        output::print_header(&format!("{} Failed Files", summary.errors.len()));
        println!("{}\n", Table::new(error_rows(&summary.errors)));
    }

    output::print_info(&format!(
        "Found {} files, modified {}, {} errors",
        summary.js_files_found,
        summary.modified_count,
        summary.errors.len()
    ));

    match summary.status {
        RunStatus::Ok => output::print_done(&summary.summary),
        RunStatus::Partial => output::print_warning(&summary.summary),
        RunStatus::Error => output::print_error(&summary.summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_rows_split_path_and_reason() {
        let rows = error_rows(&[
            "src/b.jsx: syntax: unexpected token".to_string(),
            "weird".to_string(),
        ]);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].file, "src/b.jsx");
        assert_eq!(rows[0].reason, "syntax: unexpected token");
        assert_eq!(rows[1].file, "weird");
        assert_eq!(rows[1].reason, "");
    }

    #[test]
    fn test_exit_code() {
        let ok = RunSummary::default();
        assert_eq!(exit_code(&ok, false), 0);

        let failed = RunSummary::single_failure(Path::new("x.js"), "boom");
        assert_eq!(exit_code(&failed, false), 1);
        assert_eq!(exit_code(&failed, true), 0);
    }
}
