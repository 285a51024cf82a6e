//! # 批量执行器
//!
//! 顺序执行一次完整运行：判断根路径类型、遍历、筛选、转换、汇总。
//!
//! ## 功能
//! - 单文件模式：直接转换，不应用扩展名与忽略规则
//! - 目录模式：先计数（扩展名匹配）再判断忽略，之后逐个转换
//! - 单文件故障（`Err` 或 panic）被捕获并记为失败，不中断运行
//! - 诊断事件同时写入 `tracing`、事件接收器与 `RunSummary::notices`
//!
//! ## 依赖关系
//! - 被 `commands/process.rs`, `commands/scan.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/ignore.rs`, `transform/`

use super::collector::{ExtensionSet, FileCollector};
use super::ignore::{IgnoreRules, DEFAULT_IGNORE_FILE};
use crate::error::Result;
use crate::models::{Notice, NoticeLevel, Outcome, RunSummary};
use crate::transform::Transform;

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, info, warn};

/// 转换未给出错误信息时使用的原因
const UNKNOWN_ERROR: &str = "Unknown error";

/// 运行选项
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// 是否请求详细元数据
    pub rich: bool,
    /// 可处理的后缀
    pub extensions: ExtensionSet,
    /// 根目录下的忽略文件名
    pub ignore_file: String,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            rich: true,
            extensions: ExtensionSet::default(),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
        }
    }
}

impl SweepOptions {
    pub fn with_rich(mut self, rich: bool) -> Self {
        self.rich = rich;
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore_file(mut self, file_name: impl Into<String>) -> Self {
        self.ignore_file = file_name.into();
        self
    }
}

/// 运行事件接收器
pub trait EventSink {
    /// 诊断事件
    fn notice(&mut self, notice: &Notice);

    /// 发现一个扩展名匹配的文件（用于进度显示）
    fn candidate(&mut self, _relative: &Path) {}
}

impl EventSink for Vec<Notice> {
    fn notice(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}

/// 根路径类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    File,
    /// 包括不存在的路径
    Directory,
}

impl RootKind {
    pub fn resolve(root: &Path) -> Self {
        if root.is_file() {
            RootKind::File
        } else {
            RootKind::Directory
        }
    }
}

/// 执行一次运行
///
/// 单个文件的失败与故障都记录在返回的 `RunSummary` 中；只有目录遍历本身的
/// 错误会作为 `Err` 返回。
pub fn process(
    root: &Path,
    options: &SweepOptions,
    transform: &dyn Transform,
    sink: &mut dyn EventSink,
) -> Result<RunSummary> {
    match RootKind::resolve(root) {
        RootKind::File => Ok(process_file(root, options, transform, sink)),
        RootKind::Directory => process_directory(root, options, transform, sink),
    }
}

/// 列出会被处理的文件（扩展名匹配且未被忽略），不执行转换
pub fn scan(root: &Path, options: &SweepOptions) -> Result<Vec<String>> {
    if RootKind::resolve(root) == RootKind::File {
        return Ok(vec![root.display().to_string()]);
    }

    let rules = IgnoreRules::load(root, &options.ignore_file);
    let collector = FileCollector::new(root);
    let mut files = Vec::new();
    for candidate in collector.eligible(&options.extensions) {
        let candidate = candidate?;
        if rules.excluded(&candidate.relative) {
            debug!("Skipped (ignored): {}", candidate.relative.display());
            continue;
        }
        files.push(candidate.relative.display().to_string());
    }

    info!("Scanned {}: found {} files", root.display(), files.len());
    Ok(files)
}

/// 单文件模式
fn process_file(
    root: &Path,
    options: &SweepOptions,
    transform: &dyn Transform,
    sink: &mut dyn EventSink,
) -> RunSummary {
    let mut notices = Vec::new();
    emit(
        sink,
        &mut notices,
        Notice::info(format!("Processing single file: {}", root.display())),
    );

    let mut summary = match invoke(transform, root, options.rich) {
        Outcome::Success => RunSummary::single_success(root),
        Outcome::Failure(reason) => RunSummary::single_failure(root, &reason),
    };
    summary.notices = notices;
    summary
}

/// 目录模式
fn process_directory(
    root: &Path,
    options: &SweepOptions,
    transform: &dyn Transform,
    sink: &mut dyn EventSink,
) -> Result<RunSummary> {
    let mut notices = Vec::new();
    emit(
        sink,
        &mut notices,
        Notice::info(format!("Processing directory: {}", root.display())),
    );

    let rules = IgnoreRules::load(root, &options.ignore_file);
    let collector = FileCollector::new(root);
    let mut summary = RunSummary::default();

    for candidate in collector.eligible(&options.extensions) {
        let candidate = candidate?;
        let rel = candidate.relative.display().to_string();

        // 先计数再判断忽略：被忽略的文件同样计入 js_files_found
        summary.count_found();
        sink.candidate(&candidate.relative);
        emit(sink, &mut notices, Notice::debug(format!("Found file: {}", rel)));

        if rules.excluded(&candidate.relative) {
            emit(
                sink,
                &mut notices,
                Notice::debug(format!("Skipped (ignored): {}", rel)),
            );
            continue;
        }

        let outcome = invoke(transform, &candidate.path, options.rich);
        if outcome == Outcome::Success {
            emit(sink, &mut notices, Notice::info(format!("Processed: {}", rel)));
        }
        summary.record(&candidate.relative, outcome);
    }

    if summary.js_files_found == 0 {
        emit(
            sink,
            &mut notices,
            Notice::warning(format!(
                "No {} files found in {}",
                options.extensions,
                root.display()
            )),
        );
    }

    summary.finish();
    summary.notices = notices;
    emit(
        sink,
        &mut Vec::new(),
        Notice::info(format!("Directory processing summary: {}", summary.summary)),
    );

    Ok(summary)
}

/// 调用转换并把所有结果（包括故障）映射为 `Outcome`
pub fn invoke(transform: &dyn Transform, path: &Path, rich: bool) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(|| transform.apply(path, rich))) {
        Ok(Ok(report)) if !report.is_error => Outcome::Success,
        Ok(Ok(report)) => {
            Outcome::Failure(report.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
        }
        Ok(Err(fault)) => Outcome::Failure(fault.to_string()),
        Err(payload) => Outcome::Failure(panic_message(&*payload)),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "transform panicked".to_string()
    }
}

/// 发出诊断事件；警告级别的事件同时保留在汇总中
fn emit(sink: &mut dyn EventSink, kept: &mut Vec<Notice>, notice: Notice) {
    match notice.level {
        NoticeLevel::Debug => debug!("{}", notice.message),
        NoticeLevel::Info => info!("{}", notice.message),
        NoticeLevel::Warning => warn!("{}", notice.message),
    }
    sink.notice(&notice);
    if notice.level == NoticeLevel::Warning {
        kept.push(notice);
    }
}
