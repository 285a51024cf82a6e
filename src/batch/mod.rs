//! # 批量处理模块
//!
//! 遍历、筛选、转换与汇总引擎。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 递归收集扩展名匹配的文件
//! - 按忽略规则跳过文件
//! - 顺序调用转换并汇总结果
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录，`ignore` 匹配忽略规则

pub mod collector;
pub mod ignore;
pub mod runner;

pub use collector::ExtensionSet;
pub use runner::{process, scan, EventSink, SweepOptions};
